use thiserror::Error;

use crate::session::domain::token_provider::{SpeechToken, TokenProvider};

#[derive(Error, Debug)]
pub enum TokenFetchError {
    #[error("token request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("token endpoint {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid token response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetches a recognition token from an HTTP endpoint returning a JSON body
/// of the form `{"token": "...", "region": "..."}`.
pub struct HttpTokenProvider {
    url: String,
}

impl HttpTokenProvider {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    fn fetch_token(&self) -> Result<SpeechToken, TokenFetchError> {
        let response =
            reqwest::blocking::get(&self.url).map_err(|e| TokenFetchError::Request {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TokenFetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json::<SpeechToken>()
            .map_err(|e| TokenFetchError::Decode {
                url: self.url.clone(),
                source: e,
            })
    }
}

impl TokenProvider for HttpTokenProvider {
    fn fetch(&self) -> Result<SpeechToken, Box<dyn std::error::Error>> {
        Ok(self.fetch_token()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_deserializes() {
        let token: SpeechToken =
            serde_json::from_str(r#"{"token": "abc123", "region": "eastus"}"#).unwrap();
        assert_eq!(token.token, "abc123");
        assert_eq!(token.region, "eastus");
    }

    #[test]
    fn test_token_response_missing_field_is_rejected() {
        let result = serde_json::from_str::<SpeechToken>(r#"{"token": "abc123"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_fetch_from_unreachable_host_returns_request_error() {
        // Skip in CI — requires name resolution to fail fast
        if std::env::var("CI").is_ok() {
            return;
        }
        let provider = HttpTokenProvider::new("http://invalid.nonexistent.example.com/token");
        let result = provider.fetch_token();
        assert!(matches!(result, Err(TokenFetchError::Request { .. })));
    }
}
