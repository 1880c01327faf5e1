use serde::Deserialize;

/// Short-lived credential authorizing a cloud recognition session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeechToken {
    pub token: String,
    pub region: String,
}

/// Domain interface for fetching the credential that authorizes a
/// recognition session.
pub trait TokenProvider: Send {
    fn fetch(&self) -> Result<SpeechToken, Box<dyn std::error::Error>>;
}
