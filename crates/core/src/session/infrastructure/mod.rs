pub mod http_token_provider;
pub mod scripted_session;
