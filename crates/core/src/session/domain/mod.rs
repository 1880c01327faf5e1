pub mod recognition_session;
pub mod token_provider;
pub mod transcript;
