//! Client configuration

use thiserror::Error;

/// Connection settings for the case-management API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_token: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LEXDOC_API_URL is not set")]
    MissingBaseUrl,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Read configuration from the environment. Loading a `.env` file
    /// beforehand is the binary's job.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("LEXDOC_API_URL").map_err(|_| ConfigError::MissingBaseUrl)?;
        let api_token = std::env::var("LEXDOC_API_TOKEN").ok();
        Ok(Self {
            base_url,
            api_token,
        })
    }
}
