//! Greeting configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text sent at the start of every session unless configured otherwise.
pub const DEFAULT_GREETING: &str = "Welcome to the Bank of Rasa! How can I help you today?";

/// Errors that can occur when loading a greeting configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse greeting configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Greeting text must not be empty")]
    EmptyGreeting,
}

/// Settings for the session-start greeting.
///
/// Every field has a default, so `{}` is a valid configuration.
///
/// ```rust
/// use session_greeter::config::{GreetingConfig, DEFAULT_GREETING};
///
/// let config = GreetingConfig::from_json_str("{}").unwrap();
/// assert_eq!(config.text, DEFAULT_GREETING);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// The welcome message.
    pub text: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_GREETING.to_string(),
        }
    }
}

impl GreetingConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.trim().is_empty() {
            return Err(ConfigError::EmptyGreeting);
        }
        Ok(())
    }
}
