//! Wikidata endpoint configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";
/// Wikidata rejects requests without a descriptive User-Agent.
pub const DEFAULT_USER_AGENT: &str = concat!("namefold/", env!("CARGO_PKG_VERSION"));
/// `wd:Q6256`, "country"
pub const DEFAULT_INSTANCE_OF: &str = "Q6256";

/// Where and how to query Wikidata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikidataConfig {
    /// SPARQL endpoint URL
    pub endpoint: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Language tag of the label used to look the entity up
    pub language: String,
    /// Class the entity must be an instance of (`wdt:P31`)
    pub instance_of: String,
}

impl Default for WikidataConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            language: "en".to_string(),
            instance_of: DEFAULT_INSTANCE_OF.to_string(),
        }
    }
}

impl WikidataConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration values.
    ///
    /// `language` and `instance_of` are spliced into the query text, so they
    /// are restricted to language-tag and item-id shapes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint(format!(
                "{}: scheme must be http or https",
                self.endpoint
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingField("user_agent".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "timeout_secs must be positive".to_string(),
            ));
        }

        let language_ok = !self.language.is_empty()
            && self
                .language
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            && self.language.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !language_ok {
            return Err(ConfigError::InvalidValue(format!(
                "language {:?} is not a language tag",
                self.language
            )));
        }

        let instance_ok = self
            .instance_of
            .strip_prefix('Q')
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
        if !instance_ok {
            return Err(ConfigError::InvalidValue(format!(
                "instance_of {:?} is not a Wikidata item id",
                self.instance_of
            )));
        }

        Ok(())
    }
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
