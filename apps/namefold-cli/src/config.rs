//! Configuration for the namefold CLI
//!
//! Layered as defaults < config file < environment < command-line flags.
//! The config file lives at `<config dir>/namefold/config.toml`:
//!
//! ```toml
//! [wikidata]
//! endpoint = "https://query.wikidata.org/sparql"
//! user_agent = "namefold/0.1 (ops@example.org)"
//! timeout_secs = 30
//! language = "en"
//! instance_of = "Q6256"
//!
//! [pipeline]
//! deadline_secs = 60
//! sorted = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use namefold_wikidata::WikidataConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_ENDPOINT: &str = "NAMEFOLD_ENDPOINT";
pub const ENV_USER_AGENT: &str = "NAMEFOLD_USER_AGENT";
pub const ENV_TIMEOUT_SECS: &str = "NAMEFOLD_TIMEOUT_SECS";

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamefoldConfig {
    /// Label source settings
    pub wikidata: WikidataConfig,
    /// Pipeline run settings
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Overall deadline for one fetch, in seconds
    pub deadline_secs: u64,
    /// Print names in code point order instead of set order
    pub sorted: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            deadline_secs: 60,
            sorted: false,
        }
    }
}

impl PipelineConfig {
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }
}

impl NamefoldConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("namefold").join("config.toml"))
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    /// Load from `path`, or from the default location when none is given.
    ///
    /// An explicitly named file must exist; a missing default file just
    /// means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => {
                    tracing::debug!("Loading config from {:?}", path);
                    Self::from_file(&path)
                }
                _ => Ok(Self::default()),
            },
        }
    }

    /// Apply `NAMEFOLD_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `NAMEFOLD_*` overrides from an arbitrary lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.wikidata.endpoint = endpoint;
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            self.wikidata.user_agent = user_agent;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.wikidata.timeout_secs = timeout.trim().parse().map_err(|_| {
                ConfigError::InvalidEnv(format!("{}={:?} is not a number", ENV_TIMEOUT_SECS, timeout))
            })?;
        }
        Ok(())
    }

    /// Apply command-line overrides. Flags win over file and environment.
    pub fn apply_flags(
        &mut self,
        timeout: Option<u64>,
        endpoint: Option<String>,
        language: Option<String>,
        sorted: bool,
    ) {
        if let Some(timeout) = timeout {
            self.wikidata.timeout_secs = timeout;
        }
        if let Some(endpoint) = endpoint {
            self.wikidata.endpoint = endpoint;
        }
        if let Some(language) = language {
            self.wikidata.language = language;
        }
        self.pipeline.sorted |= sorted;
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wikidata.validate()?;

        if self.pipeline.deadline_secs == 0 {
            return Err(ConfigError::OutOfRange(
                "deadline_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration loading or validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid environment override: {0}")]
    InvalidEnv(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error(transparent)]
    Wikidata(#[from] namefold_wikidata::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = NamefoldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pipeline.deadline(), Duration::from_secs(60));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = NamefoldConfig::default();
        config.wikidata.language = "fr".to_string();
        config.pipeline.sorted = true;
        let toml_str = config.to_toml().unwrap();
        assert_eq!(NamefoldConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = NamefoldConfig::from_toml(
            r#"
            [wikidata]
            user_agent = "namefold/0.1 (ops@example.org)"
            "#,
        )
        .unwrap();
        assert_eq!(config.wikidata.user_agent, "namefold/0.1 (ops@example.org)");
        assert_eq!(config.wikidata.timeout_secs, 30);
        assert_eq!(config.pipeline, PipelineConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = NamefoldConfig::from_toml("[wikidata\nendpoint = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pipeline]\ndeadline_secs = 5").unwrap();
        let config = NamefoldConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.pipeline.deadline_secs, 5);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = NamefoldConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = NamefoldConfig::default();
        config
            .apply_env_from(env(&[
                (ENV_ENDPOINT, "http://localhost:9999/sparql"),
                (ENV_USER_AGENT, "ci-bot/1.0"),
                (ENV_TIMEOUT_SECS, " 7 "),
            ]))
            .unwrap();
        assert_eq!(config.wikidata.endpoint, "http://localhost:9999/sparql");
        assert_eq!(config.wikidata.user_agent, "ci-bot/1.0");
        assert_eq!(config.wikidata.timeout_secs, 7);
    }

    #[test]
    fn test_invalid_env_timeout() {
        let mut config = NamefoldConfig::default();
        let err = config
            .apply_env_from(env(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv(_)));
    }

    #[test]
    fn test_flags_override_file_and_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[wikidata]\nendpoint = \"http://file.example/sparql\"\ntimeout_secs = 10\nlanguage = \"de\""
        )
        .unwrap();

        let mut config = NamefoldConfig::load(Some(file.path())).unwrap();
        config
            .apply_env_from(env(&[
                (ENV_ENDPOINT, "http://env.example/sparql"),
                (ENV_TIMEOUT_SECS, "20"),
            ]))
            .unwrap();
        assert_eq!(config.wikidata.endpoint, "http://env.example/sparql");
        assert_eq!(config.wikidata.timeout_secs, 20);

        config.apply_flags(
            Some(5),
            Some("http://flag.example/sparql".to_string()),
            Some("fr".to_string()),
            true,
        );
        assert!(config.validate().is_ok());
        assert_eq!(config.wikidata.endpoint, "http://flag.example/sparql");
        assert_eq!(config.wikidata.timeout_secs, 5);
        assert_eq!(config.wikidata.language, "fr");
        assert!(config.pipeline.sorted);
    }

    #[test]
    fn test_absent_flags_keep_lower_layers() {
        let mut config = NamefoldConfig::default();
        config
            .apply_env_from(env(&[(ENV_TIMEOUT_SECS, "20")]))
            .unwrap();
        config.pipeline.sorted = true;

        config.apply_flags(None, None, None, false);
        assert_eq!(config.wikidata.timeout_secs, 20);
        assert_eq!(config.wikidata.language, "en");
        assert!(config.pipeline.sorted);
    }

    #[test]
    fn test_invalid_language_flag_rejected() {
        let mut config = NamefoldConfig::default();
        config.apply_flags(None, None, Some("en\" } UNION {".to_string()), false);
        assert!(matches!(config.validate(), Err(ConfigError::Wikidata(_))));
    }

    #[test]
    fn test_validation_delegates_to_wikidata() {
        let mut config = NamefoldConfig::default();
        config.wikidata.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Wikidata(_))));
    }

    #[test]
    fn test_zero_deadline() {
        let mut config = NamefoldConfig::default();
        config.pipeline.deadline_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));
    }
}
