use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with ROLLCALL_ prefix (always wins)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub vote: VoteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Base URL of the roll-call vote endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `x-api-key` header.
    ///
    /// Deliberately optional: an unset key is reported at startup but
    /// the request is still sent with an empty credential.
    #[serde(default)]
    pub api_key: String,
}

/// Default vote coordinates used when the CLI does not override them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VoteConfig {
    /// Congress number.
    #[serde(default = "default_congress")]
    pub congress: u16,

    /// Session within the congress (1 or 2).
    #[serde(default = "default_session")]
    pub session: u8,

    /// Roll-call number within the session.
    #[serde(default = "default_vote_number")]
    pub number: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "https://www.senate.gov/legislative/LIS/roll_call_votes".to_string()
}

// These functions cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_congress() -> u16 {
    119
}

#[allow(clippy::missing_const_for_fn)]
fn default_session() -> u8 {
    1
}

#[allow(clippy::missing_const_for_fn)]
fn default_vote_number() -> u32 {
    124
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            congress: default_congress(),
            session: default_session(),
            number: default_vote_number(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. config.yaml file (if exists)
    /// 3. Environment variables with ROLLCALL_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("ROLLCALL_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// An empty API key is deliberately accepted; the fetcher sends the
    /// header with an empty value and lets the endpoint decide.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "fetch.base_url is required. Set ROLLCALL_FETCH__BASE_URL or configure in config.yaml.".into(),
            ));
        }

        if !self.fetch.base_url.starts_with("http://")
            && !self.fetch.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "fetch.base_url must start with http:// or https://, got: '{}'",
                self.fetch.base_url
            )));
        }

        if self.vote.congress == 0 {
            return Err(ConfigError::Validation("vote.congress cannot be 0".into()));
        }

        if self.vote.session == 0 {
            return Err(ConfigError::Validation("vote.session cannot be 0".into()));
        }

        if self.vote.number == 0 {
            return Err(ConfigError::Validation("vote.number cannot be 0".into()));
        }

        Ok(())
    }
}
