use serde::{Deserialize, Serialize};

/// Default artificial latency of a login submission, in milliseconds.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// Feature flags controlling optional parts of the interface.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the demo credentials box and the "Use Sample Credentials" button.
    #[serde(default)]
    pub sample_credentials: bool,
}

/// Login submission tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginSettings {
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub login: LoginSettings,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
