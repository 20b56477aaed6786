use shared_types::AppConfig;
use std::sync::OnceLock;

/// `config.toml` from the workspace root, compiled in so the web build
/// needs no filesystem.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// The application config, parsed on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_config(CONFIG_TOML))
}

/// Parse config text, falling back to defaults (all optional features off)
/// when it is malformed.
fn parse_config(contents: &str) -> AppConfig {
    match AppConfig::from_toml(contents) {
        Ok(config) => {
            tracing::info!(
                features = ?config.features,
                submit_delay_ms = config.login.submit_delay_ms,
                "config loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
            AppConfig::default()
        }
    }
}
