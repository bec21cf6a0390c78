use crate::app_config::{AppConfig, Environment, ProviderKind};
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "commentlens/0.1 (sentiment-dashboard)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Tests drive this with a `HashMap` lookup instead of mutating the process env.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("COMMENTLENS_ENV", "development"))?;
    let log_level = or_default("COMMENTLENS_LOG_LEVEL", "info");
    let provider = parse_provider_kind(&or_default("COMMENTLENS_PROVIDER", "static"))?;

    // The remote provider's endpoint is checked once command-line overrides
    // are applied, when the provider is built.
    let endpoint = non_empty("COMMENTLENS_ENDPOINT");

    let request_timeout_secs = parse_u64("COMMENTLENS_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "COMMENTLENS_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    let user_agent = or_default("COMMENTLENS_USER_AGENT", DEFAULT_USER_AGENT);
    let fixture_path = non_empty("COMMENTLENS_FIXTURE_PATH").map(PathBuf::from);
    let simulated_delay_ms = parse_u64("COMMENTLENS_SIMULATED_DELAY_MS", "0")?;
    let export_dir = PathBuf::from(or_default("COMMENTLENS_EXPORT_DIR", "."));

    Ok(AppConfig {
        env,
        log_level,
        provider,
        endpoint,
        request_timeout_secs,
        user_agent,
        fixture_path,
        simulated_delay_ms,
        export_dir,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "COMMENTLENS_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Parse the data provider selector. Matching is case-insensitive.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `static` or `remote`.
pub fn parse_provider_kind(s: &str) -> Result<ProviderKind, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "static" => Ok(ProviderKind::Static),
        "remote" => Ok(ProviderKind::Remote),
        other => Err(ConfigError::InvalidEnvVar {
            var: "COMMENTLENS_PROVIDER".to_string(),
            reason: format!("expected 'static' or 'remote', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
