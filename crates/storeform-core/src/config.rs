use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Reads the `STOREFORM_*` settings, picking up a `.env` file in the working
/// directory first if there is one.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for an unknown `STOREFORM_ENV`, a
/// malformed image cap or clamp flag, or an empty store key.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] but only sees variables already set on the
/// process. Used by the binary, which loads `.env` itself before logging is up.
///
/// # Errors
///
/// See [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(invalid(var, format!("expected a boolean, got \"{raw}\""))),
        }
    };

    let env = parse_environment(&or_default("STOREFORM_ENV", "development"))?;
    let log_level = or_default("STOREFORM_LOG_LEVEL", "info");
    let store_path = PathBuf::from(or_default("STOREFORM_STORE_PATH", "./data/products.json"));

    let store_key = or_default("STOREFORM_STORE_KEY", "products");
    if store_key.trim().is_empty() {
        return Err(invalid("STOREFORM_STORE_KEY", "must not be empty".to_string()));
    }

    let max_images = parse_usize("STOREFORM_MAX_IMAGES", "10")?;
    if max_images == 0 {
        return Err(invalid("STOREFORM_MAX_IMAGES", "must be at least 1".to_string()));
    }

    let seller_name = or_default("STOREFORM_SELLER_NAME", crate::catalog::DEFAULT_SELLER_NAME);
    let clamp_offer = parse_bool("STOREFORM_CLAMP_OFFER", "true")?;

    Ok(AppConfig {
        env,
        log_level,
        store_path,
        store_key,
        max_images,
        seller_name,
        clamp_offer,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOREFORM_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
