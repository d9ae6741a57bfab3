//! Runtime configuration.
//!
//! Values come from environment variables. Every variable is optional; blank
//! values count as unset.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::{Error, Result};

const ENV_DATA_DIR: &str = "MARKNOTE_DATA_DIR";
const ENV_REGISTER_URL: &str = "MARKNOTE_REGISTER_URL";
const ENV_REDIRECT_DELAY_MS: &str = "MARKNOTE_REDIRECT_DELAY_MS";

/// Registration endpoint used when none is configured
pub const DEFAULT_REGISTER_ENDPOINT: &str =
    "https://markdown-connecting.onrender.com/api/auth/register";

/// Delay between a successful registration and the redirect to login
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the note blob
    pub data_dir: PathBuf,
    /// Registration `POST` endpoint
    pub register_endpoint: String,
    /// Wait before navigating to login after registering
    pub redirect_delay: Duration,
}

impl AppConfig {
    /// Defaults with notes stored under `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            register_endpoint: DEFAULT_REGISTER_ENDPOINT.to_string(),
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// `default_data_dir` is used when `MARKNOTE_DATA_DIR` is unset.
    pub fn from_env(default_data_dir: PathBuf) -> Result<Self> {
        parse_config(default_data_dir, |key| env::var(key).ok())
    }

    /// Replace the registration endpoint after validating it
    pub fn with_register_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.register_endpoint = normalize_endpoint(endpoint)?;
        Ok(self)
    }
}

/// Trim optional text and drop it when empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_config<F>(default_data_dir: PathBuf, lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = AppConfig::new(
        normalize_text_option(lookup(ENV_DATA_DIR)).map_or(default_data_dir, PathBuf::from),
    );

    if let Some(endpoint) = normalize_text_option(lookup(ENV_REGISTER_URL)) {
        config = config.with_register_endpoint(&endpoint)?;
    }

    if let Some(delay) = normalize_text_option(lookup(ENV_REDIRECT_DELAY_MS)) {
        let millis = delay.parse::<u64>().map_err(|_| {
            Error::Config(format!(
                "{ENV_REDIRECT_DELAY_MS} must be a whole number of milliseconds, got `{delay}`"
            ))
        })?;
        config.redirect_delay = Duration::from_millis(millis);
    }

    Ok(config)
}

fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let trimmed = endpoint.trim();
    let url = Url::parse(trimmed)
        .map_err(|error| Error::Config(format!("invalid registration endpoint: {error}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(
            "registration endpoint must use http:// or https://".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        parse_config(PathBuf::from("/default"), |key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, AppConfig::new("/default"));
        assert_eq!(config.register_endpoint, DEFAULT_REGISTER_ENDPOINT);
        assert_eq!(config.redirect_delay, Duration::from_millis(2000));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = parse(&[
            (ENV_DATA_DIR, " /srv/notes "),
            (ENV_REGISTER_URL, "http://localhost:8080/api/auth/register"),
            (ENV_REDIRECT_DELAY_MS, "500"),
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/notes"));
        assert_eq!(
            config.register_endpoint,
            "http://localhost:8080/api/auth/register"
        );
        assert_eq!(config.redirect_delay, Duration::from_millis(500));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = parse(&[(ENV_DATA_DIR, "   "), (ENV_REGISTER_URL, "")]).unwrap();
        assert_eq!(config, AppConfig::new("/default"));
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let error = parse(&[(ENV_REGISTER_URL, "ftp://example.com/register")]).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        assert!(parse(&[(ENV_REGISTER_URL, "example.com/register")]).is_err());
    }

    #[test]
    fn non_numeric_delay_is_rejected() {
        let error = parse(&[(ENV_REDIRECT_DELAY_MS, "soon")]).unwrap_err();
        assert!(error.to_string().contains(ENV_REDIRECT_DELAY_MS));
    }
}
