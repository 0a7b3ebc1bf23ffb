use crate::{Error, Result};
use std::env;
use std::fmt;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.anthropic.com/v1/messages";

/// The upstream credential. Kept behind a newtype so it cannot leak through
/// `Debug` formatting of the config or any struct embedding it; the raw
/// value is only reachable through [`ApiKey::expose`], which the relay uses
/// to set the `x-api-key` header.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key is tolerated at startup; requests then fail upstream.
    pub api_key: Option<ApiKey>,
    pub port: u16,
    pub upstream_url: String,
}

/// Read configuration from the process environment once, at startup.
pub fn load() -> Result<Config> {
    from_vars(
        env::var("CLAUDE_API_KEY").ok(),
        env::var("PORT").ok(),
        env::var("CLAUDE_API_URL").ok(),
    )
}

fn from_vars(
    api_key: Option<String>,
    port: Option<String>,
    upstream_url: Option<String>,
) -> Result<Config> {
    let api_key = api_key.filter(|k| !k.is_empty()).map(ApiKey::new);
    if api_key.is_none() {
        warn!("CLAUDE_API_KEY not set; upstream requests will be rejected with 401");
    }

    let port = match port {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::config(format!("invalid PORT value: {raw}")))?,
        None => DEFAULT_PORT,
    };

    Ok(Config {
        api_key,
        port,
        upstream_url: upstream_url.unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let config = from_vars(None, None, None).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = from_vars(
            Some("sk-test".to_string()),
            Some("8080".to_string()),
            Some("http://localhost:9999/v1/messages".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_key.unwrap().expose(), "sk-test");
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_url, "http://localhost:9999/v1/messages");
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let config = from_vars(Some(String::new()), None, None).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let err = from_vars(None, Some("not-a-port".to_string()), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn api_key_debug_output_is_redacted() {
        let key = ApiKey::new("sk-very-secret");
        let printed = format!("{key:?}");
        assert!(!printed.contains("sk-very-secret"));
        assert_eq!(printed, "ApiKey(***)");
    }
}
