use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub const TOKEN_VAR: &str = "SCP_TOKEN";
pub const CAMPAIGN_VAR: &str = "EBAY_CAMPAIGN_ID";
pub const BASE_URL_VAR: &str = "SCP_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Read-only settings taken from the process environment at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub scp_token: Option<String>,
    pub campaign_id: Option<String>,
    pub pricing_base_url: Option<String>,
}

impl AppConfig {
    /// Loads `.env` (if present) and then reads the environment.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => info!(path = %path.display(), "loaded environment file"),
            Err(err) if err.not_found() => {}
            Err(err) => warn!(%err, "failed to read .env file"),
        }

        match Self::from_env() {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "ignoring invalid configuration");
                Self::from_lookup(|key| {
                    (key != BASE_URL_VAR)
                        .then(|| std::env::var(key).ok())
                        .flatten()
                })
                .unwrap_or_default()
            }
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let pricing_base_url = match read(BASE_URL_VAR) {
            Some(raw) => {
                let mut parsed = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
                    var: BASE_URL_VAR,
                    source,
                })?;
                // `Url::join` drops the last segment unless the base ends in a slash.
                if !parsed.path().ends_with('/') {
                    let path = format!("{}/", parsed.path());
                    parsed.set_path(&path);
                }
                Some(parsed.to_string())
            }
            None => None,
        };

        Ok(Self {
            scp_token: read(TOKEN_VAR),
            campaign_id: read(CAMPAIGN_VAR),
            pricing_base_url,
        })
    }

    pub fn has_token(&self) -> bool {
        self.scp_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_blank_values_are_treated_as_missing() {
        let config =
            AppConfig::from_lookup(lookup(&[(TOKEN_VAR, "   "), (CAMPAIGN_VAR, "")])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!config.has_token());
    }

    #[test]
    fn test_reads_and_trims_values() {
        let config = AppConfig::from_lookup(lookup(&[
            (TOKEN_VAR, " abc123 "),
            (CAMPAIGN_VAR, "5338000000"),
            (BASE_URL_VAR, "http://127.0.0.1:9000/api"),
        ]))
        .unwrap();
        assert_eq!(config.scp_token.as_deref(), Some("abc123"));
        assert_eq!(config.campaign_id.as_deref(), Some("5338000000"));
        assert_eq!(
            config.pricing_base_url.as_deref(),
            Some("http://127.0.0.1:9000/api/")
        );
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[(BASE_URL_VAR, "::nope")])).unwrap_err();
        assert!(err.to_string().starts_with("SCP_BASE_URL is not a valid URL"));
    }
}
