use std::time::Duration;

use anyhow::Context as _;
use prompthub_domain::{PromptHubConfig, DEFAULT_BASE_URL};
use tracing::debug;
use url::Url;

const PUBLIC_KEY: &str = "LANGFUSE_PUBLIC_KEY";
const SECRET_KEY: &str = "LANGFUSE_SECRET_KEY";
const BASE_URL: &str = "LANGFUSE_BASE_URL";
const TIMEOUT_SECS: &str = "PROMPTHUB_TIMEOUT_SECS";

/// Resolves [`PromptHubConfig`] from environment variables.
pub struct PromptHubEnvironment;

impl PromptHubEnvironment {
    /// Loads `.env` when present, then reads the process environment.
    pub fn load() -> anyhow::Result<PromptHubConfig> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the config through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<PromptHubConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let (Some(public_key), Some(secret_key)) = (var(PUBLIC_KEY), var(SECRET_KEY)) else {
            anyhow::bail!(
                "Langfuse public key and secret key must be provided. Please set {PUBLIC_KEY} and {SECRET_KEY}"
            );
        };

        let base_url = var(BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&base_url).with_context(|| format!("Invalid {BASE_URL}: {base_url}"))?;

        let mut config = PromptHubConfig::new(base_url, public_key, secret_key);
        if let Some(timeout) = var(TIMEOUT_SECS) {
            let seconds: u64 = timeout
                .parse()
                .with_context(|| format!("Invalid {TIMEOUT_SECS}: {timeout}"))?;
            config = config.read_timeout(Duration::from_secs(seconds));
        }

        debug!(base_url = %config.base_url, "Resolved prompt hub configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn resolve(vars: &[(&str, &str)]) -> anyhow::Result<PromptHubConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        PromptHubEnvironment::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_base_url() {
        let actual = resolve(&[(PUBLIC_KEY, "pk-lf-1"), (SECRET_KEY, "sk-lf-1")]).unwrap();

        assert_eq!(actual.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(actual.public_key, "pk-lf-1");
        assert_eq!(actual.secret_key, "sk-lf-1");
        assert_eq!(actual.read_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_custom_base_url_and_timeout() {
        let actual = resolve(&[
            (PUBLIC_KEY, "pk"),
            (SECRET_KEY, "sk"),
            (BASE_URL, "https://langfuse.internal/self-hosted"),
            (TIMEOUT_SECS, "5"),
        ])
        .unwrap();

        assert_eq!(actual.base_url.as_str(), "https://langfuse.internal/self-hosted/");
        assert_eq!(actual.read_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_secret_key() {
        let actual = resolve(&[(PUBLIC_KEY, "pk")]);
        assert!(actual.is_err());
    }

    #[test]
    fn test_blank_public_key() {
        let actual = resolve(&[(PUBLIC_KEY, "  "), (SECRET_KEY, "sk")]);
        assert!(actual.is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        let actual = resolve(&[(PUBLIC_KEY, "pk"), (SECRET_KEY, "sk"), (BASE_URL, "not a url")]);
        assert!(actual.is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let actual = resolve(&[(PUBLIC_KEY, "pk"), (SECRET_KEY, "sk"), (TIMEOUT_SECS, "soon")]);
        assert!(actual.is_err());
    }
}
