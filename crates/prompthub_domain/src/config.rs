use std::time::Duration;

use derive_setters::Setters;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://cloud.langfuse.com/";

#[derive(Debug, Clone, Setters)]
#[setters(into)]
/// Connection settings for the remote prompt store.
pub struct PromptHubConfig {
    /// Root of the service; API paths are joined onto it.
    #[setters(skip)]
    pub base_url: Url,
    /// Public half of the key pair, sent as the basic-auth user.
    pub public_key: String,
    /// Secret half of the key pair, sent as the basic-auth password.
    pub secret_key: String,
    pub connect_timeout: Duration,
    /// Upper bound on a single fetch, including reading the body.
    pub read_timeout: Duration,
}

impl PromptHubConfig {
    pub fn new(base_url: Url, public_key: impl ToString, secret_key: impl ToString) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            public_key: public_key.to_string(),
            secret_key: secret_key.to_string(),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
        }
    }
}

/// `Url::join` replaces the last path segment unless the base ends with a
/// slash, which would drop a path prefix such as `/langfuse`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
