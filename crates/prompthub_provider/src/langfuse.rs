use std::time::Duration;

use anyhow::Context as _;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use derive_builder::Builder;
use prompthub_domain::{PromptBody, PromptHubConfig, PromptName, PromptRecord, PromptSource, PromptSpec};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::redirect::Policy;
use reqwest::{Client, Method, Response};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::response::PromptResponse;
use crate::utils::http_context;

const PROMPTS_PATH: &str = "api/public/v2/prompts";

/// Langfuse public API client for prompt management.
#[derive(Clone, Builder)]
pub struct Langfuse {
    client: Client,
    base_url: Url,
    public_key: String,
    secret_key: String,
}

impl Langfuse {
    pub fn builder() -> LangfuseBuilder {
        LangfuseBuilder::default()
    }

    pub fn from_config(config: &PromptHubConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(5)
            .redirect(Policy::limited(10))
            .build()?;

        Self::builder()
            .client(client)
            .base_url(config.base_url.clone())
            .public_key(config.public_key.clone())
            .secret_key(config.secret_key.clone())
            .build()
            .with_context(|| format!("Failed to initialize: {}", config.base_url))
    }

    /// Collection endpoint, relative to the base URL so that a base with a
    /// path prefix (self-hosted behind a proxy) is kept.
    fn prompts_url(&self) -> anyhow::Result<Url> {
        self.base_url
            .join(PROMPTS_PATH)
            .with_context(|| format!("Invalid prompts endpoint under {}", self.base_url))
    }

    /// The name is pushed as a single, percent-encoded path segment so that
    /// folder-style names (`team/greeting`) address one prompt.
    fn prompt_url(&self, name: &PromptName) -> anyhow::Result<Url> {
        let mut url = self.prompts_url()?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Base URL cannot have path segments: {}", self.base_url))?
            .push(name.as_str());
        Ok(url)
    }

    fn headers(&self) -> anyhow::Result<HeaderMap> {
        let credentials = STANDARD.encode(format!("{}:{}", self.public_key, self.secret_key));
        let mut authorization = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|_| Error::InvalidHeader("authorization"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }

    /// Reads the body of a successful response, turning any other status into
    /// [`Error::InvalidStatusCode`].
    async fn read_success(response: Response, method: Method, url: &Url) -> anyhow::Result<String> {
        let status = response.status();
        if !status.is_success() {
            match response.text().await {
                Ok(ref body) => {
                    debug!(status = ?status, body = body, "Invalid status code");
                }
                Err(error) => {
                    debug!(status = ?status, body = ?error, "Invalid status code (body not available)");
                }
            }
            return Err(anyhow::Error::from(Error::InvalidStatusCode(status.as_u16()))
                .context(http_context(&method, url, Some(status))));
        }

        response
            .text()
            .await
            .with_context(|| http_context(&method, url, Some(status)))
    }
}

#[async_trait::async_trait]
impl PromptSource for Langfuse {
    async fn fetch(&self, name: &PromptName) -> anyhow::Result<PromptBody> {
        let url = self.prompt_url(name)?;
        debug!(url = %url, prompt = %name, "Fetching prompt");

        let response = self
            .client
            .get(url.clone())
            .headers(self.headers()?)
            .send()
            .await
            .with_context(|| http_context(&Method::GET, &url, None))?;
        let text = Self::read_success(response, Method::GET, &url).await?;

        let response: PromptResponse = serde_json::from_str(&text)
            .with_context(|| format!("Failed to decode prompt '{name}'"))?;
        PromptBody::try_from(response).with_context(|| format!("Failed to read prompt '{name}'"))
    }

    async fn create(&self, spec: PromptSpec) -> anyhow::Result<PromptRecord> {
        let url = self.prompts_url()?;
        debug!(url = %url, prompt = %spec.name, kind = %spec.kind, "Creating prompt");

        let response = self
            .client
            .post(url.clone())
            .headers(self.headers()?)
            .json(&spec)
            .send()
            .await
            .with_context(|| http_context(&Method::POST, &url, None))?;
        let text = Self::read_success(response, Method::POST, &url).await?;

        serde_json::from_str(&text)
            .with_context(|| format!("Failed to decode created prompt '{}'", spec.name))
    }
}
