use std::sync::Arc;

use prompthub_domain::{
    PromptCompiler, PromptHubConfig, PromptName, PromptRecord, PromptSource, PromptSpec,
};
use prompthub_provider::Langfuse;
use prompthub_services::PromptHub;

use crate::{PromptHubEnvironment, API};

pub struct PromptHubAPI<S> {
    hub: PromptHub<S>,
}

impl<S: PromptSource> PromptHubAPI<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { hub: PromptHub::new(source) }
    }

    pub fn hub(&self) -> &PromptHub<S> {
        &self.hub
    }
}

impl PromptHubAPI<Langfuse> {
    /// Builds the API against Langfuse using configuration from the
    /// environment.
    pub fn init() -> anyhow::Result<Self> {
        let config = PromptHubEnvironment::load()?;
        Self::with_config(&config)
    }

    pub fn with_config(config: &PromptHubConfig) -> anyhow::Result<Self> {
        let langfuse = Langfuse::from_config(config)?;
        Ok(Self::new(Arc::new(langfuse)))
    }
}

#[async_trait::async_trait]
impl<S: PromptSource> API for PromptHubAPI<S> {
    async fn prompt(&self, name: &PromptName) -> PromptCompiler {
        self.hub.get(name.clone()).await
    }

    async fn invalidate(&self, names: &[PromptName]) -> prompthub_domain::Result<()> {
        self.hub.invalidate_all(names).await
    }

    async fn create_prompt(&self, spec: PromptSpec) -> anyhow::Result<PromptRecord> {
        self.hub.create_prompt(spec).await
    }
}
