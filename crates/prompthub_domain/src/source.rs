use crate::{PromptBody, PromptName, PromptRecord, PromptSpec};

/// Remote store that owns prompt definitions.
#[async_trait::async_trait]
pub trait PromptSource: Send + Sync + 'static {
    /// Fetches the current body of the prompt called `name`.
    async fn fetch(&self, name: &PromptName) -> anyhow::Result<PromptBody>;

    /// Creates a new prompt version and returns it as stored.
    async fn create(&self, spec: PromptSpec) -> anyhow::Result<PromptRecord>;
}
