use prompthub_domain::{PromptCompiler, PromptName, PromptRecord, PromptSpec};

#[async_trait::async_trait]
pub trait API: Send + Sync {
    /// Returns a compiler for the named prompt; failures surface when
    /// compiling.
    async fn prompt(&self, name: &PromptName) -> PromptCompiler;

    /// Re-fetches every name into the cache.
    async fn invalidate(&self, names: &[PromptName]) -> prompthub_domain::Result<()>;

    async fn create_prompt(&self, spec: PromptSpec) -> anyhow::Result<PromptRecord>;
}
