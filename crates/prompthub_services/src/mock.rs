use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::anyhow;
use prompthub_domain::{PromptBody, PromptName, PromptRecord, PromptSource, PromptSpec};

/// Scripted prompt source. Each name answers with whatever was last scripted
/// for it; unscripted names fail like a 404 would.
#[derive(Default)]
pub struct MockPromptSource {
    responses: Mutex<HashMap<PromptName, Result<PromptBody, String>>>,
    fetches: Mutex<HashMap<PromptName, usize>>,
    created: Mutex<Vec<PromptSpec>>,
}

impl MockPromptSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(self, name: &str, body: PromptBody) -> Self {
        self.set(name, body);
        self
    }

    pub fn set(&self, name: &str, body: PromptBody) {
        self.responses
            .lock()
            .unwrap()
            .insert(PromptName::new(name), Ok(body));
    }

    pub fn fail(&self, name: &str, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(PromptName::new(name), Err(message.to_string()));
    }

    pub fn fetch_count(&self, name: &str) -> usize {
        self.fetches
            .lock()
            .unwrap()
            .get(&PromptName::new(name))
            .copied()
            .unwrap_or_default()
    }

    pub fn created(&self) -> Vec<PromptSpec> {
        self.created.lock().unwrap().clone()
    }

    /// Waits until `name` has been fetched at least `count` times, giving
    /// background refreshes a chance to run.
    pub async fn wait_for_fetches(&self, name: &str, count: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.fetch_count(name) < count {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("background fetch did not happen in time");
    }
}

#[async_trait::async_trait]
impl PromptSource for MockPromptSource {
    async fn fetch(&self, name: &PromptName) -> anyhow::Result<PromptBody> {
        *self.fetches.lock().unwrap().entry(name.clone()).or_default() += 1;

        match self.responses.lock().unwrap().get(name) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(message)) => Err(anyhow!(message.clone())),
            None => Err(anyhow!("Invalid Status Code: 404")),
        }
    }

    async fn create(&self, spec: PromptSpec) -> anyhow::Result<PromptRecord> {
        self.created.lock().unwrap().push(spec.clone());
        Ok(PromptRecord {
            id: "mock".to_string(),
            name: spec.name,
            version: 1,
            kind: spec.kind,
            prompt: spec.prompt,
            labels: spec.labels,
            tags: spec.tags,
            commit_message: spec.commit_message,
            config: serde_json::Value::Null,
            created_at: None,
            updated_at: None,
            project_id: None,
            created_by: None,
        })
    }
}
