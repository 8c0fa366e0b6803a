use std::collections::BTreeSet;
use std::sync::Arc;

use crate::template::substitute;
use crate::{ChatMessage, ChatMessages, Error, PromptBody, PromptKind, Result, Variables};

/// Binds a snapshot of a prompt body and compiles it against variables.
///
/// The snapshot is shared, never mutated: every compile produces fresh
/// output, so the cache is free to replace its entry while a compiler built
/// from the previous one is still in use. A compiler without a body stands in
/// for a prompt that could not be fetched and fails on every compile.
#[derive(Debug, Clone, Default)]
pub struct PromptCompiler {
    body: Option<Arc<PromptBody>>,
}

impl PromptCompiler {
    pub fn new(body: Arc<PromptBody>) -> Self {
        Self { body: Some(body) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn body(&self) -> Option<&PromptBody> {
        self.body.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.body.as_deref().map_or(true, PromptBody::is_empty)
    }

    pub fn compile_text(&self, variables: &Variables) -> Result<String> {
        let template = match self.body.as_deref() {
            Some(PromptBody::Text(template)) if !template.is_empty() => template,
            _ => return Err(Error::EmptyPrompt(PromptKind::Text)),
        };

        let mut used = BTreeSet::new();
        let output = substitute(template, variables, &mut used);
        ensure_all_used(variables, &used)?;

        Ok(output)
    }

    pub fn compile_chat(&self, variables: &Variables) -> Result<ChatMessages> {
        let messages = match self.body.as_deref() {
            Some(PromptBody::Chat(messages)) if !messages.is_empty() => messages,
            _ => return Err(Error::EmptyPrompt(PromptKind::Chat)),
        };

        let mut used = BTreeSet::new();
        let output = messages
            .iter()
            .map(|message| ChatMessage {
                role: message.role.clone(),
                content: substitute(&message.content, variables, &mut used),
            })
            .collect::<Vec<_>>();
        ensure_all_used(variables, &used)?;

        Ok(output.into())
    }
}

impl From<PromptBody> for PromptCompiler {
    fn from(body: PromptBody) -> Self {
        Self::new(Arc::new(body))
    }
}

/// Every bound variable must appear in the template at least once. The
/// smallest offending key is reported.
fn ensure_all_used(variables: &Variables, used: &BTreeSet<&str>) -> Result<()> {
    match variables.keys().find(|key| !used.contains(key)) {
        Some(key) => Err(Error::UnknownVariable(key.to_string())),
        None => Ok(()),
    }
}
