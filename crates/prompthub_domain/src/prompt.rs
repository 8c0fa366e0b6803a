use derive_more::Display;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::ChatMessage;

/// Name under which a prompt is stored remotely and cached locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct PromptName(String);

impl PromptName {
    pub fn new(name: impl ToString) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PromptName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PromptName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PromptKind {
    Text,
    Chat,
}

/// Body of a prompt as served by the remote store. Equality is structural:
/// text by value, chat element-wise by role and content in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptBody {
    Text(String),
    Chat(Vec<ChatMessage>),
}

impl PromptBody {
    pub fn text(template: impl ToString) -> Self {
        Self::Text(template.to_string())
    }

    pub fn chat(messages: impl IntoIterator<Item = ChatMessage>) -> Self {
        Self::Chat(messages.into_iter().collect())
    }

    pub fn kind(&self) -> PromptKind {
        match self {
            PromptBody::Text(_) => PromptKind::Text,
            PromptBody::Chat(_) => PromptKind::Chat,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PromptBody::Text(text) => text.is_empty(),
            PromptBody::Chat(messages) => messages.is_empty(),
        }
    }
}

/// Request body for creating a new prompt version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[serde(rename_all = "camelCase")]
#[setters(into, strip_option)]
pub struct PromptSpec {
    #[setters(skip)]
    pub name: PromptName,
    #[setters(skip)]
    #[serde(rename = "type")]
    pub kind: PromptKind,
    #[setters(skip)]
    pub prompt: PromptBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl PromptSpec {
    pub fn new(name: impl Into<PromptName>, prompt: PromptBody) -> Self {
        Self {
            name: name.into(),
            kind: prompt.kind(),
            prompt,
            commit_message: None,
            labels: Vec::new(),
            tags: Vec::new(),
        }
    }
}

/// A prompt version as stored by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    #[serde(default)]
    pub id: String,
    pub name: PromptName,
    #[serde(default)]
    pub version: u64,
    #[serde(rename = "type")]
    pub kind: PromptKind,
    pub prompt: PromptBody,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub commit_message: Option<String>,
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}
