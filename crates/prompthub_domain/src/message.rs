use derive_more::{Deref, From};
use serde::{Deserialize, Serialize};

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

/// A single turn of a chat prompt. The role is opaque; `system` and `user`
/// only get convenience constructors and accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl ToString, content: impl ToString) -> Self {
        Self { role: role.to_string(), content: content.to_string() }
    }

    pub fn system(content: impl ToString) -> Self {
        Self::new(ROLE_SYSTEM, content)
    }

    pub fn user(content: impl ToString) -> Self {
        Self::new(ROLE_USER, content)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

/// Output of compiling a chat prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, From, Deref)]
#[serde(transparent)]
pub struct ChatMessages(Vec<ChatMessage>);

impl ChatMessages {
    /// Content of the first message with the `system` role. Prompts carrying
    /// more than one system message should iterate instead.
    pub fn system_message(&self) -> Option<&str> {
        self.first_with_role(ROLE_SYSTEM)
    }

    /// Content of the first message with the `user` role.
    pub fn user_message(&self) -> Option<&str> {
        self.first_with_role(ROLE_USER)
    }

    pub fn first_with_role(&self, role: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|message| message.has_role(role))
            .map(|message| message.content.as_str())
    }

    pub fn into_inner(self) -> Vec<ChatMessage> {
        self.0
    }
}

impl IntoIterator for ChatMessages {
    type Item = ChatMessage;
    type IntoIter = std::vec::IntoIter<ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
