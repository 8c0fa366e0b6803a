use std::str::FromStr;

use anyhow::Context as _;
use prompthub_domain::{ChatMessage, PromptBody, PromptKind};
use serde::Deserialize;

use crate::error::Error;

/// Envelope of `GET /prompts/{name}`. Only the discriminator and the prompt
/// itself are read; `prompt` is decoded once `type` is known.
#[derive(Debug, Deserialize)]
pub(crate) struct PromptResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub prompt: serde_json::Value,
}

impl TryFrom<PromptResponse> for PromptBody {
    type Error = anyhow::Error;

    fn try_from(response: PromptResponse) -> Result<Self, Self::Error> {
        let kind = PromptKind::from_str(&response.kind)
            .map_err(|_| Error::UnknownPromptType(response.kind.clone()))?;

        match kind {
            PromptKind::Text => {
                let text: String = serde_json::from_value(response.prompt)
                    .with_context(|| "Text prompt is not a string")?;
                Ok(PromptBody::Text(text))
            }
            PromptKind::Chat => {
                let messages: Vec<ChatMessage> = serde_json::from_value(response.prompt)
                    .with_context(|| "Chat prompt is not a list of messages")?;
                Ok(PromptBody::Chat(messages))
            }
        }
    }
}
