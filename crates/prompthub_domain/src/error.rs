use thiserror::Error;

use crate::{PromptKind, PromptName};

// NOTE: Fetch failures travel as `anyhow::Error` with context attached where
// they happen. Only the batch invalidation wraps them into a domain error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Active prompt {0} is empty")]
    EmptyPrompt(PromptKind),

    #[error("Prompt variable with key {0} does not exist")]
    UnknownVariable(String),

    #[error("Failed to prefill cache for: {}", join_names(.names))]
    Invalidate {
        names: Vec<PromptName>,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<A> = std::result::Result<A, Error>;

fn join_names(names: &[PromptName]) -> String {
    names
        .iter()
        .map(PromptName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_invalidate_lists_every_failed_name() {
        let fixture = Error::Invalidate {
            names: vec![PromptName::new("a"), PromptName::new("c")],
            source: anyhow::anyhow!("Invalid Status Code: 404"),
        };
        let actual = fixture.to_string();
        let expected = "Failed to prefill cache for: a, c";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_empty_prompt_names_the_kind() {
        let actual = Error::EmptyPrompt(PromptKind::Chat).to_string();
        let expected = "Active prompt chat is empty";
        assert_eq!(actual, expected);
    }
}
