use std::io::Write;

use anyhow::Context as _;
use prompthub_api::{PromptName, PromptSpec, Variables, API};
use tracing::info;

use crate::Command;

/// Executes a single CLI command, writing its output to `out`.
pub async fn run<A: API>(api: &A, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Get { name, vars, chat } => {
            let variables: Variables = vars.into_iter().collect();
            let compiler = api.prompt(&PromptName::new(&name)).await;

            if chat {
                let messages = compiler
                    .compile_chat(&variables)
                    .with_context(|| format!("Failed to compile chat prompt: {name}"))?;
                for message in messages.iter() {
                    writeln!(out, "{}: {}", message.role, message.content)?;
                }
            } else {
                let text = compiler
                    .compile_text(&variables)
                    .with_context(|| format!("Failed to compile text prompt: {name}"))?;
                writeln!(out, "{text}")?;
            }
        }
        Command::Warm { names } => {
            let names: Vec<PromptName> = names.into_iter().map(PromptName::from).collect();
            api.invalidate(&names).await?;
            info!(count = names.len(), "Prompts fetched");
            writeln!(out, "Fetched {} prompt(s)", names.len())?;
        }
        Command::Create { path } => {
            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let spec: PromptSpec = serde_json::from_str(&content)
                .with_context(|| format!("Invalid prompt spec in {}", path.display()))?;

            let record = api.create_prompt(spec).await?;
            info!(prompt = %record.name, version = record.version, "Prompt created");
            writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
        }
    }

    Ok(())
}
