use clap::Parser;
use prompthub_api::PromptHubAPI;
use prompthub_main::{init_tracing, run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.clone())?;

    let api = PromptHubAPI::init()?;
    let mut stdout = std::io::stdout().lock();
    run(&api, cli.command, &mut stdout).await
}
