use std::path::PathBuf;

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "PROMPTHUB_LOG";
const DEFAULT_FILTER: &str =
    "warn,prompthub=info,prompthub_main=info,prompthub_api=info,prompthub_services=info,prompthub_provider=info";

/// Installs the global subscriber: plain text on stderr, plus daily-rotated
/// JSON files when `log_dir` is given. Keep the returned guard alive until
/// exit so buffered file output is flushed.
pub fn init_tracing(log_dir: Option<PathBuf>) -> anyhow::Result<Guard> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file, guard) = match &log_dir {
        Some(dir) => {
            let append = tracing_appender::rolling::daily(dir, "prompthub.log");
            let (writer, guard) = tracing_appender::non_blocking(append);
            let layer = fmt::layer()
                .json()
                .with_timer(fmt::time::uptime())
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file)
        .try_init()?;

    if let Some(dir) = &log_dir {
        debug!(path = %dir.display(), "JSON logging initialized");
    }
    Ok(Guard(guard))
}

pub struct Guard(#[allow(dead_code)] Option<WorkerGuard>);
