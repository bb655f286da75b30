use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the log written into the log directory.
pub const LOG_FILE: &str = "scrollist.log";

/// Build the filter: `RUST_LOG` when set, otherwise `scrollist=<level>`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scrollist={level},warn")))
}

/// Initialize logging to `{dir}/scrollist.log`.
///
/// The terminal is owned by the UI, so nothing is ever written to stdout or
/// stderr. Keep the returned guard alive for the life of the program; dropping
/// it flushes pending records.
pub fn init_logging(dir: &Path, level: &str) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(log_path = %dir.join(LOG_FILE).display(), "scrollist logging initialized");
    Ok(guard)
}
