use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

/// Installs the global subscriber: stdout always, plus a daily-rolling file
/// when `cfg.dir` is set.
///
/// Keep the returned guard alive until exit or buffered file lines are lost.
pub fn init(cfg: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    // RUST_LOG=debug overrides the configured level
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cfg.level))?;

    let (file_layer, guard) = match &cfg.dir {
        Some(dir) => {
            let appender = rolling::daily(dir, &cfg.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
