//! Logging initialisation: console output plus a daily-rolling log file.
//!
//! Console verbosity follows `RUST_LOG` when set; the file layer
//! receives the same filtered events without ANSI colour codes.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "ecloud=info,ecloud_search=info";

/// Initialise tracing with console output and a daily-rotated file under
/// `log_dir`.
///
/// The returned guard must be held for the lifetime of the process;
/// dropping it stops the background log writer and loses buffered lines.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(log_dir: &str) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(log_dir, "ecloud-search.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()?;

    Ok(guard)
}
