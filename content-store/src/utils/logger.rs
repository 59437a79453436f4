//! Logging Infrastructure
//!
//! stderr output (so CLI stdout stays machine-readable) plus an optional
//! daily rolling file. `RUST_LOG` overrides the configured level.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Build the filter: `RUST_LOG` if set, otherwise `level` with redb quietened
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},redb=warn")))
}

/// Initialize the global subscriber.
///
/// Returns the file writer guard when `log_dir` is given; keep it alive for
/// the lifetime of the process or buffered lines are lost. Calling this twice
/// is harmless, the second call is ignored.
pub fn init_logger(level: &str, json: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = rolling::daily(dir, "qespace-admin.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_timer(LocalTimer)
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Failed to create log directory {}: {e}", dir.display());
                (None, None)
            }
        },
        None => (None, None),
    };

    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_timer(LocalTimer)
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    let result = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init();

    if result.is_ok() {
        tracing::debug!(level, json, log_dir = ?log_dir, "Tracing initialized");
    }
    guard
}
