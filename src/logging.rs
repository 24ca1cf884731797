use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for terminal UI mode.
pub const LOG_ENV: &str = "HERO_SLIDER_LOG";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// File named by `HERO_SLIDER_LOG`, or nothing. Keeps the alternate screen clean.
    File,
    /// Standard error, for headless commands.
    Stderr,
}

/// Initialize tracing. `RUST_LOG` sets the filter (default `info`).
///
/// File logs get unique names so concurrent instances do not clash:
/// `{path}.{timestamp}.{pid}`
pub fn init_tracing(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogTarget::File => {
            let Some(log_path) = std::env::var(LOG_ENV).ok() else {
                return;
            };

            let pid = std::process::id();
            let timestamp = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

            let Ok(file) = std::fs::File::create(&unique_path) else {
                eprintln!("Warning: Failed to create log file: {}", unique_path);
                return;
            };

            let layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
}
