use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for TUI mode.
pub const LOG_ENV_VAR: &str = "TERMFOLIO_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Interactive terminal UI. Stderr would corrupt the display.
    Tui,
    /// Headless contact endpoint, logs go to stderr.
    Server,
}

pub fn init_tracing(mode: LogMode) {
    match mode {
        LogMode::Server => init_stderr(),
        LogMode::Tui => init_file(),
    }
}

fn init_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

/// Logging is disabled by default for TUI mode.
/// Set `TERMFOLIO_LOG` to a file path to enable it.
///
/// Log files get a `{path}.{timestamp}.{pid}` name so concurrent
/// instances do not clobber each other.
fn init_file() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
