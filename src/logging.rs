//! File-based logging for TUI mode.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: stdout belongs to the TUI, so writing
/// log lines there would corrupt the display. Set `GREETLY_LOG` to a file
/// path to enable it.
///
/// Log files get a `{path}.{timestamp}.{pid}` name so concurrent instances
/// never clobber each other's output.
pub fn init(log_filter: Option<&str>) {
    let Ok(log_path) = std::env::var("GREETLY_LOG") else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{log_path}.{timestamp}.{pid}");

    // RUST_LOG wins over the config file's filter.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(log_filter.unwrap_or("info")),
    };

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("warning: failed to create log file: {unique_path}");
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
