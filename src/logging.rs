use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_PATH_VAR: &str = "SHOPDESK_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `SHOPDESK_LOG` names a file; writing to the
/// terminal would corrupt the TUI. Files get a `{path}.{timestamp}.{pid}`
/// suffix so concurrent consoles don't clobber each other.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_VAR).ok().filter(|p| !p.is_empty()) else {
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
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, std::process::id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_carries_pid() {
        let path = unique_log_path("/tmp/shopdesk.log");
        assert!(path.starts_with("/tmp/shopdesk.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
