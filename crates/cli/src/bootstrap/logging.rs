use dnsock_domain::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries the JSON answers only.
///
/// `RUST_LOG` wins over the configured level unless the level was given
/// on the command line.
pub fn init_logging(config: &Config, level_from_cli: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(&config.logging.level, level_from_cli, rust_log.as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }

    debug!("Logging initialized at level: {}", config.logging.level);
}

fn log_filter(level: &str, level_from_cli: bool, rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !level_from_cli && !directives.is_empty() => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(level))
        }
        _ => EnvFilter::new(level),
    }
}
