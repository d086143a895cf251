use anyhow::{Context, Result};
use ridge::domain::config::LogConfig;
use ridge_logger::{LevelFilter, Logger};

/// Installs the global subscriber described by the `[log]` config section.
///
/// # Errors
/// Fails on an unknown level name or when the logger rejects the setup
/// (bad filter, no output enabled, unwritable directory, second install).
pub fn init(name: &str, cfg: &LogConfig) -> Result<Logger> {
    let level = parse_level(&cfg.level)?;

    let mut builder = Logger::builder().name(name).level(level).console(cfg.console);
    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &cfg.path {
        None => builder.init(),
        Some(dir) => {
            let files = builder.path(dir).max_files(cfg.max_files);
            if cfg.json { files.json().init() } else { files.init() }
        }
    };
    logger.context("Failed to initialize logging")
}

fn parse_level(raw: &str) -> Result<LevelFilter> {
    raw.trim().parse().with_context(|| format!("Invalid log level '{raw}'"))
}
