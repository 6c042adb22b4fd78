// src/logging.rs

//! File-only tracing plus the on-disk locations the widget uses.
//!
//! The terminal is owned by the UI, so log output never goes to stdout or
//! stderr.

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    /// `SENTIMENT_RS_ANALYZER_LOGLEVEL`, consulted when `RUST_LOG` is unset.
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", env!("CARGO_CRATE_NAME").to_uppercase());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

pub const CONFIG_FILE: &str = "config.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "sentiment-rs", env!("CARGO_PKG_NAME"))
}

/// Directory holding the log file; `./.data` without a home directory.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

/// Full path of `config.toml`; the working directory without a home
/// directory.
pub fn config_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE)
}

/// `RUST_LOG` wins, then the crate-specific variable, then `info` for this
/// crate only.
fn resolve_filter(rust_log: Option<String>, crate_level: Option<String>) -> String {
    rust_log
        .into_iter()
        .chain(crate_level)
        .find(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Installs the global subscriber and returns the log file path.
pub fn initialize_logging() -> Result<PathBuf> {
    let directory = log_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let filter = resolve_filter(std::env::var("RUST_LOG").ok(), std::env::var(LOG_ENV.as_str()).ok());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_derive_from_the_crate() {
        assert_eq!(LOG_ENV.as_str(), "SENTIMENT_RS_ANALYZER_LOGLEVEL");
        assert_eq!(LOG_FILE.as_str(), "sentiment-rs-analyzer.log");
        assert!(config_file().ends_with(CONFIG_FILE));
    }

    #[test]
    fn filter_precedence() {
        let some = |s: &str| Some(s.to_string());

        assert_eq!(resolve_filter(some("debug"), some("warn")), "debug");
        assert_eq!(resolve_filter(None, some("warn")), "warn");
        assert_eq!(resolve_filter(None, None), "sentiment_rs_analyzer=info");
        assert_eq!(resolve_filter(some("  "), some("warn")), "warn");
        assert_eq!(resolve_filter(some("  "), None), "sentiment_rs_analyzer=info");
    }
}
