//! Startup configuration and logging setup.

use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::{eyre::WrapErr, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::RunOptions;
use crate::source::DIRECTORY_BASE_URL;

/// Environment variable overriding the directory backend base URL.
pub const SOURCE_URL_ENV: &str = "PLAZA_SOURCE_URL";

/// Resolved startup configuration.
///
/// Precedence for each value: CLI flag, then environment variable, then
/// built-in default.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    /// Base URL of the directory backend.
    pub source_url: String,
    /// Local data directory for favorites and the log file; `None` means
    /// the platform default.
    pub data_dir: Option<PathBuf>,
}

impl StartupConfig {
    /// Resolve configuration from CLI options and the environment.
    pub fn resolve(options: &RunOptions) -> Self {
        let source_url = options
            .source_url
            .clone()
            .or_else(|| std::env::var(SOURCE_URL_ENV).ok())
            .unwrap_or_else(|| DIRECTORY_BASE_URL.to_string());

        Self {
            source_url,
            data_dir: options.data_dir.clone(),
        }
    }
}

/// Initialize tracing to a log file under `dir`.
///
/// The terminal owns stdout, so logs go to `plaza.log`. Filtering follows
/// `RUST_LOG`, defaulting to `info`.
pub fn init_tracing(dir: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
    let log_file = std::fs::File::create(dir.join("plaza.log"))
        .wrap_err("failed to create log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_cli_flags() {
        // Leave the env var alone; flags take precedence over it anyway
        let config = StartupConfig::resolve(&RunOptions {
            source_url: Some("http://localhost:9000".to_string()),
            data_dir: Some(PathBuf::from("/tmp/plaza-test")),
        });
        assert_eq!(config.source_url, "http://localhost:9000");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/plaza-test")));
    }

    #[test]
    fn test_resolve_falls_back_to_builtin_url() {
        if std::env::var(SOURCE_URL_ENV).is_ok() {
            // Environment override present; nothing to assert here
            return;
        }
        let config = StartupConfig::resolve(&RunOptions::default());
        assert_eq!(config.source_url, DIRECTORY_BASE_URL);
    }
}
