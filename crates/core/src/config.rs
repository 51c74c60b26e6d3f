use std::path::PathBuf;

/// Default directory under the home directory for log files.
pub const DEFAULT_LOG_DIR: &str = ".codenav/logs";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    /// Filter directive used when `RUST_LOG` is not set.
    pub default_filter: String,
    pub to_stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            log_dir: home.join(DEFAULT_LOG_DIR),
            default_filter: "info".to_string(),
            to_stderr: false,
        }
    }
}

impl LoggingConfig {
    /// Defaults overridden by `CODENAV_LOG_DIR` and `CODENAV_LOG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("CODENAV_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        if let Ok(filter) = std::env::var("CODENAV_LOG") {
            if !filter.trim().is_empty() {
                config.default_filter = filter;
            }
        }
        config
    }

    pub fn with_stderr(mut self, to_stderr: bool) -> Self {
        self.to_stderr = to_stderr;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}
