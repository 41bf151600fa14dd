use std::path::PathBuf;

use thiserror::Error;

use crate::logfile::{DEFAULT_LOG_ROOT, Highlight};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Failed to parse {var} as {expected_type}: {source}")]
    ParseError {
        var: String,
        expected_type: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Configuration for diagnostics and match highlighting
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub colors: bool,
    pub rust_log: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            colors: true,
            rust_log: "warn".to_string(),
        }
    }
}

impl LogConfig {
    pub fn highlight(&self) -> Highlight {
        if self.colors {
            Highlight::Ansi
        } else {
            Highlight::Plain
        }
    }
}

/// Configuration for the report endpoint client
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub timeout_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Where application logs live when no file is given
#[derive(Debug, Clone)]
pub struct PathConfig {
    pub log_root: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            log_root: PathBuf::from(DEFAULT_LOG_ROOT),
        }
    }
}

/// Main configuration container
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub log: LogConfig,
    pub report: ReportConfig,
    pub path: PathConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // GLOG_LOG_ROOT
        if let Ok(root) = std::env::var("GLOG_LOG_ROOT") {
            if root.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: "GLOG_LOG_ROOT".to_string(),
                    message: "log root must not be empty".to_string(),
                });
            }
            config.path.log_root = PathBuf::from(root);
        }

        // GLOG_COLORS
        if let Ok(colors_str) = std::env::var("GLOG_COLORS") {
            config.log.colors = colors_str.to_lowercase() == "true" || colors_str == "1";
        }

        // GLOG_REPORT_TIMEOUT
        if let Ok(timeout_str) = std::env::var("GLOG_REPORT_TIMEOUT") {
            config.report.timeout_secs =
                timeout_str.parse().map_err(|e| ConfigError::ParseError {
                    var: "GLOG_REPORT_TIMEOUT".to_string(),
                    expected_type: "u64".to_string(),
                    source: Box::new(e),
                })?;
        }

        // RUST_LOG
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            config.log.rust_log = rust_log;
        }

        if config.report.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "GLOG_REPORT_TIMEOUT".to_string(),
                message: "timeout must be greater than 0".to_string(),
            });
        }

        Ok(config)
    }
}
