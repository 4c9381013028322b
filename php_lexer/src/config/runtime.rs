//! Runtime preferences
//!
//! Everything here can be changed per run through `PHPLEX_*` environment
//! variables. Hard limits live in [`super::compile_time`] instead.

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputPreferences {
    /// Reject files whose name does not end in `.php`
    pub require_php_extension: bool,

    /// Log size and line count after each read
    pub log_input_metrics: bool,
}

impl Default for InputPreferences {
    fn default() -> Self {
        Self {
            require_php_extension: env_or(env_vars::REQUIRE_PHP_EXTENSION, false),
            log_input_metrics: env_or(env_vars::INPUT_LOG_METRICS, true),
        }
    }
}

/// Layout of the analysis report on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPreferences {
    pub format: ReportFormat,

    /// List the raw token sequence above the summary
    pub show_tokens: bool,

    pub pretty_json: bool,
}

impl Default for ReportPreferences {
    fn default() -> Self {
        Self {
            format: env_or(env_vars::REPORT_FORMAT, ReportFormat::Text),
            show_tokens: env_or(env_vars::REPORT_SHOW_TOKENS, false),
            pretty_json: env_or(env_vars::REPORT_PRETTY_JSON, true),
        }
    }
}

/// Where log events go. Console output is off unless asked for, so a plain
/// run prints only the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// JSON lines instead of `[LEVEL] CODE - message`
    pub use_structured_logging: bool,

    pub enable_console_logging: bool,

    /// Least severe level that still reaches the sink
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_or(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_or(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: env_or(env_vars::LOGGING_MIN_LEVEL, LogLevel::Warning),
        }
    }
}

/// Unset or unparsable variables fall back to `default`
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|raw| parse_setting(&raw))
        .unwrap_or(default)
}

fn parse_setting<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub input: InputPreferences,
    pub report: ReportPreferences,
    pub logging: LoggingPreferences,
}

pub mod env_vars {
    pub const REQUIRE_PHP_EXTENSION: &str = "PHPLEX_REQUIRE_PHP_EXTENSION";
    pub const INPUT_LOG_METRICS: &str = "PHPLEX_INPUT_LOG_METRICS";

    pub const REPORT_FORMAT: &str = "PHPLEX_REPORT_FORMAT";
    pub const REPORT_SHOW_TOKENS: &str = "PHPLEX_REPORT_SHOW_TOKENS";
    pub const REPORT_PRETTY_JSON: &str = "PHPLEX_REPORT_PRETTY_JSON";

    pub const LOGGING_USE_STRUCTURED: &str = "PHPLEX_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "PHPLEX_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "PHPLEX_LOGGING_MIN_LEVEL";
}
