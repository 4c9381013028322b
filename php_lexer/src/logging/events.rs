//! Log events

use super::codes::{generic, Code};
use crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    #[serde(rename = "WARN")]
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Accepts names in any case, `warn` as an alias, or a verbosity digit 0-3
impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "0" => Ok(LogLevel::Error),
            "warn" | "warning" | "1" => Ok(LogLevel::Warning),
            "info" | "2" => Ok(LogLevel::Info),
            "debug" | "3" => Ok(LogLevel::Debug),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One coded log record with sorted key/value context
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub context: BTreeMap<String, String>,
}

impl LogEvent {
    pub fn new(level: LogLevel, code: Code, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            code,
            message: truncate_message(message.into()),
            context: BTreeMap::new(),
        }
    }

    pub fn error(code: Code, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, code, message)
    }

    pub fn warning(code: Code, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, code, message)
    }

    /// Info-level event carrying a success code
    pub fn success(code: Code, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, code, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, generic::INFO, message)
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Debug, generic::DEBUG, message)
    }

    /// Attach a context value; a repeated key keeps the last value
    pub fn context(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn is_warning(&self) -> bool {
        self.level == LogLevel::Warning
    }

    /// One JSON object, no trailing newline
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&JsonRecord::from(self))
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.level, self.code, self.message)?;

        if !self.context.is_empty() {
            f.write_str(" (")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}={}", key, value)?;
            }
            f.write_str(")")?;
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: String,
    level: LogLevel,
    code: &'static str,
    category: &'static str,
    severity: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    halt: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    context: &'a BTreeMap<String, String>,
}

impl<'a> From<&'a LogEvent> for JsonRecord<'a> {
    fn from(event: &'a LogEvent) -> Self {
        Self {
            timestamp: event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            level: event.level,
            code: event.code.as_str(),
            category: event.code.category().as_str(),
            severity: event.code.severity().as_str(),
            message: &event.message,
            action: event.is_error().then(|| event.code.action()),
            halt: event.is_error().then(|| event.code.requires_halt()),
            context: &event.context,
        }
    }
}

fn truncate_message(mut message: String) -> String {
    if let Some((cut, _)) = message.char_indices().nth(MAX_LOG_MESSAGE_LENGTH) {
        message.truncate(cut);
        message.push_str("...");
    }
    message
}
