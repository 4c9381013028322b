//! Process-wide logging preferences
//!
//! Read from the environment on first use unless the front end installs its
//! own with [`install_preferences`] before logging starts.

use crate::config::compile_time::logging::{LOG_BUFFER_SIZE, MAX_LOG_MESSAGE_LENGTH};
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

static PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

pub fn install_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    PREFERENCES
        .set(preferences)
        .map_err(|_| "logging preferences were already set".to_string())
}

pub fn preferences() -> &'static LoggingPreferences {
    PREFERENCES.get_or_init(LoggingPreferences::default)
}

/// Reject generated limits the logger cannot work with
pub fn validate_limits() -> Result<(), String> {
    if LOG_BUFFER_SIZE < 100 {
        return Err(format!("log buffer of {} events is too small", LOG_BUFFER_SIZE));
    }
    if MAX_LOG_MESSAGE_LENGTH == 0 {
        return Err("maximum log message length is zero".to_string());
    }
    Ok(())
}

pub fn summary() -> String {
    let preferences = preferences();
    format!(
        "buffer={} events, max message={} chars, level={}, console={}, structured={}",
        LOG_BUFFER_SIZE,
        MAX_LOG_MESSAGE_LENGTH,
        preferences.min_log_level.as_str(),
        preferences.enable_console_logging,
        preferences.use_structured_logging,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_limits_validate() {
        assert!(validate_limits().is_ok());
    }

    #[test]
    fn test_summary_lists_limits() {
        let summary = summary();
        assert!(summary.contains(&format!("buffer={} events", LOG_BUFFER_SIZE)));
        assert!(summary.contains("level="));
    }
}
