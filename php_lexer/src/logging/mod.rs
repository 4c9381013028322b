//! Coded, leveled logging shared by the library and the binary
//!
//! Nothing is logged until [`init_global_logging`] installs a service.
//! Library users who never call it pay only for a `OnceLock` check.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, NullLogger, StructuredLogger};

static GLOBAL: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Install a service built from the process logging preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_limits().map_err(|e| format!("invalid logging limits: {}", e))?;

    let service = Arc::new(LoggingService::from_preferences(config::preferences()));
    install(service.clone())?;

    service.log(
        LogEvent::success(codes::success::SYSTEM_INITIALIZATION_COMPLETED, "Logging ready")
            .context("settings", config::summary()),
    );
    Ok(())
}

/// Install a caller-built service, e.g. one backed by a [`MemoryLogger`]
pub fn install(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL
        .set(service)
        .map_err(|_| "logging is already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

pub fn global() -> Option<&'static LoggingService> {
    GLOBAL.get().map(Arc::as_ref)
}

/// Whether an event at `level` would be recorded; macros check this first
pub fn is_level_enabled(level: LogLevel) -> bool {
    global().is_some_and(|service| service.enabled(level))
}

/// Hand an event to the global service, if any
pub fn dispatch(event: LogEvent) {
    if let Some(service) = global() {
        service.log(event);
    }
}

/// One-line description of the logging setup
pub fn describe() -> String {
    match global() {
        Some(service) => format!("logging active at {}: {}", service.min_level(), config::summary()),
        None => format!("logging inactive: {}", config::summary()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_without_service_is_silent() {
        if is_initialized() {
            return;
        }
        dispatch(LogEvent::info("ignored"));
        assert!(!is_level_enabled(LogLevel::Error));
        assert!(describe().starts_with("logging inactive"));
    }
}
