//! Logging service and sinks
//!
//! Every sink that prints writes to stderr. Stdout belongs to the report.

use super::events::{LogEvent, LogLevel};
use super::Code;
use crate::config::compile_time::logging::LOG_BUFFER_SIZE;
use crate::config::runtime::LoggingPreferences;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Destination for log events
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Level filter in front of a sink
pub struct LoggingService {
    sink: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(sink: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { sink, min_level }
    }

    /// Console sinks only when console logging is enabled
    pub fn from_preferences(preferences: &LoggingPreferences) -> Self {
        let sink: Arc<dyn Logger> = match (
            preferences.enable_console_logging,
            preferences.use_structured_logging,
        ) {
            (false, _) => Arc::new(NullLogger),
            (true, true) => Arc::new(StructuredLogger),
            (true, false) => Arc::new(ConsoleLogger),
        };

        Self::new(sink, preferences.min_log_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log(&self, event: LogEvent) {
        if self.enabled(event.level) {
            self.sink.log(&event);
        }
    }
}

/// Human-readable lines on stderr
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        eprintln!("{}", event);
    }
}

/// JSON lines on stderr
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        match event.to_json_line() {
            Ok(line) => eprintln!("{}", line),
            Err(_) => eprintln!("{}", event),
        }
    }
}

pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: &LogEvent) {}
}

/// Keeps the most recent events in memory, for tests and embedding
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<VecDeque<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, VecDeque<LogEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.buffer().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    pub fn with_code(&self, code: Code) -> Vec<LogEvent> {
        self.buffer()
            .iter()
            .filter(|e| e.code == code)
            .cloned()
            .collect()
    }

    pub fn warnings(&self) -> Vec<LogEvent> {
        self.buffer()
            .iter()
            .filter(|e| e.is_warning())
            .cloned()
            .collect()
    }

    pub fn contains_error(&self, code: Code) -> bool {
        self.buffer().iter().any(|e| e.is_error() && e.code == code)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut buffer = self.buffer();
        if buffer.len() == LOG_BUFFER_SIZE {
            buffer.pop_front();
        }
        buffer.push_back(event.clone());
    }
}
