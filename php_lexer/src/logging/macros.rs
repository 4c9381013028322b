//! Logging macros
//!
//! Each takes an optional list of `"key" => value` pairs where the value is
//! anything `Display`. The event is only built when its level is enabled.

#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::is_level_enabled($crate::logging::LogLevel::Error) {
            $crate::logging::dispatch(
                $crate::logging::LogEvent::error($code, $message)$(.context($key, &$value))*
            )
        }
    };
}

#[macro_export]
macro_rules! log_warning {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::is_level_enabled($crate::logging::LogLevel::Warning) {
            $crate::logging::dispatch(
                $crate::logging::LogEvent::warning($code, $message)$(.context($key, &$value))*
            )
        }
    };
}

/// Info-level event with a success code
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::is_level_enabled($crate::logging::LogLevel::Info) {
            $crate::logging::dispatch(
                $crate::logging::LogEvent::success($code, $message)$(.context($key, &$value))*
            )
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::is_level_enabled($crate::logging::LogLevel::Info) {
            $crate::logging::dispatch(
                $crate::logging::LogEvent::info($message)$(.context($key, &$value))*
            )
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::is_level_enabled($crate::logging::LogLevel::Debug) {
            $crate::logging::dispatch(
                $crate::logging::LogEvent::debug($message)$(.context($key, &$value))*
            )
        }
    };
}
