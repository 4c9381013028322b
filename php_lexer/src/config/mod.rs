//! Configuration
//!
//! Hard limits are baked in by build.rs from `config/<profile>.toml`;
//! per-run preferences come from the environment (see [`runtime`]).

include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

/// Which TOML profile the binary was built from
pub mod build_info {
    pub fn profile() -> &'static str {
        option_env!("PHPLEX_BUILD_PROFILE").unwrap_or("development")
    }

    pub fn config_dir() -> &'static str {
        option_env!("PHPLEX_CONFIG_DIR").unwrap_or("config")
    }

    /// e.g. `config/development.toml`
    pub fn profile_file() -> String {
        format!("{}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::{input, logging};
    use super::*;

    #[test]
    fn test_generated_limits_are_sane() {
        assert!(input::MAX_SOURCE_SIZE > 0);
        assert!(input::LARGE_SOURCE_THRESHOLD <= input::MAX_SOURCE_SIZE);
        assert!(input::MAX_LINE_COUNT > 0);
        assert!(logging::LOG_BUFFER_SIZE >= 100);
        assert!(logging::MAX_LOG_MESSAGE_LENGTH > 0);
    }

    #[test]
    fn test_profile_file_names_profile() {
        let file = build_info::profile_file();
        assert!(file.contains(build_info::profile()));
        assert!(file.ends_with(".toml"));
    }
}
