// Reads config/<profile>.toml at the workspace root and turns its limits
// into `config::compile_time` constants.
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const PROFILE_VAR: &str = "PHPLEX_BUILD_PROFILE";
const CONFIG_DIR_VAR: &str = "PHPLEX_CONFIG_DIR";

#[derive(Deserialize)]
struct Profile {
    input: InputLimits,
    logging: LoggingLimits,
}

#[derive(Deserialize)]
struct InputLimits {
    max_source_size: u64,
    large_source_threshold: u64,
    max_line_count: usize,
}

#[derive(Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", PROFILE_VAR);
    println!("cargo:rerun-if-env-changed={}", CONFIG_DIR_VAR);

    let name = env::var(PROFILE_VAR).unwrap_or_else(|_| "development".into());
    let path = profile_path(&name);
    println!("cargo:rerun-if-changed={}", path.display());

    let profile = load_profile(&path)
        .and_then(|p| check_limits(&p, &name).map(|()| p))
        .unwrap_or_else(|message| panic!("{}: {}", path.display(), message));

    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_default()).join("constants.rs");
    if let Err(e) = fs::write(&out, render(&profile, &name)) {
        panic!("cannot write {}: {}", out.display(), e);
    }
}

/// Profiles live beside the workspace manifest, one level above this crate
fn profile_path(name: &str) -> PathBuf {
    let manifest = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    let root = manifest.parent().unwrap_or(Path::new(".")).to_path_buf();
    let dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".into());

    root.join(dir).join(name).with_extension("toml")
}

fn load_profile(path: &Path) -> Result<Profile, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("cannot read profile ({})", e))?;
    toml::from_str(&text).map_err(|e| format!("malformed profile ({})", e))
}

fn check_limits(profile: &Profile, name: &str) -> Result<(), String> {
    const SOURCE_SIZE_CEILING: u64 = 64 * 1024 * 1024;
    const PRODUCTION_SOURCE_SIZE_CEILING: u64 = 4 * 1024 * 1024;
    const LINE_COUNT_CEILING: usize = 1_000_000;
    const MIN_LOG_BUFFER: usize = 100;

    let input = &profile.input;
    let logging = &profile.logging;

    if input.max_source_size == 0 || input.max_source_size > SOURCE_SIZE_CEILING {
        return Err(format!(
            "max_source_size must be within 1..={} bytes",
            SOURCE_SIZE_CEILING
        ));
    }
    if name == "production" && input.max_source_size > PRODUCTION_SOURCE_SIZE_CEILING {
        return Err("max_source_size is above the production ceiling".into());
    }
    if input.large_source_threshold > input.max_source_size {
        return Err("large_source_threshold is above max_source_size".into());
    }
    if !(1..=LINE_COUNT_CEILING).contains(&input.max_line_count) {
        return Err(format!("max_line_count must be within 1..={}", LINE_COUNT_CEILING));
    }
    if logging.log_buffer_size < MIN_LOG_BUFFER {
        return Err(format!("log_buffer_size must be at least {}", MIN_LOG_BUFFER));
    }
    if logging.max_log_message_length == 0 {
        return Err("max_log_message_length cannot be zero".into());
    }

    Ok(())
}

fn render(profile: &Profile, name: &str) -> String {
    let input = &profile.input;
    let logging = &profile.logging;

    format!(
        "// @generated from the `{name}` profile\n\
         pub mod compile_time {{\n\
         \x20   pub mod input {{\n\
         \x20       pub const MAX_SOURCE_SIZE: u64 = {};\n\
         \x20       pub const LARGE_SOURCE_THRESHOLD: u64 = {};\n\
         \x20       pub const MAX_LINE_COUNT: usize = {};\n\
         \x20   }}\n\
         \x20   pub mod logging {{\n\
         \x20       pub const LOG_BUFFER_SIZE: usize = {};\n\
         \x20       pub const MAX_LOG_MESSAGE_LENGTH: usize = {};\n\
         \x20   }}\n\
         }}\n",
        input.max_source_size,
        input.large_source_threshold,
        input.max_line_count,
        logging.log_buffer_size,
        logging.max_log_message_length,
    )
}
