//! Source input layer
//!
//! The only place hard errors originate before analysis. Limits come from
//! the compile-time profile; the extension check is a runtime preference.

pub mod reader;

use crate::config::runtime::InputPreferences;

pub use reader::{InputError, SourceInput, SourceOrigin, SourceReader};

/// Load source text using preferences from the environment
pub fn read_source(origin: SourceOrigin) -> Result<SourceInput, InputError> {
    create_reader().read(origin)
}

/// Wrap inline text, applying the same limits as file input
pub fn read_inline(text: impl Into<String>) -> Result<SourceInput, InputError> {
    create_reader().read_inline(text.into())
}

pub fn create_reader() -> SourceReader {
    SourceReader::from_preferences(&InputPreferences::default())
}

pub fn create_reader_with_preferences(preferences: &InputPreferences) -> SourceReader {
    SourceReader::from_preferences(preferences)
}
