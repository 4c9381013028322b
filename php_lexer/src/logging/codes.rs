//! Event codes and their metadata
//!
//! Every code that can appear on a log event or an error is listed once in
//! [`METADATA`]. Lookups go through methods on [`Code`].

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Short identifier attached to log events and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn metadata(&self) -> Option<&'static ErrorMetadata> {
        index().get(self.0).copied()
    }

    /// Unregistered codes default to `Medium`
    pub fn severity(&self) -> Severity {
        self.metadata().map_or(Severity::Medium, |m| m.severity)
    }

    pub fn category(&self) -> Category {
        self.metadata().map_or(Category::Unknown, |m| m.category)
    }

    pub fn requires_halt(&self) -> bool {
        self.metadata().is_some_and(|m| m.requires_halt)
    }

    pub fn description(&self) -> &'static str {
        self.metadata().map_or("Unknown code", |m| m.description)
    }

    pub fn action(&self) -> &'static str {
        self.metadata()
            .map_or("No specific action available", |m| m.recommended_action)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Area of the analyzer a code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    System,
    Input,
    Lexical,
    Classification,
    Usage,
    Output,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::System => "System",
            Category::Input => "Input",
            Category::Lexical => "Lexical",
            Category::Classification => "Classification",
            Category::Usage => "Usage",
            Category::Output => "Output",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: Code,
    pub category: Category,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Loading source text
pub mod input {
    use super::Code;

    pub const SOURCE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const SOURCE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const TOO_MANY_LINES: Code = Code::new("E013");
    pub const INLINE_WITHOUT_TEXT: Code = Code::new("E014");
}

/// Advisory diagnostics; never fatal
pub mod classification {
    use super::Code;

    pub const LIKELY_TYPO: Code = Code::new("E030");
    pub const UNRECOGNIZED_TOKEN: Code = Code::new("E031");
}

pub mod usage {
    use super::Code;

    pub const INVALID_ARGUMENTS: Code = Code::new("E060");
}

pub mod output {
    use super::Code;

    pub const SERIALIZATION_FAILED: Code = Code::new("E070");
}

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const SOURCE_LOADED: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const CLASSIFICATION_COMPLETE: Code = Code::new("I030");
    pub const REPORT_RENDERED: Code = Code::new("I070");
}

/// Codes for info and debug events that carry no specific code
pub mod generic {
    use super::Code;

    pub const INFO: Code = Code::new("I000");
    pub const DEBUG: Code = Code::new("D000");
}

// ============================================================================
// METADATA TABLE
// ============================================================================

const fn entry(
    code: Code,
    category: Category,
    severity: Severity,
    recoverable: bool,
    description: &'static str,
    recommended_action: &'static str,
) -> ErrorMetadata {
    ErrorMetadata {
        code,
        category,
        severity,
        recoverable,
        requires_halt: !recoverable,
        description,
        recommended_action,
    }
}

pub static METADATA: &[ErrorMetadata] = &[
    entry(system::INTERNAL_ERROR, Category::System, Severity::Critical, false,
        "Critical internal error", "File a bug report with the input that triggered it"),
    entry(system::INITIALIZATION_FAILURE, Category::System, Severity::Critical, false,
        "Logging could not be initialized", "Check the PHPLEX_LOGGING_* environment variables"),
    entry(input::SOURCE_NOT_FOUND, Category::Input, Severity::High, false,
        "Source file not found", "Check the path and try again"),
    entry(input::INVALID_EXTENSION, Category::Input, Severity::Medium, false,
        "Source file does not end in .php", "Rename the file or unset PHPLEX_REQUIRE_PHP_EXTENSION"),
    entry(input::SOURCE_TOO_LARGE, Category::Input, Severity::High, false,
        "Source exceeds the maximum size for analysis", "Analyze a smaller snippet"),
    entry(input::PERMISSION_DENIED, Category::Input, Severity::High, false,
        "Permission denied reading source", "Check file permissions"),
    entry(input::INVALID_ENCODING, Category::Input, Severity::High, false,
        "Source is not valid UTF-8", "Re-encode the file as UTF-8"),
    entry(input::IO_ERROR, Category::Input, Severity::High, false,
        "I/O error while reading source", "Retry, then check the device or pipe"),
    entry(input::TOO_MANY_LINES, Category::Input, Severity::High, false,
        "Source exceeds the maximum line count", "Analyze a smaller snippet"),
    entry(input::INLINE_WITHOUT_TEXT, Category::Input, Severity::Medium, false,
        "Inline origin passed where a file or stdin was expected", "Call read_inline with the source text"),
    entry(classification::LIKELY_TYPO, Category::Classification, Severity::Low, true,
        "Identifier is one edit away from a reserved word", "Check the spelling of the keyword"),
    entry(classification::UNRECOGNIZED_TOKEN, Category::Classification, Severity::Low, true,
        "Token matches no classification rule", "Remove or replace the character"),
    entry(usage::INVALID_ARGUMENTS, Category::Usage, Severity::Medium, false,
        "Invalid command-line arguments", "Run with --help for usage"),
    entry(output::SERIALIZATION_FAILED, Category::Output, Severity::High, false,
        "Failed to serialize the analysis result", "File a bug report"),
    entry(success::SYSTEM_INITIALIZATION_COMPLETED, Category::System, Severity::Low, true,
        "Logging initialized", "None"),
    entry(success::SOURCE_LOADED, Category::Input, Severity::Low, true,
        "Source loaded", "None"),
    entry(success::TOKENIZATION_COMPLETE, Category::Lexical, Severity::Low, true,
        "Tokenization completed", "None"),
    entry(success::CLASSIFICATION_COMPLETE, Category::Classification, Severity::Low, true,
        "Classification completed", "None"),
    entry(success::REPORT_RENDERED, Category::Output, Severity::Low, true,
        "Report rendered", "None"),
];

static INDEX: OnceLock<HashMap<&'static str, &'static ErrorMetadata>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, &'static ErrorMetadata> {
    INDEX.get_or_init(|| METADATA.iter().map(|m| (m.code.as_str(), m)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let unique: HashSet<_> = METADATA.iter().map(|m| m.code).collect();
        assert_eq!(unique.len(), METADATA.len());
    }

    #[test]
    fn test_every_error_code_is_registered() {
        let codes = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            input::SOURCE_NOT_FOUND,
            input::INVALID_EXTENSION,
            input::SOURCE_TOO_LARGE,
            input::PERMISSION_DENIED,
            input::INVALID_ENCODING,
            input::IO_ERROR,
            input::TOO_MANY_LINES,
            input::INLINE_WITHOUT_TEXT,
            classification::LIKELY_TYPO,
            classification::UNRECOGNIZED_TOKEN,
            usage::INVALID_ARGUMENTS,
            output::SERIALIZATION_FAILED,
        ];

        for code in codes {
            assert!(code.metadata().is_some(), "missing metadata for {}", code);
        }
    }

    #[test]
    fn test_classification_codes_never_halt() {
        for code in [
            classification::LIKELY_TYPO,
            classification::UNRECOGNIZED_TOKEN,
        ] {
            assert!(!code.requires_halt());
            assert_eq!(code.category(), Category::Classification);
        }
    }

    #[test]
    fn test_unknown_code_defaults() {
        let unknown = Code::new("X999");
        assert_eq!(unknown.description(), "Unknown code");
        assert_eq!(unknown.category(), Category::Unknown);
        assert_eq!(unknown.severity(), Severity::Medium);
        assert!(!unknown.requires_halt());
    }

    #[test]
    fn test_input_errors_halt() {
        assert_eq!(input::SOURCE_NOT_FOUND.severity(), Severity::High);
        assert!(input::SOURCE_NOT_FOUND.requires_halt());
        assert_eq!(input::SOURCE_NOT_FOUND.action(), "Check the path and try again");
    }
}
