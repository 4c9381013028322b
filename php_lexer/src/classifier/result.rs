//! Classification result and advisory diagnostics

use crate::logging::codes;
use crate::logging::Code;
use indexmap::IndexSet;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Soft error recorded during classification
///
/// Diagnostics never stop classification. They serialize as their
/// display message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Diagnostic {
    #[error("'{token}' looks like a typo, did you mean '{suggestion}'?")]
    LikelyTypo {
        token: String,
        suggestion: &'static str,
    },

    #[error("Unrecognized token: '{token}'")]
    UnrecognizedToken { token: String },
}

impl Diagnostic {
    pub fn code(&self) -> Code {
        match self {
            Diagnostic::LikelyTypo { .. } => codes::classification::LIKELY_TYPO,
            Diagnostic::UnrecognizedToken { .. } => codes::classification::UNRECOGNIZED_TOKEN,
        }
    }

    /// The offending token text
    pub fn token(&self) -> &str {
        match self {
            Diagnostic::LikelyTypo { token, .. } | Diagnostic::UnrecognizedToken { token } => token,
        }
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Everything one classification pass produces
///
/// The four category sets are pairwise disjoint and keep first-occurrence
/// order. `total_tokens` counts duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub reserved_words: IndexSet<String>,
    pub identifiers: IndexSet<String>,
    pub symbols: IndexSet<String>,
    pub numbers: IndexSet<String>,
    pub errors: Vec<Diagnostic>,
    pub total_tokens: usize,
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn typo_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|d| matches!(d, Diagnostic::LikelyTypo { .. }))
            .count()
    }

    pub fn unrecognized_count(&self) -> usize {
        self.errors.len() - self.typo_count()
    }

    /// Diagnostic messages in encounter order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Number of distinct tokens placed in a category
    pub fn categorized_count(&self) -> usize {
        self.reserved_words.len() + self.identifiers.len() + self.symbols.len() + self.numbers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_messages() {
        let typo = Diagnostic::LikelyTypo {
            token: "fuction".to_string(),
            suggestion: "function",
        };
        assert_eq!(
            typo.to_string(),
            "'fuction' looks like a typo, did you mean 'function'?"
        );
        assert_eq!(typo.code(), codes::classification::LIKELY_TYPO);
        assert_eq!(typo.token(), "fuction");

        let unknown = Diagnostic::UnrecognizedToken {
            token: "@".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unrecognized token: '@'");
        assert_eq!(unknown.code(), codes::classification::UNRECOGNIZED_TOKEN);
    }

    #[test]
    fn test_serialized_field_names() {
        let mut result = ClassificationResult::new();
        result.reserved_words.insert("echo".to_string());
        result.numbers.insert("7".to_string());
        result.errors.push(Diagnostic::UnrecognizedToken {
            token: "#".to_string(),
        });
        result.total_tokens = 3;

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "reservedWords": ["echo"],
                "identifiers": [],
                "symbols": [],
                "numbers": ["7"],
                "errors": ["Unrecognized token: '#'"],
                "totalTokens": 3
            })
        );
    }

    #[test]
    fn test_counts() {
        let mut result = ClassificationResult::new();
        result.errors.push(Diagnostic::LikelyTypo {
            token: "ech".to_string(),
            suggestion: "echo",
        });
        result.errors.push(Diagnostic::UnrecognizedToken {
            token: "@".to_string(),
        });

        assert!(result.has_errors());
        assert_eq!(result.typo_count(), 1);
        assert_eq!(result.unrecognized_count(), 1);
        assert_eq!(result.categorized_count(), 0);
    }
}
