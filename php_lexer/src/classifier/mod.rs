//! Token classification
//!
//! Routes each raw token to exactly one category, or to the diagnostic
//! list, using a fixed-priority rule chain. Word-style identifiers are also
//! checked against the reserved words for likely typos.

pub mod near_match;
pub mod result;

use crate::grammar::{
    is_number_literal, is_reserved_word, is_symbol, is_variable_name, is_word_identifier,
};
use crate::lexical::Token;
use crate::logging::codes;
use crate::{log_debug, log_success, log_warning};
use std::fmt;

pub use near_match::{edit_distance, find_near_match};
pub use result::{ClassificationResult, Diagnostic};

/// Category a single token falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    ReservedWord,
    Number,
    Symbol,
    Variable,
    Word,
    Unrecognized,
}

impl TokenClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenClass::ReservedWord => "reserved word",
            TokenClass::Number => "number",
            TokenClass::Symbol => "symbol",
            TokenClass::Variable => "variable",
            TokenClass::Word => "identifier",
            TokenClass::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Rule = (TokenClass, fn(&str) -> bool);

/// Evaluated top to bottom, first match wins
const RULES: &[Rule] = &[
    (TokenClass::ReservedWord, is_reserved_word),
    (TokenClass::Number, is_number_literal),
    (TokenClass::Symbol, is_symbol),
    (TokenClass::Variable, is_variable_name),
    (TokenClass::Word, is_word_identifier),
];

/// Class of one token under the rule chain
pub fn class_of(token: &str) -> TokenClass {
    RULES
        .iter()
        .find(|(_, matches)| matches(token))
        .map(|(class, _)| *class)
        .unwrap_or(TokenClass::Unrecognized)
}

/// Classify a raw token sequence
///
/// Never fails. Each call builds a fresh result.
pub fn classify(tokens: &[Token<'_>]) -> ClassificationResult {
    let mut result = ClassificationResult::new();

    for token in tokens {
        let text = token.as_str();

        match class_of(text) {
            TokenClass::ReservedWord => {
                result.reserved_words.insert(text.to_string());
            }
            TokenClass::Number => {
                result.numbers.insert(text.to_string());
            }
            TokenClass::Symbol => {
                result.symbols.insert(text.to_string());
            }
            TokenClass::Variable => {
                result.identifiers.insert(text.to_string());
            }
            TokenClass::Word => {
                if let Some(suggestion) = find_near_match(text) {
                    record(
                        &mut result,
                        Diagnostic::LikelyTypo {
                            token: text.to_string(),
                            suggestion,
                        },
                    );
                }
                result.identifiers.insert(text.to_string());
            }
            TokenClass::Unrecognized => {
                record(
                    &mut result,
                    Diagnostic::UnrecognizedToken {
                        token: text.to_string(),
                    },
                );
            }
        }
    }

    result.total_tokens = tokens.len();

    log_success!(codes::success::CLASSIFICATION_COMPLETE, "Classification complete",
        "tokens" => result.total_tokens,
        "reserved_words" => result.reserved_words.len(),
        "identifiers" => result.identifiers.len(),
        "symbols" => result.symbols.len(),
        "numbers" => result.numbers.len(),
        "diagnostics" => result.errors.len()
    );

    result
}

fn record(result: &mut ClassificationResult, diagnostic: Diagnostic) {
    log_warning!(diagnostic.code(), &diagnostic.to_string(),
        "token" => diagnostic.token(),
        "position" => result.errors.len()
    );
    result.errors.push(diagnostic);
}

/// Tokenize and classify in one step
pub fn classify_text(text: &str) -> ClassificationResult {
    let tokens = crate::lexical::tokenize_raw(text);
    log_debug!("Classifying tokens", "count" => tokens.len());
    classify(&tokens)
}
