//! Pattern-driven tokenizer
//!
//! One compiled regex with ordered alternatives. The regex engine resolves
//! alternation leftmost-first, so at each position the earliest listed
//! alternative that matches wins. No alternative can start on whitespace
//! or U+FEFF, which is how both get skipped.

use super::token::Token;
use crate::logging::codes;
use crate::{log_debug, log_success};
use regex::Regex;
use std::sync::OnceLock;

/// Token alternatives in priority order
const TOKEN_PATTERN_SOURCE: &str = concat!(
    r"<\?php",          // open tag
    r"|\?>",            // close tag
    r"|\$[A-Za-z0-9_]+", // variable
    r"|[0-9]+",         // number
    r"|<=|>=|==|!=|\+\+|--",
    r"|[A-Za-z0-9_]+",  // word
    r"|[^\s\x{FEFF}]",   // any other single character; a byte-order mark counts as space
);

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        Regex::new(TOKEN_PATTERN_SOURCE).expect("token pattern is a valid regex")
    })
}

/// Splits source text into raw tokens
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    pattern: &'static Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            pattern: token_pattern(),
        }
    }

    /// Lazily yield tokens in source order
    pub fn tokens<'src>(&self, text: &'src str) -> impl Iterator<Item = Token<'src>> + 'src {
        self.pattern
            .find_iter(text)
            .map(|found| Token::new(found.as_str()))
    }

    /// Tokenize the whole text
    pub fn tokenize<'src>(&self, text: &'src str) -> Vec<Token<'src>> {
        log_debug!("Starting tokenization", "bytes" => text.len());

        let tokens: Vec<Token<'src>> = self.tokens(text).collect();

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization complete",
            "tokens" => tokens.len(),
            "bytes" => text.len()
        );

        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
