//! Lexical analysis: raw tokenization of PHP-like source text
//!
//! Tokenization is total. Any text, including the empty string, produces
//! a (possibly empty) token sequence and never an error.

pub mod token;
pub mod tokenizer;

use serde::Serialize;

pub use token::{Token, TokenShape};
pub use tokenizer::Tokenizer;

// ============================================================================
// MODULE API
// ============================================================================

/// Split text into raw tokens in source order
pub fn tokenize_raw(text: &str) -> Vec<Token<'_>> {
    Tokenizer::new().tokenize(text)
}

// ============================================================================
// TOKEN STATISTICS
// ============================================================================

/// Token counts per tokenizer alternative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCounts {
    pub open_tags: usize,
    pub close_tags: usize,
    pub variables: usize,
    pub numbers: usize,
    pub operators: usize,
    pub words: usize,
    pub other: usize,
}

impl TokenCounts {
    pub fn from_tokens(tokens: &[Token<'_>]) -> Self {
        tokens.iter().fold(Self::default(), |mut counts, token| {
            counts.record(token.shape());
            counts
        })
    }

    fn record(&mut self, shape: TokenShape) {
        match shape {
            TokenShape::OpenTag => self.open_tags += 1,
            TokenShape::CloseTag => self.close_tags += 1,
            TokenShape::Variable => self.variables += 1,
            TokenShape::Number => self.numbers += 1,
            TokenShape::Operator => self.operators += 1,
            TokenShape::Word => self.words += 1,
            TokenShape::Other => self.other += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.open_tags
            + self.close_tags
            + self.variables
            + self.numbers
            + self.operators
            + self.words
            + self.other
    }

    /// Open and close markers appear the same number of times
    pub fn tags_balanced(&self) -> bool {
        self.open_tags == self.close_tags
    }
}
