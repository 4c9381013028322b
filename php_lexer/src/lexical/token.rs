//! Raw token type
//!
//! A token is nothing more than a slice of the analyzed text. Shape
//! information is recomputed from the text when needed rather than stored.

use crate::grammar::symbols::{CLOSE_TAG, COMPOUND_OPERATORS, OPEN_TAG};
use crate::grammar::{is_number_literal, is_variable_name, is_word_char};
use serde::{Serialize, Serializer};
use std::fmt;

/// One lexical unit, borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token<'src>(&'src str);

impl<'src> Token<'src> {
    pub fn new(text: &'src str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'src str {
        self.0
    }

    /// Which tokenizer alternative produced this token
    pub fn shape(&self) -> TokenShape {
        TokenShape::of(self.0)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Serialize for Token<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Tokenizer alternative that matched a token, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TokenShape {
    OpenTag,
    CloseTag,
    Variable,
    Number,
    Operator,
    Word,
    Other,
}

impl TokenShape {
    /// Recover the shape of a token produced by the tokenizer
    pub fn of(text: &str) -> Self {
        if text == OPEN_TAG {
            TokenShape::OpenTag
        } else if text == CLOSE_TAG {
            TokenShape::CloseTag
        } else if is_variable_name(text) {
            TokenShape::Variable
        } else if is_number_literal(text) {
            TokenShape::Number
        } else if COMPOUND_OPERATORS.contains(&text) {
            TokenShape::Operator
        } else if !text.is_empty() && text.chars().all(is_word_char) {
            TokenShape::Word
        } else {
            TokenShape::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenShape::OpenTag => "open-tag",
            TokenShape::CloseTag => "close-tag",
            TokenShape::Variable => "variable",
            TokenShape::Number => "number",
            TokenShape::Operator => "operator",
            TokenShape::Word => "word",
            TokenShape::Other => "other",
        }
    }
}

impl fmt::Display for TokenShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_borrows_source() {
        let source = String::from("echo $x;");
        let token = Token::new(&source[5..7]);

        assert_eq!(token.as_str(), "$x");
        assert_eq!(token.to_string(), "$x");
        assert_eq!(token.as_ref(), "$x");
    }

    #[test]
    fn test_shapes() {
        assert_eq!(TokenShape::of("<?php"), TokenShape::OpenTag);
        assert_eq!(TokenShape::of("?>"), TokenShape::CloseTag);
        assert_eq!(TokenShape::of("$total"), TokenShape::Variable);
        assert_eq!(TokenShape::of("42"), TokenShape::Number);
        assert_eq!(TokenShape::of("!="), TokenShape::Operator);
        assert_eq!(TokenShape::of("sumar"), TokenShape::Word);
        assert_eq!(TokenShape::of("_1"), TokenShape::Word);
        assert_eq!(TokenShape::of("@"), TokenShape::Other);
        assert_eq!(TokenShape::of("$"), TokenShape::Other);
    }

    #[test]
    fn test_token_serializes_as_string() {
        let json = serde_json::to_string(&vec![Token::new("<?php"), Token::new("$a")]).unwrap();
        assert_eq!(json, r#"["<?php","$a"]"#);
    }
}
