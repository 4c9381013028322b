//! Fixed vocabularies: reserved words and symbols
//!
//! Both tables are compile-time constants and never change at runtime.

pub mod keywords;
pub mod symbols;

pub use keywords::{is_reserved_word, longest_reserved_word, reserved_words, RESERVED_WORDS};
pub use symbols::{is_symbol, CLOSE_TAG, OPEN_TAG, SIGIL, SYMBOLS};

/// ASCII letter, digit, or underscore
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// One or more ASCII digits and nothing else
pub fn is_number_literal(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_digit())
}

/// The sigil followed by one or more word characters
pub fn is_variable_name(token: &str) -> bool {
    token
        .strip_prefix(SIGIL)
        .is_some_and(|name| !name.is_empty() && name.chars().all(is_word_char))
}

/// A letter or underscore followed by zero or more word characters
pub fn is_word_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => chars.all(is_word_char),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_literal() {
        assert!(is_number_literal("0"));
        assert!(is_number_literal("2024"));
        assert!(!is_number_literal(""));
        assert!(!is_number_literal("12a"));
        assert!(!is_number_literal("١٢"));
    }

    #[test]
    fn test_variable_name() {
        assert!(is_variable_name("$a"));
        assert!(is_variable_name("$_total2"));
        assert!(is_variable_name("$1"));
        assert!(!is_variable_name("$"));
        assert!(!is_variable_name("a"));
        assert!(!is_variable_name("$a-b"));
    }

    #[test]
    fn test_word_identifier() {
        assert!(is_word_identifier("sumar"));
        assert!(is_word_identifier("_private"));
        assert!(is_word_identifier("x1"));
        assert!(!is_word_identifier("1x"));
        assert!(!is_word_identifier("$x"));
        assert!(!is_word_identifier("é"));
        assert!(!is_word_identifier(""));
    }
}
