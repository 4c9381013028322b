//! Symbol table: punctuation, operators, the variable sigil, and the
//! open/close tag markers.

/// Opens a PHP block
pub const OPEN_TAG: &str = "<?php";

/// Closes a PHP block
pub const CLOSE_TAG: &str = "?>";

/// Prefix of variable names
pub const SIGIL: char = '$';

/// Two-character operators the tokenizer keeps together
pub const COMPOUND_OPERATORS: &[&str] = &["<=", ">=", "==", "!=", "++", "--"];

/// Every recognized symbol
pub const SYMBOLS: &[&str] = &[
    "(", ")", "{", "}", "[", "]", ";", ",", ".", "+", "-", "*", "/", "=", "<", ">", "<=", ">=",
    "==", "!=", "++", "--", "?", ":", "$", OPEN_TAG, CLOSE_TAG, "!", "¡",
];

/// Exact symbol lookup
pub fn is_symbol(token: &str) -> bool {
    SYMBOLS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_include_markers_and_sigil() {
        assert!(is_symbol(OPEN_TAG));
        assert!(is_symbol(CLOSE_TAG));
        assert!(is_symbol("$"));
        assert!(is_symbol("¡"));
    }

    #[test]
    fn test_compound_operators_are_symbols() {
        for op in COMPOUND_OPERATORS {
            assert!(is_symbol(op), "{} should be a symbol", op);
        }
    }

    #[test]
    fn test_unlisted_characters_are_not_symbols() {
        for token in ["@", "#", "%", "&", "|", "===", "->", "<?", ""] {
            assert!(!is_symbol(token), "{} should not be a symbol", token);
        }
    }
}
