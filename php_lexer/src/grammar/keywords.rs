//! Reserved word table
//!
//! Case-sensitive and closed. Kept in lexicographic order so lookups can
//! binary-search and so near-match suggestions are deterministic.

/// Every reserved word, sorted by byte order
pub const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "and",
    "array",
    "as",
    "break",
    "callable",
    "case",
    "catch",
    "class",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enddeclare",
    "endfor",
    "endforeach",
    "endif",
    "endswitch",
    "endwhile",
    "eval",
    "exit",
    "extends",
    "final",
    "finally",
    "fn",
    "for",
    "foreach",
    "function",
    "global",
    "goto",
    "if",
    "implements",
    "include",
    "include_once",
    "instanceof",
    "insteadof",
    "interface",
    "isset",
    "list",
    "match",
    "namespace",
    "new",
    "or",
    "print",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "require_once",
    "return",
    "static",
    "switch",
    "throw",
    "trait",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
    "yield",
];

/// Exact, case-sensitive reserved word lookup
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.binary_search(&word).is_ok()
}

/// Iterate reserved words in lexicographic order
pub fn reserved_words() -> impl Iterator<Item = &'static str> {
    RESERVED_WORDS.iter().copied()
}

/// Length in chars of the longest reserved word
pub fn longest_reserved_word() -> usize {
    RESERVED_WORDS
        .iter()
        .map(|word| word.chars().count())
        .max()
        .unwrap_or(0)
}
