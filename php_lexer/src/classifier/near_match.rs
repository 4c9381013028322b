//! Edit distance and reserved-word near-match lookup

use crate::grammar::{longest_reserved_word, reserved_words};

/// Levenshtein distance over Unicode scalar values
///
/// Insertions, deletions and substitutions all cost 1.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j].min(table[i][j - 1]).min(table[i - 1][j - 1])
            };
        }
    }

    table[a.len()][b.len()]
}

/// First reserved word, in sorted order, exactly one edit away from `token`
///
/// Callers are expected to have ruled out exact keyword matches already.
pub fn find_near_match(token: &str) -> Option<&'static str> {
    let token_len = token.chars().count();
    if token_len > longest_reserved_word() + 1 {
        return None;
    }

    reserved_words()
        .filter(|word| word.chars().count().abs_diff(token_len) <= 1)
        .find(|word| edit_distance(word, token) == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_basics() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("function", "function"), 0);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(edit_distance("function", "fuction"), 1);
        assert_eq!(edit_distance("function", "functions"), 1);
        assert_eq!(edit_distance("echo", "ecgo"), 1);
    }

    #[test]
    fn test_transposition_costs_two() {
        assert_eq!(edit_distance("function", "functoin"), 2);
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("¡", "!"), 1);
    }

    #[test]
    fn test_distance_properties() {
        let samples = ["", "a", "if", "else", "elseif", "sumar", "retrun", "ñandú"];
        for a in samples {
            for b in samples {
                let d = edit_distance(a, b);
                assert_eq!(d, edit_distance(b, a), "symmetry for {a:?} {b:?}");
                assert_eq!(d == 0, a == b, "identity for {a:?} {b:?}");
                assert!(d <= a.chars().count().max(b.chars().count()));
            }
        }
    }

    #[test]
    fn test_near_match_hits() {
        assert_eq!(find_near_match("fuction"), Some("function"));
        assert_eq!(find_near_match("retur"), Some("return"));
        assert_eq!(find_near_match("whilee"), Some("while"));
    }

    #[test]
    fn test_near_match_misses() {
        assert_eq!(find_near_match("sumar"), None);
        assert_eq!(find_near_match("functoin"), None);
        assert_eq!(find_near_match("x"), None);
    }

    #[test]
    fn test_near_match_length_bound() {
        assert_eq!(longest_reserved_word(), "include_once".len());
        assert_eq!(find_near_match("include_once_"), Some("include_once"));
        assert_eq!(find_near_match("include_once__"), None);
        assert_eq!(find_near_match(&"x".repeat(200)), None);
    }

    #[test]
    fn test_near_match_prefers_smallest_word() {
        // "fo" is one edit away from several keywords; "do" sorts first
        assert_eq!(find_near_match("fo"), Some("do"));
        assert_eq!(find_near_match("iff"), Some("if"));
    }
}
