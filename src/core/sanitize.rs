// src/core/sanitize.rs
//
// Small text helpers shared by the models and the CLI: whitespace cleanup for
// user-entered names, and case-insensitive matching for search.

/// Collapse runs of whitespace to a single space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lowercased copy for case-insensitive comparisons.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// `needle` is expected to be folded already.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(needle)
}

/// Case-insensitive ordering; strings differing only in case compare equal.
pub fn cmp_ignore_case(a: &str, b: &str) -> std::cmp::Ordering {
    fold(a).cmp(&fold(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_is_collapsed() {
        assert_eq!(normalize_ws("  Real   Madrid \t"), "Real Madrid");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn folded_matching() {
        assert!(contains_folded("Manchester City", "city"));
        assert!(!contains_folded("Ajax", "city"));
        assert_eq!(cmp_ignore_case("ajax", "AJAX"), std::cmp::Ordering::Equal);
    }
}
