//! Case-insensitive substring matching used by pattern searches.
//!
//! Patterns are literal: no character in the needle has a special meaning.

/// Returns `true` if `needle` occurs anywhere in `haystack`, ignoring case.
/// An empty needle matches everything.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns `true` if any tag contains `needle`, ignoring case.
#[must_use]
pub fn any_tag_matches(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| contains_ignore_case(tag, needle))
}

/// Builds a SQL `LIKE`/`ILIKE` pattern matching `needle` anywhere in a value.
/// `\`, `%` and `_` are escaped with a backslash so they match literally.
#[must_use]
pub fn like_contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case_matches_upper_case_needle() {
        assert!(contains_ignore_case("dragon", "DRAGON"));
        assert!(contains_ignore_case("Jacques.Dupont@example.com", "dupont@EX"));
    }

    #[test]
    fn test_contains_ignore_case_is_unanchored() {
        assert!(contains_ignore_case("chiffres romains", "roma"));
        assert!(!contains_ignore_case("chiffres romains", "tribal"));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(contains_ignore_case("fleur", ""));
    }

    #[test]
    fn test_any_tag_matches_on_a_single_tag() {
        let tags = vec!["fleur".to_owned(), "papillon".to_owned()];

        assert!(any_tag_matches(&tags, "PAPI"));
        assert!(!any_tag_matches(&tags, "dragon"));
        assert!(!any_tag_matches(&[], "dragon"));
    }

    #[test]
    fn test_like_contains_pattern_wraps_needle() {
        assert_eq!(like_contains_pattern("dragon"), "%dragon%");
    }

    #[test]
    fn test_like_contains_pattern_escapes_wildcards() {
        assert_eq!(like_contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }
}
