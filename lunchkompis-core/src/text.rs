/// Trim and lowercase free-text user input.
///
/// Returns `None` if nothing but whitespace remains.
pub fn normalize_query(text: &str) -> Option<String> {
    match text.trim() {
        "" => None,
        t => Some(t.to_lowercase()),
    }
}

pub fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    debug_assert_eq!(lowercase_needle, lowercase_needle.to_lowercase());
    haystack.to_lowercase().contains(lowercase_needle)
}
