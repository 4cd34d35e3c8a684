//! Input sanitization helpers applied at the request boundary.

/// Trims surrounding whitespace.
pub fn sanitize(input: &str) -> String {
    input.trim().to_string()
}

/// Trims surrounding whitespace and lowercases.
pub fn sanitize_lower(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Applies [`sanitize_lower`] to a slice, dropping entries that end up empty.
pub fn sanitize_lower_slice(inputs: &[String]) -> Vec<String> {
    inputs
        .iter()
        .map(|s| sanitize_lower(s))
        .filter(|s| !s.is_empty())
        .collect()
}
