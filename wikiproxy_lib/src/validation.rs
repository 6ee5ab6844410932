use crate::error::ProxyError;

/// MediaWiki limits titles to 255 bytes of UTF-8.
pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_SEARCH_LENGTH: usize = 300;
/// Largest `srlimit` an anonymous client may request.
pub const MAX_SEARCH_LIMIT: u32 = 500;

/// Trim whitespace, reject control characters left after trimming, and
/// enforce a byte-length limit on the result.
pub fn sanitize_text(field: &str, input: &str, max_len: usize) -> Result<String, ProxyError> {
    let sanitized = input.trim();
    if sanitized.chars().any(char::is_control) {
        return Err(ProxyError::Validation(format!(
            "{} must not contain control characters",
            field
        )));
    }
    if sanitized.is_empty() {
        return Err(ProxyError::Validation(format!("{} must not be empty", field)));
    }
    if sanitized.len() > max_len {
        return Err(ProxyError::Validation(format!(
            "{} exceeds maximum length of {} bytes",
            field, max_len
        )));
    }
    Ok(sanitized.to_string())
}

/// Validate a page title: non-empty after trimming and within the MediaWiki
/// title length. Whether the title is legal is left to the API
/// (`invalidtitle`).
pub fn validate_page_title(input: &str) -> Result<String, ProxyError> {
    sanitize_text("pageTitle", input, MAX_TITLE_LENGTH)
}

/// Validate a search term: non-empty after trimming, bounded length.
pub fn validate_search_term(input: &str) -> Result<String, ProxyError> {
    sanitize_text("searchTerm", input, MAX_SEARCH_LENGTH)
}

/// Validate `srlimit` (must be 1..=500).
pub fn validate_search_limit(limit: u32) -> Result<u32, ProxyError> {
    if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
        return Err(ProxyError::Validation(format!(
            "limit must be between 1 and {}",
            MAX_SEARCH_LIMIT
        )));
    }
    Ok(limit)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
