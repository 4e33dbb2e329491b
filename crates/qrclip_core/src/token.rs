//! Utilities for generating clip identifiers and submission links.

use crate::constants::TOKEN_LEN;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a fresh random clip identifier.
///
/// Tokens are short alphanumeric strings with negligible collision
/// probability over a process lifetime; successive calls share no state.
///
/// # Returns
/// A randomly generated identifier.
pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Compose the fully-qualified submission URL for a clip identifier.
///
/// # Arguments
/// - `base`: Server base address, with or without a trailing slash.
/// - `id`: Clip identifier.
///
/// # Returns
/// `{base}/post/{id}`.
pub fn submission_url(base: &str, id: &str) -> String {
    format!("{}/post/{}", base.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tokens_have_expected_length_and_charset() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|ch| ch.is_ascii_alphanumeric()));
    }

    #[test]
    fn ten_thousand_tokens_contain_no_duplicate() {
        let tokens: HashSet<String> = (0..10_000).map(|_| generate_token()).collect();
        assert_eq!(tokens.len(), 10_000);
    }

    #[test]
    fn submission_url_joins_base_and_id() {
        assert_eq!(
            submission_url("http://127.0.0.1:8000", "abc123"),
            "http://127.0.0.1:8000/post/abc123"
        );
        assert_eq!(
            submission_url("http://127.0.0.1:8000/", "abc123"),
            "http://127.0.0.1:8000/post/abc123"
        );
    }
}
