//! Path component sanitization.

use crate::error::{Error, Result};

/// Sanitize a path component (folder name) by replacing problematic
/// characters, rejecting traversal attempts outright.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidPath(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidPath(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    // Sanitize problematic characters (replace with underscore)
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidPath(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_unchanged() {
        assert_eq!(sanitize_path_component("Highlights").unwrap(), "Highlights");
        assert_eq!(
            sanitize_path_component("some_channel").unwrap(),
            "some_channel"
        );
    }

    #[test]
    fn test_separators_replaced() {
        assert_eq!(
            sanitize_path_component("Best of 2016/2017").unwrap(),
            "Best of 2016_2017"
        );
        assert_eq!(
            sanitize_path_component("Speedruns: AGDQ").unwrap(),
            "Speedruns_ AGDQ"
        );
    }

    #[test]
    fn test_traversal_rejected() {
        assert!(sanitize_path_component("../evil").is_err());
        assert!(sanitize_path_component("foo/../bar").is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(sanitize_path_component("").is_err());
        assert!(sanitize_path_component("   ").is_err());
    }
}
