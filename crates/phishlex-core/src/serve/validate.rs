//! Submitted-URL validation. Stricter than the extractor, which accepts
//! anything.

use thiserror::Error;

use crate::url_model::ParsedUrl;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Empty URL")]
    Empty,
    #[error("URL must include protocol (http:// or https://) and domain")]
    NotAbsolute,
}

/// Accepts a non-blank URL with both a scheme and an authority.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::Empty);
    }
    let parsed = ParsedUrl::parse(url);
    if parsed.scheme.is_empty() || parsed.netloc.is_empty() {
        return Err(ValidationError::NotAbsolute);
    }
    Ok(())
}
