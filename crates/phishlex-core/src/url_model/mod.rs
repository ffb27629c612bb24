//! URL modeling.
//!
//! Two lenient views of a URL string: its generic-syntax components
//! ([`ParsedUrl`]) and its public-suffix-aware host split ([`DomainParts`]).
//! Neither fails; malformed input yields empty or absent parts.

mod domain;
mod split;

pub use domain::DomainParts;
pub use split::ParsedUrl;

/// Both views of one URL, computed once per extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlView {
    pub parsed: ParsedUrl,
    pub domain: DomainParts,
}

impl UrlView {
    pub fn new(url: &str) -> Self {
        Self {
            parsed: ParsedUrl::parse(url),
            domain: DomainParts::from_url(url),
        }
    }

    /// True when the URL names both a scheme and an authority.
    pub fn is_absolute(&self) -> bool {
        !self.parsed.scheme.is_empty() && !self.parsed.netloc.is_empty()
    }
}
