//! Lexical rules, one pure predicate per feature.
//!
//! Rules look at the trimmed raw URL or at one of its parsed views and
//! nothing else. None of them fail.

use std::sync::LazyLock;

use regex::Regex;

/// A URL at least this many characters long is "long".
pub const LONG_URL_CHARS: usize = 54;
/// A URL at most this many characters long is "short".
pub const SHORT_URL_CHARS: usize = 20;

static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("static regex"));

/// Length in characters (not bytes).
pub fn char_len(url: &str) -> usize {
    url.chars().count()
}

pub fn uses_ip_host(hostname: Option<&str>) -> bool {
    hostname.is_some_and(|h| DOTTED_QUAD.is_match(h))
}

pub fn is_long(url: &str) -> bool {
    char_len(url) >= LONG_URL_CHARS
}

pub fn is_short(url: &str) -> bool {
    char_len(url) <= SHORT_URL_CHARS
}

pub fn has_at_symbol(url: &str) -> bool {
    url.contains('@')
}

/// More than one non-overlapping `//`.
pub fn has_double_slash_redirect(url: &str) -> bool {
    url.matches("//").count() > 1
}

pub fn has_hyphenated_domain(domain: &str) -> bool {
    domain.contains('-')
}

pub fn has_subdomain(subdomain: &str) -> bool {
    !subdomain.is_empty() && subdomain != "www"
}

pub fn is_https(scheme: &str) -> bool {
    scheme == "https"
}

pub fn has_non_standard_port(port: Option<u16>) -> bool {
    port.is_some_and(|p| p != 80 && p != 443)
}

pub fn has_fragment_marker(url: &str) -> bool {
    url.contains('#')
}

/// Case-sensitive.
pub fn mentions_mail(url: &str) -> bool {
    url.contains("mail")
}

pub fn has_scheme_separator(url: &str) -> bool {
    url.contains("://")
}

pub fn has_double_slash_in_path(path: &str) -> bool {
    path.contains("//")
}

/// Also true for the URL's own `http://`/`https://` prefix; trained models
/// depend on that.
pub fn has_embedded_http_scheme(url: &str) -> bool {
    url.contains("http://") || url.contains("https://")
}
