//! Generic-syntax URL splitting that never fails.
//!
//! Splits `scheme://netloc/path?query#fragment` without validating or
//! normalizing anything. Missing components come back empty or `None`, so
//! every rule downstream can run on garbage input.

/// Components of a URL string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lowercased scheme, empty when the string has none.
    pub scheme: String,
    /// Authority section (between `//` and the path), empty when absent.
    pub netloc: String,
    /// Lowercased host from the netloc.
    pub hostname: Option<String>,
    /// Explicit port; only all-digit values in range count.
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl ParsedUrl {
    /// Splits `raw` into its components.
    ///
    /// Leading control characters and spaces are dropped and tab/CR/LF are
    /// removed anywhere, as browsers do before parsing.
    pub fn parse(raw: &str) -> Self {
        let cleaned: String = raw
            .trim_start_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();

        let mut parsed = ParsedUrl::default();
        let mut rest = cleaned.as_str();

        if let Some((scheme, after)) = split_scheme(rest) {
            parsed.scheme = scheme.to_ascii_lowercase();
            rest = after;
        }

        if let Some(after_slashes) = rest.strip_prefix("//") {
            let end = after_slashes
                .find(&['/', '?', '#'][..])
                .unwrap_or(after_slashes.len());
            parsed.netloc = after_slashes[..end].to_string();
            rest = &after_slashes[end..];
        }

        if let Some((before, fragment)) = rest.split_once('#') {
            parsed.fragment = Some(fragment.to_string());
            rest = before;
        }
        if let Some((before, query)) = rest.split_once('?') {
            parsed.query = Some(query.to_string());
            rest = before;
        }
        parsed.path = rest.to_string();

        let (hostname, port) = host_and_port(&parsed.netloc);
        parsed.hostname = hostname;
        parsed.port = port;
        parsed
    }

    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }
}

/// Returns `(scheme, remainder)` when `s` starts with a syntactically valid
/// scheme followed by `:`.
fn split_scheme(s: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = s.split_once(':')?;
    let first = scheme.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let valid = scheme
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}

/// Extracts host and port from a netloc. Unbalanced brackets yield neither.
fn host_and_port(netloc: &str) -> (Option<String>, Option<u16>) {
    if netloc.contains('[') != netloc.contains(']') {
        return (None, None);
    }
    let hostinfo = netloc.rsplit_once('@').map_or(netloc, |(_, h)| h);

    let (host, port) = match hostinfo.split_once('[') {
        Some((_, bracketed)) => {
            let (host, after) = bracketed.split_once(']').unwrap_or((bracketed, ""));
            (host, after.split_once(':').map_or("", |(_, p)| p))
        }
        None => hostinfo.split_once(':').unwrap_or((hostinfo, "")),
    };

    let hostname = if host.is_empty() {
        None
    } else {
        // Zone identifiers keep their case.
        Some(match host.split_once('%') {
            Some((addr, zone)) => format!("{}%{}", addr.to_lowercase(), zone),
            None => host.to_lowercase(),
        })
    };

    let port = if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) {
        port.parse::<u16>().ok()
    } else {
        None
    };

    (hostname, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let p = ParsedUrl::parse("HTTPS://User@Example.COM:8443/a/b?x=1#top");
        assert_eq!(p.scheme, "https");
        assert_eq!(p.netloc, "User@Example.COM:8443");
        assert_eq!(p.hostname.as_deref(), Some("example.com"));
        assert_eq!(p.port, Some(8443));
        assert_eq!(p.path, "/a/b");
        assert_eq!(p.query.as_deref(), Some("x=1"));
        assert_eq!(p.fragment.as_deref(), Some("top"));
    }

    #[test]
    fn no_scheme_is_all_path() {
        let p = ParsedUrl::parse("example.com/login");
        assert_eq!(p.scheme, "");
        assert_eq!(p.netloc, "");
        assert!(p.hostname.is_none());
        assert_eq!(p.path, "example.com/login");
    }

    #[test]
    fn host_port_without_slashes_is_a_scheme() {
        // "localhost:8080" reads as scheme "localhost" with path "8080".
        let p = ParsedUrl::parse("localhost:8080");
        assert_eq!(p.scheme, "localhost");
        assert_eq!(p.path, "8080");
        assert!(p.port.is_none());
    }

    #[test]
    fn empty_and_garbage() {
        assert_eq!(ParsedUrl::parse(""), ParsedUrl::default());
        let p = ParsedUrl::parse("   not a url at all   ");
        assert!(p.hostname.is_none());
        assert!(p.port.is_none());
    }

    #[test]
    fn invalid_ports_are_absent() {
        assert_eq!(ParsedUrl::parse("http://a.com:abc/").port, None);
        assert_eq!(ParsedUrl::parse("http://a.com:99999/").port, None);
        assert_eq!(ParsedUrl::parse("http://a.com:/").port, None);
        assert_eq!(ParsedUrl::parse("http://a.com:0080/").port, Some(80));
    }

    #[test]
    fn ipv6_host() {
        let p = ParsedUrl::parse("http://[::1]:8080/x");
        assert_eq!(p.hostname.as_deref(), Some("::1"));
        assert_eq!(p.port, Some(8080));
    }

    #[test]
    fn unbalanced_brackets_drop_host() {
        let p = ParsedUrl::parse("http://[::1/x");
        assert!(p.hostname.is_none());
        assert_eq!(p.path, "/x");
    }

    #[test]
    fn userinfo_uses_last_at() {
        let p = ParsedUrl::parse("http://a@b@evil.example:81/");
        assert_eq!(p.hostname.as_deref(), Some("evil.example"));
        assert_eq!(p.port, Some(81));
    }

    #[test]
    fn tabs_and_newlines_removed() {
        let p = ParsedUrl::parse("ht\ttp://exa\nmple.com/p");
        assert_eq!(p.scheme, "http");
        assert_eq!(p.hostname.as_deref(), Some("example.com"));
    }

    #[test]
    fn double_slash_path_kept() {
        let p = ParsedUrl::parse("https://h.example/a/b//c?q#f");
        assert_eq!(p.path, "/a/b//c");
        assert!(p.has_query());
    }
}
