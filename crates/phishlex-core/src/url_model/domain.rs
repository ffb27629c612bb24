//! Registrable-domain splitting against the Public Suffix List.
//!
//! Only the ICANN section of the list counts as a suffix; private entries
//! such as `blogspot.com` or `github.io` are treated as ordinary domains.

use std::net::IpAddr;
use std::sync::LazyLock;

use psl::Type;
use regex::Regex;

static LOOKS_LIKE_IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("static regex")
});

/// Ideographic and fullwidth full stops act as label separators.
const ALT_DOTS: [char; 3] = ['\u{3002}', '\u{ff0e}', '\u{ff61}'];

/// `subdomain.domain.suffix`, each part in the case it was written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    pub subdomain: String,
    /// Label directly under the public suffix (`example` in `example.co.uk`).
    pub domain: String,
    pub suffix: String,
}

impl DomainParts {
    /// Splits the host found in `raw`, which may be a full URL, a bare host,
    /// or something that is neither.
    pub fn from_url(raw: &str) -> Self {
        Self::from_host(lenient_host(raw))
    }

    pub fn from_host(host: &str) -> Self {
        let host: String = host
            .chars()
            .map(|c| if ALT_DOTS.contains(&c) { '.' } else { c })
            .collect();

        if host.len() >= 4
            && host.starts_with('[')
            && host.ends_with(']')
            && host[1..host.len() - 1].parse::<IpAddr>().is_ok()
        {
            return Self::bare(host);
        }

        let labels: Vec<&str> = host.split('.').collect();
        let suffix_labels = icann_suffix_labels(&host.to_lowercase())
            .unwrap_or(0)
            .min(labels.len());
        let suffix_index = labels.len() - suffix_labels;

        if suffix_labels == 0 && labels.len() == 4 && looks_like_ipv4(&host) {
            return Self::bare(host);
        }

        let subdomain = if suffix_index >= 2 {
            labels[..suffix_index - 1].join(".")
        } else {
            String::new()
        };
        let domain = if suffix_index > 0 {
            labels[suffix_index - 1].to_string()
        } else {
            String::new()
        };

        Self {
            subdomain,
            domain,
            suffix: labels[suffix_index..].join("."),
        }
    }

    /// The registrable name (`example.co.uk`), if there is a known suffix.
    pub fn registrable(&self) -> Option<String> {
        if self.domain.is_empty() || self.suffix.is_empty() {
            return None;
        }
        Some(format!("{}.{}", self.domain, self.suffix))
    }

    fn bare(host: String) -> Self {
        Self {
            domain: host,
            ..Self::default()
        }
    }
}

fn looks_like_ipv4(host: &str) -> bool {
    host.starts_with(|c: char| c.is_ascii_digit()) && LOOKS_LIKE_IPV4.is_match(host)
}

/// Number of labels in the longest ICANN suffix of `host` (lowercase), or
/// `None` when the last label is not on the list at all.
fn icann_suffix_labels(host: &str) -> Option<usize> {
    let mut candidate = host;
    loop {
        let suffix = psl::suffix(candidate.as_bytes())?;
        if !suffix.is_known() {
            return None;
        }
        let start = candidate.len().checked_sub(suffix.as_bytes().len())?;
        let text = candidate.get(start..)?;
        match suffix.typ() {
            Some(Type::Icann) => return Some(text.split('.').count()),
            // A private rule matched; retry on the rule minus its first label.
            _ => candidate = text.split_once('.')?.1,
        }
    }
}

/// Host portion of a URL-ish string: scheme (only when followed by `//`),
/// userinfo, port and trailing dots removed. Bracketed hosts keep brackets.
fn lenient_host(raw: &str) -> &str {
    let schemeless = strip_scheme(raw.trim());
    let end = schemeless
        .find(&['/', '?', '#'][..])
        .unwrap_or(schemeless.len());
    let hostinfo = schemeless[..end]
        .rsplit_once('@')
        .map_or(&schemeless[..end], |(_, h)| h);

    if hostinfo.starts_with('[') {
        if let Some(close) = hostinfo.find(']') {
            return &hostinfo[..=close];
        }
    }

    hostinfo
        .split(':')
        .next()
        .unwrap_or("")
        .trim()
        .trim_end_matches(|c: char| c == '.' || ALT_DOTS.contains(&c))
}

fn strip_scheme(url: &str) -> &str {
    let Some(slashes) = url.find("//") else {
        return url;
    };
    if slashes == 0 {
        return &url[2..];
    }
    let scheme = &url[..slashes];
    let valid = scheme.len() >= 2
        && scheme.ends_with(':')
        && scheme[..scheme.len() - 1]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        &url[slashes + 2..]
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(url: &str) -> (String, String, String) {
        let p = DomainParts::from_url(url);
        (p.subdomain, p.domain, p.suffix)
    }

    fn owned(a: &str, b: &str, c: &str) -> (String, String, String) {
        (a.to_string(), b.to_string(), c.to_string())
    }

    #[test]
    fn multi_label_suffix() {
        assert_eq!(
            parts("https://sub.example-site.co.uk/a/b//c#frag"),
            owned("sub", "example-site", "co.uk")
        );
    }

    #[test]
    fn simple_domains() {
        assert_eq!(parts("http://a.co"), owned("", "a", "co"));
        assert_eq!(parts("https://www.google.com/"), owned("www", "google", "com"));
        assert_eq!(
            parts("http://a.b.c.example.com:8080/x"),
            owned("a.b.c", "example", "com")
        );
    }

    #[test]
    fn private_suffix_is_not_a_suffix() {
        assert_eq!(
            parts("https://login-secure.github.io/"),
            owned("login-secure", "github", "io")
        );
    }

    #[test]
    fn ip_hosts_are_the_domain() {
        assert_eq!(parts("http://192.168.0.1:8080/login"), owned("", "192.168.0.1", ""));
        assert_eq!(parts("http://[::1]/"), owned("", "[::1]", ""));
    }

    #[test]
    fn unknown_tld_takes_last_label() {
        assert_eq!(parts("http://my-host.internalzz/"), owned("my-host", "internalzz", ""));
    }

    #[test]
    fn no_scheme_still_splits() {
        assert_eq!(parts("login.paypal.com.evil.ru/x"), owned("login.paypal.com", "evil", "ru"));
    }

    #[test]
    fn case_preserved_and_userinfo_dropped() {
        assert_eq!(parts("http://user@WWW.Example.COM./"), owned("WWW", "Example", "COM"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(DomainParts::from_url(""), DomainParts::default());
    }

    #[test]
    fn registrable_name() {
        let p = DomainParts::from_url("https://sub.example.co.uk");
        assert_eq!(p.registrable().as_deref(), Some("example.co.uk"));
        assert_eq!(DomainParts::from_url("http://10.0.0.1").registrable(), None);
    }
}
