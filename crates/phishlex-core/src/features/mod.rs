//! Lexical URL feature extraction.
//!
//! [`extract_url_features`] maps any string to the same 30 named 0/1 values,
//! in the same order, at training and at serving time. It is total and
//! stateless; malformed input only means more zeros.

pub mod rules;
mod schema;
mod vector;

pub use schema::{Feature, FEATURE_COUNT};
pub use vector::FeatureVector;

use std::fmt::Display;

use crate::url_model::UrlView;

/// Extracts the feature vector for `url`.
///
/// Surrounding whitespace is ignored. Empty input is fine.
///
/// # Examples
///
/// - `"http://a.co"` → `URLCorto=1`, `HTTPS=0`, `EnlacesApuntanPagina=1`
/// - `"http://192.168.0.1:8080/login@verify"` → `UsoIP=1`, `NoPuertoStd=1`, `SimboloArroba=1`
pub fn extract_url_features(url: &str) -> FeatureVector {
    let url = trim_url(url);
    let view = UrlView::new(url);
    let parsed = &view.parsed;
    let https = rules::is_https(&parsed.scheme);

    FeatureVector::from_fn(|feature| match feature {
        Feature::UsoIp => rules::uses_ip_host(parsed.hostname.as_deref()),
        Feature::UrlLargo => rules::is_long(url),
        Feature::UrlCorto => rules::is_short(url),
        Feature::SimboloArroba => rules::has_at_symbol(url),
        Feature::Redireccion => rules::has_double_slash_redirect(url),
        Feature::PrefijoSufijo => rules::has_hyphenated_domain(&view.domain.domain),
        Feature::SubDominio => rules::has_subdomain(&view.domain.subdomain),
        Feature::Https | Feature::HttpsUrlDominio => https,
        Feature::NoPuertoStd => rules::has_non_standard_port(parsed.port),
        Feature::UrlAnclaje => rules::has_fragment_marker(url),
        Feature::InformacionCorreo => rules::mentions_mail(url),
        Feature::UrlAnormal => rules::has_scheme_separator(url),
        Feature::ReenvioSitiosWeb => rules::has_double_slash_in_path(&parsed.path),
        Feature::EnlacesApuntanPagina => rules::has_embedded_http_scheme(url),
        _ => false,
    })
}

/// Extracts features from any displayable value, e.g. a dataset cell that
/// was not read as text.
pub fn extract_url_features_from(value: impl Display) -> FeatureVector {
    extract_url_features(&value.to_string())
}

/// Strips whitespace, including the ASCII information separators.
fn trim_url(url: &str) -> &str {
    url.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}
