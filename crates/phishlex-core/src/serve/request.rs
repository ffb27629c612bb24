//! Prediction request bodies (JSON or form-encoded).

use serde_json::Value;

/// Field names accepted for the URL, in order of preference.
const URL_FIELDS: [&str; 2] = ["url", "Url"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictRequest {
    pub url: String,
}

impl PredictRequest {
    /// Reads `url` (or `Url`) from a JSON object body. Returns `None` when
    /// the body is not a JSON object or neither field holds a non-empty
    /// string.
    pub fn from_json(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;
        URL_FIELDS
            .iter()
            .filter_map(|field| object.get(*field).and_then(Value::as_str))
            .find(|s| !s.is_empty())
            .map(|url| Self {
                url: url.to_string(),
            })
    }

    /// Reads `url` (or `Url`) from an `application/x-www-form-urlencoded`
    /// body.
    pub fn from_form(body: &str) -> Option<Self> {
        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        URL_FIELDS
            .iter()
            .filter_map(|field| pairs.iter().find(|(k, _)| k == field).map(|(_, v)| v))
            .find(|v| !v.is_empty())
            .map(|url| Self { url: url.clone() })
    }

    /// Dispatches on content type; anything mentioning `json` is JSON.
    pub fn from_body(content_type: Option<&str>, body: &str) -> Option<Self> {
        match content_type {
            Some(ct) if ct.to_ascii_lowercase().contains("json") => Self::from_json(body),
            _ => Self::from_form(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_url_field() {
        let r = PredictRequest::from_json(r#"{"url": "https://a.co"}"#).unwrap();
        assert_eq!(r.url, "https://a.co");
    }

    #[test]
    fn json_capitalized_fallback() {
        let r = PredictRequest::from_json(r#"{"url": "", "Url": "http://b.co"}"#).unwrap();
        assert_eq!(r.url, "http://b.co");
    }

    #[test]
    fn json_missing_or_wrong_type() {
        assert!(PredictRequest::from_json(r#"{"link": "http://a.co"}"#).is_none());
        assert!(PredictRequest::from_json(r#"{"url": 42}"#).is_none());
        assert!(PredictRequest::from_json(r#"["http://a.co"]"#).is_none());
        assert!(PredictRequest::from_json("not json").is_none());
    }

    #[test]
    fn form_body_is_decoded() {
        let r = PredictRequest::from_form("Url=http%3A%2F%2Fa.co%2Fx%3Fy%3D1&other=2").unwrap();
        assert_eq!(r.url, "http://a.co/x?y=1");
        assert!(PredictRequest::from_form("other=2").is_none());
        assert!(PredictRequest::from_form("url=").is_none());
    }

    #[test]
    fn content_type_dispatch() {
        let json = PredictRequest::from_body(Some("application/json; charset=utf-8"), r#"{"url":"http://a.co"}"#);
        assert_eq!(json.unwrap().url, "http://a.co");
        let form = PredictRequest::from_body(None, "url=http://a.co");
        assert_eq!(form.unwrap().url, "http://a.co");
    }
}
