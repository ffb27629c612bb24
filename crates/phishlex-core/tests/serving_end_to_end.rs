//! Artifact on disk → handle → request → response.

mod common;

use phishlex_core::config::PhishlexConfig;
use phishlex_core::model::ModelHandle;
use phishlex_core::serve::{
    handle_health, handle_predict, PredictRequest, STATUS_OK, STATUS_SERVER_ERROR,
};
use tempfile::tempdir;

const REDUCED_MODEL: &str = r#"{
    "feature_names": ["URLLargo", "SimboloArroba", "SubDominio", "InformacionCorreo"],
    "coefficients": [1.5, 2.5, 1.0, 0.5],
    "intercept": -2.0
}"#;

#[test]
fn configured_artifact_serves_predictions() {
    let dir = tempdir().unwrap();
    let path = common::write_artifact(dir.path(), "reduced.json", REDUCED_MODEL);
    let cfg = PhishlexConfig {
        model_path: Some(path.clone()),
        ..PhishlexConfig::default()
    };
    let handle = ModelHandle::load(&cfg.model_candidates(None));
    assert!(handle.is_loaded());

    let health = handle_health(&handle);
    assert_eq!(health.model_path, Some(path.display().to_string()));

    let request =
        PredictRequest::from_json(r#"{"url": "http://secure.login.example.com/verify@account-update-now"}"#)
            .unwrap();
    let (status, body) = handle_predict(&handle, Some(&request), cfg.phishing_threshold);
    assert_eq!(status, STATUS_OK);
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["prediction"], "Phishing");
    assert_eq!(json["features_extracted"], 30);
    assert_eq!(json["features"]["SimboloArroba"], 1);
}

#[test]
fn form_request_against_benign_url() {
    let dir = tempdir().unwrap();
    let path = common::write_artifact(dir.path(), "m.json", REDUCED_MODEL);
    let handle = ModelHandle::load(&[path]);
    let request = PredictRequest::from_body(
        Some("application/x-www-form-urlencoded"),
        "url=https%3A%2F%2Fexample.com%2F",
    );
    let (status, body) = handle_predict(&handle, request.as_ref(), 0.5);
    assert_eq!(status, STATUS_OK);
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["prediction"], "Legitimate");
    assert_eq!(json["is_phishing"], false);
}

#[test]
fn missing_artifact_degrades_instead_of_crashing() {
    let dir = tempdir().unwrap();
    let handle = ModelHandle::load(&[dir.path().join("absent.json")]);
    let health = handle_health(&handle);
    assert_eq!(health.status, "healthy");
    assert!(!health.model_loaded);
    assert!(health.model_path.is_none());

    let request = PredictRequest {
        url: "https://example.com".to_string(),
    };
    let (status, _) = handle_predict(&handle, Some(&request), 0.5);
    assert_eq!(status, STATUS_SERVER_ERROR);
}
