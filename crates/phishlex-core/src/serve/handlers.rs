//! Transport-free handlers for the predict and health endpoints.

use serde::Serialize;

use super::request::PredictRequest;
use super::validate::validate_url;
use crate::features::{extract_url_features, FeatureVector};
use crate::model::{ModelError, ModelHandle};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_SERVER_ERROR: u16 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Phishing,
    Legitimate,
}

/// Successful prediction body.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub success: bool,
    pub url: String,
    pub prediction: Verdict,
    pub is_phishing: bool,
    /// Probability of the predicted class, as a percentage with two decimals.
    pub confidence: f64,
    pub features_extracted: usize,
    pub features: FeatureVector,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Ok(Prediction),
    Error(ErrorBody),
}

impl PredictResponse {
    fn error(message: impl Into<String>) -> Self {
        PredictResponse::Error(ErrorBody {
            error: message.into(),
            success: false,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub model_path: Option<String>,
}

/// Classifies the URL in `request` with the model behind `handle`.
///
/// Checks run in a fixed order: model availability (500), missing URL
/// (400), URL validation (400), then scoring. `threshold` is the phishing
/// probability above which a URL is labelled phishing.
pub fn handle_predict(
    handle: &ModelHandle,
    request: Option<&PredictRequest>,
    threshold: f64,
) -> (u16, PredictResponse) {
    let Some(model) = handle.classifier() else {
        return (
            STATUS_SERVER_ERROR,
            PredictResponse::error("Model not available. Please check the configuration."),
        );
    };
    let Some(request) = request.filter(|r| !r.url.is_empty()) else {
        return (STATUS_BAD_REQUEST, PredictResponse::error("No URL provided"));
    };
    if let Err(err) = validate_url(&request.url) {
        return (STATUS_BAD_REQUEST, PredictResponse::error(err.to_string()));
    }

    let features = extract_url_features(&request.url);
    tracing::info!("URL analyzed: {}", request.url);
    tracing::debug!("features extracted: {} features", features.len());

    let row = match features.to_row(model.feature_names()) {
        Ok(row) => row,
        Err(err) => return scoring_error(&err),
    };
    let proba = model.predict_proba(&row);
    let is_phishing = proba > threshold;
    let confidence = if is_phishing { proba } else { 1.0 - proba };

    (
        STATUS_OK,
        PredictResponse::Ok(Prediction {
            success: true,
            url: request.url.clone(),
            prediction: if is_phishing {
                Verdict::Phishing
            } else {
                Verdict::Legitimate
            },
            is_phishing,
            confidence: round2(confidence * 100.0),
            features_extracted: features.len(),
            features,
        }),
    )
}

pub fn handle_health(handle: &ModelHandle) -> HealthResponse {
    HealthResponse {
        status: "healthy",
        model_loaded: handle.is_loaded(),
        model_path: handle.source_path().map(|p| p.display().to_string()),
    }
}

fn scoring_error(err: &ModelError) -> (u16, PredictResponse) {
    tracing::error!("error in prediction: {}", err);
    (
        STATUS_SERVER_ERROR,
        PredictResponse::error(format!("Error processing request: {err}")),
    )
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
