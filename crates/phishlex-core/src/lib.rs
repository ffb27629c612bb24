//! Lexical phishing-URL classification.
//!
//! [`features::extract_url_features`] turns any URL string into the fixed
//! 30-column feature vector that models are trained on. [`model`] loads a
//! trained classifier into an explicitly constructed handle, and [`serve`]
//! turns prediction requests into responses against that handle.

pub mod config;
pub mod features;
pub mod logging;
pub mod model;
pub mod serve;
pub mod url_model;

pub use features::{extract_url_features, Feature, FeatureVector};
pub use model::{Classifier, LinearModel, ModelError, ModelHandle};
