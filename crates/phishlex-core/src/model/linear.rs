//! Logistic-regression classifier read from a JSON artifact.
//!
//! Artifact layout:
//!
//! ```json
//! { "feature_names": ["UsoIP", "URLLargo"], "coefficients": [1.2, 0.4], "intercept": -0.3 }
//! ```
//!
//! `feature_names` may be omitted, in which case the coefficients follow the
//! full schema order.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Classifier, ModelError};
use crate::features::{Feature, FEATURE_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(
        feature_names: Option<Vec<String>>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ModelError> {
        let model = Self {
            feature_names,
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Reads and validates an artifact from disk.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let data = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model: LinearModel =
            serde_json::from_str(&data).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        let expected = match &self.feature_names {
            Some(names) => {
                if let Some(unknown) = names.iter().find(|n| Feature::from_name(n).is_none()) {
                    return Err(ModelError::UnknownFeature(unknown.clone()));
                }
                names.len()
            }
            None => FEATURE_COUNT,
        };
        if self.coefficients.len() != expected {
            return Err(ModelError::Invalid(format!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                expected
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Invalid("non-finite weight".to_string()));
        }
        Ok(())
    }
}

impl Classifier for LinearModel {
    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict_proba(&self, row: &[f64]) -> f64 {
        let z: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        1.0 / (1.0 + (-z).exp())
    }
}
