//! Classifier seam and the model handle used at serving time.

mod error;
mod handle;
mod linear;

pub use error::ModelError;
pub use handle::ModelHandle;
pub use linear::LinearModel;

use std::fmt::Debug;

/// A trained binary classifier over feature rows.
pub trait Classifier: Debug + Send + Sync {
    /// Column names the model was trained with, in its expected order.
    /// `None` means full schema order.
    fn feature_names(&self) -> Option<&[String]>;

    /// Probability that `row` is phishing, in `[0, 1]`.
    fn predict_proba(&self, row: &[f64]) -> f64;
}
