//! Explicitly initialized model handle.
//!
//! Built once at startup and passed to request handlers. Loading never
//! panics or aborts: when no artifact can be read the handle is
//! *unavailable* and handlers answer with an error response instead.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{Classifier, LinearModel, ModelError};

#[derive(Clone)]
pub struct ModelHandle {
    state: State,
}

#[derive(Clone)]
enum State {
    Loaded {
        model: Arc<dyn Classifier>,
        source: Option<PathBuf>,
    },
    Unavailable {
        reason: String,
    },
}

impl ModelHandle {
    /// Loads the first readable artifact among `candidates`, in order.
    /// Every attempt is logged; total failure yields an unavailable handle.
    pub fn load(candidates: &[PathBuf]) -> Self {
        match Self::try_load(candidates) {
            Ok((model, path)) => {
                tracing::info!(path = %path.display(), "model loaded");
                Self {
                    state: State::Loaded {
                        model: Arc::new(model),
                        source: Some(path),
                    },
                }
            }
            Err(err) => {
                tracing::error!("model unavailable: {}", err);
                for path in candidates {
                    tracing::error!("  tried: {}", path.display());
                }
                Self::unavailable(err.to_string())
            }
        }
    }

    /// Like [`ModelHandle::load`] but returns the error of the last existing
    /// candidate, or `NotFound` when none exists.
    pub fn try_load(candidates: &[PathBuf]) -> Result<(LinearModel, PathBuf), ModelError> {
        let mut last_err = None;
        for path in candidates {
            if !path.exists() {
                tracing::debug!(path = %path.display(), "model candidate missing");
                continue;
            }
            match LinearModel::from_path(path) {
                Ok(model) => return Ok((model, path.clone())),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "model candidate rejected: {}", err);
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or(ModelError::NotFound {
            tried: candidates.len(),
        }))
    }

    /// Wraps an already constructed classifier.
    pub fn from_classifier(model: Arc<dyn Classifier>) -> Self {
        Self {
            state: State::Loaded {
                model,
                source: None,
            },
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: State::Unavailable {
                reason: reason.into(),
            },
        }
    }

    pub fn classifier(&self) -> Option<&dyn Classifier> {
        match &self.state {
            State::Loaded { model, .. } => Some(model.as_ref()),
            State::Unavailable { .. } => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.classifier().is_some()
    }

    /// Artifact path, when loaded from disk.
    pub fn source_path(&self) -> Option<&Path> {
        match &self.state {
            State::Loaded { source, .. } => source.as_deref(),
            State::Unavailable { .. } => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            State::Loaded { .. } => None,
            State::Unavailable { reason } => Some(reason),
        }
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Loaded { source, .. } => f
                .debug_struct("ModelHandle")
                .field("loaded", &true)
                .field("source", source)
                .finish(),
            State::Unavailable { reason } => f
                .debug_struct("ModelHandle")
                .field("loaded", &false)
                .field("reason", reason)
                .finish(),
        }
    }
}
