//! `phishlex predict <url>` – classify one URL.

use anyhow::{bail, Result};
use phishlex_core::config::PhishlexConfig;
use phishlex_core::serve::{handle_predict, PredictRequest, STATUS_OK};
use phishlex_core::ModelHandle;
use std::path::Path;

pub fn run_predict(
    cfg: &PhishlexConfig,
    url: &str,
    model: Option<&Path>,
    threshold: Option<f64>,
) -> Result<()> {
    let threshold = threshold.unwrap_or(cfg.phishing_threshold);
    if !(threshold > 0.0 && threshold < 1.0) {
        bail!("threshold must be in (0, 1), got {threshold}");
    }

    let handle = ModelHandle::load(&cfg.model_candidates(model));
    let request = PredictRequest {
        url: url.to_string(),
    };
    let (status, response) = handle_predict(&handle, Some(&request), threshold);
    println!("{}", serde_json::to_string_pretty(&response)?);
    if status != STATUS_OK {
        bail!("prediction failed with status {status}");
    }
    Ok(())
}
