//! `phishlex health` – model availability.

use anyhow::Result;
use phishlex_core::config::PhishlexConfig;
use phishlex_core::serve::handle_health;
use phishlex_core::ModelHandle;
use std::path::Path;

pub fn run_health(cfg: &PhishlexConfig, model: Option<&Path>) -> Result<()> {
    let handle = ModelHandle::load(&cfg.model_candidates(model));
    println!("{}", serde_json::to_string_pretty(&handle_health(&handle))?);
    Ok(())
}
