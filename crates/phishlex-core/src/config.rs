use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the model artifact in the default search locations.
pub const DEFAULT_MODEL_FILE: &str = "model.json";

/// Global configuration loaded from `~/.config/phishlex/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishlexConfig {
    /// Primary model artifact; when unset only the default locations are searched.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Further artifacts tried, in order, after `model_path`.
    #[serde(default)]
    pub extra_model_paths: Vec<PathBuf>,
    /// Phishing probability above which a URL is labelled phishing.
    #[serde(default = "default_threshold")]
    pub phishing_threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl Default for PhishlexConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            extra_model_paths: Vec::new(),
            phishing_threshold: default_threshold(),
        }
    }
}

impl PhishlexConfig {
    /// Model artifact candidates in search order: `override_path` (if any),
    /// the configured paths, the XDG data dir, then `./models/`.
    pub fn model_candidates(&self, override_path: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = override_path.map(Path::to_path_buf).into_iter().collect();
        candidates.extend(self.model_path.iter().cloned());
        candidates.extend(self.extra_model_paths.iter().cloned());
        if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("phishlex") {
            candidates.push(xdg_dirs.get_data_home().join(DEFAULT_MODEL_FILE));
        }
        candidates.push(Path::new("models").join(DEFAULT_MODEL_FILE));
        candidates.dedup();
        candidates
    }

    /// Rejects thresholds outside `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if !(self.phishing_threshold > 0.0 && self.phishing_threshold < 1.0) {
            anyhow::bail!(
                "phishing_threshold must be in (0, 1), got {}",
                self.phishing_threshold
            );
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishlex")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishlexConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] with an explicit file location.
pub fn load_or_init_at(path: &Path) -> Result<PhishlexConfig> {
    if !path.exists() {
        let default_cfg = PhishlexConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: PhishlexConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}
