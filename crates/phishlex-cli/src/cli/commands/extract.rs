//! `phishlex extract <url>` – print the feature vector.

use anyhow::Result;
use phishlex_core::extract_url_features;

pub fn run_extract(url: &str) -> Result<()> {
    let features = extract_url_features(url);
    println!("{}", serde_json::to_string_pretty(&features)?);
    Ok(())
}
