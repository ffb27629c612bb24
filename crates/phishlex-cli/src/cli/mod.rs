//! CLI for the phishlex URL classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishlex_core::config;
use std::path::PathBuf;

use commands::{run_extract, run_health, run_predict, run_schema};

/// Top-level CLI for phishlex.
#[derive(Debug, Parser)]
#[command(name = "phishlex")]
#[command(about = "phishlex: lexical phishing URL classifier", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the lexical feature vector of a URL as JSON.
    Extract {
        /// URL (or any string) to inspect.
        url: String,
    },

    /// List feature column names in model order.
    Schema {
        /// Omit the columns dropped by the reduced-feature variant.
        #[arg(long)]
        reduced: bool,
    },

    /// Classify a URL with the trained model.
    Predict {
        /// Absolute http/https URL to classify.
        url: String,
        /// Model artifact to try before the configured locations.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
        /// Phishing probability threshold (overrides config).
        #[arg(long, value_name = "P")]
        threshold: Option<f64>,
    },

    /// Report whether a model can be loaded.
    Health {
        /// Model artifact to try before the configured locations.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract { url } => run_extract(&url)?,
            CliCommand::Schema { reduced } => run_schema(reduced),
            CliCommand::Predict {
                url,
                model,
                threshold,
            } => run_predict(&cfg, &url, model.as_deref(), threshold)?,
            CliCommand::Health { model } => run_health(&cfg, model.as_deref())?,
        }

        Ok(())
    }
}
