use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::games::mystery::GameEngine;

#[derive(Parser, Debug)]
#[command(name = "mystery_number")]
#[command(about = "Guess the number between 1 and 100 in your terminal")]
#[command(version)]
pub struct Cli {
    /// Seed for the target generator, for reproducible rounds
    #[arg(long, env = "MYSTERY_SEED")]
    pub seed: Option<u64>,

    /// File that receives log output (the terminal belongs to the game)
    #[arg(long, env = "MYSTERY_LOG_FILE", default_value = "mystery_number.log")]
    pub log_file: PathBuf,

    /// Log filter directive, e.g. "debug" or "mystery_number=trace". Falls back to RUST_LOG.
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn engine(&self) -> GameEngine {
        match self.seed {
            Some(seed) => GameEngine::seeded(seed),
            None => GameEngine::from_entropy(),
        }
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        match &self.log_filter {
            Some(directive) => EnvFilter::try_new(directive)
                .with_context(|| format!("invalid log filter '{directive}'")),
            None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
        }
    }

    /// Route tracing output to the log file.
    pub fn init_tracing(&self) -> Result<()> {
        let file = File::create(&self.log_file)
            .with_context(|| format!("failed to create log file {}", self.log_file.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter()?)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to install tracing subscriber")
    }
}
