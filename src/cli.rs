use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use devteam_core::config::Settings;
use devteam_core::models::find_model;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Simulated AI developer team")]
pub struct Config {
    /// Enable debug mode
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Default model id for every specialization without an override
    #[arg(long, global = true)]
    pub default_model: Option<String>,

    /// Fallback model id used when the default is unavailable
    #[arg(long, global = true)]
    pub fallback_model: Option<String>,

    /// Advancement tick interval in milliseconds
    #[arg(short = 'i', long, global = true)]
    pub advance_interval: Option<u64>,

    /// Number of activity events kept in the feed
    #[arg(long, global = true)]
    pub feed_capacity: Option<usize>,

    /// Classify projects from the description only
    #[arg(long, global = true)]
    pub no_scan: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a development simulation and stream the activity feed
    Run(RunArgs),
    /// List the model catalog grouped by provider
    Models,
    /// Show model recommendations per task type
    Recommend,
    /// Validate the configured models
    Validate,
    /// Print the model configuration as JSON
    Export,
    /// Check a JSON model configuration file and show how it resolves
    Import {
        /// File produced by `devteam export`
        file: PathBuf,
    },
}

/// Arguments of the `run` subcommand
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of AI developers (1-10)
    #[arg(short = 'n', long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub team_size: u8,

    /// Project directory
    #[arg(short, long, default_value = ".")]
    pub project: String,

    /// What the team should build
    #[arg(short = 'm', long)]
    pub description: String,

    /// Stop after this many seconds even if work remains
    #[arg(short = 't', long, default_value_t = 60)]
    pub duration: u64,

    /// Print the final team status as JSON
    #[arg(long)]
    pub json: bool,
}

impl Config {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load settings from file, apply CLI overrides and normalize
    pub fn load_settings(&self) -> Result<Settings> {
        for (flag, id) in [
            ("--default-model", &self.default_model),
            ("--fallback-model", &self.fallback_model),
        ] {
            if let Some(id) = id {
                if find_model(id).is_none() {
                    anyhow::bail!("{} {}: unknown model id", flag, id);
                }
            }
        }
        let mut settings = Settings::load(self.config.as_ref())?;
        self.merge_into(&mut settings);
        settings.validate();
        Ok(settings)
    }

    /// Override file values with flags that were given
    pub fn merge_into(&self, settings: &mut Settings) {
        if let Some(model) = &self.default_model {
            settings.models.default_model = model.clone();
        }
        if let Some(model) = &self.fallback_model {
            settings.models.fallback_model = model.clone();
        }
        if let Some(interval) = self.advance_interval {
            settings.simulation.advance_interval_ms = interval;
        }
        if let Some(capacity) = self.feed_capacity {
            settings.feed.capacity = capacity;
        }
        if self.no_scan {
            settings.profile.scan_filesystem = false;
        }
    }
}
