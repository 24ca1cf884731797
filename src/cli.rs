//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "hero-slider", version, about = "Hero text slider for the terminal")]
pub struct Cli {
    /// Config file (default: <config_dir>/hero-slider/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Time between automatic advances
    #[arg(long, value_name = "MS", global = true)]
    pub interval_ms: Option<u64>,

    /// Exit and entry animation length
    #[arg(long, value_name = "MS", global = true)]
    pub transition_ms: Option<u64>,

    /// Keep cycling while the pointer hovers the banner
    #[arg(long, global = true)]
    pub no_pause_on_hover: bool,

    /// Prefer reduced motion (slower cycling)
    #[arg(long, global = true)]
    pub reduced_motion: bool,

    /// Slider text; repeat to replace the configured items
    #[arg(long = "item", value_name = "TEXT", global = true)]
    pub items: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Simulate the slider and print marker changes as JSON lines
    Timeline {
        /// Simulated run time
        #[arg(long, value_name = "MS", default_value_t = 10_000)]
        duration_ms: u64,
    },
}

impl Cli {
    /// Load the config file and apply command line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(interval_ms) = self.interval_ms {
            config.slider.interval_ms = interval_ms;
        }
        if let Some(transition_ms) = self.transition_ms {
            config.slider.transition_ms = transition_ms;
        }
        if self.no_pause_on_hover {
            config.slider.pause_on_hover = false;
        }
        if self.reduced_motion {
            config.slider.reduced_motion = true;
        }
        if !self.items.is_empty() {
            config.content.items = self.items.clone();
        }
    }
}
