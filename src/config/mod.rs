//! Configuration for the hero slider binary.
//!
//! Loaded from `<config_dir>/hero-slider/config.toml` (or `--config`), with
//! command line overrides applied on top. A missing file means defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ContentConfig, SliderSettings, DEFAULT_INIT_DELAY_MS};
