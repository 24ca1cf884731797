//! Hero text slider.
//!
//! The slider state machine lives in [`ui::slider`]; the rest of the crate
//! is the terminal front-end that binds it to a banner, plus configuration
//! and a headless [`timeline`] simulator.

pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod timeline;
pub mod ui;
