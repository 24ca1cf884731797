//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hero_slider::config::Config;
use hero_slider::ui::app::App;
use hero_slider::ui::slider::{
    ItemMarker, ManualClock, SliderConfig, SliderController, SliderTarget,
};
use std::path::PathBuf;
use tempfile::TempDir;

pub const ABC: [&str; 3] = ["A", "B", "C"];

pub fn target(items: &[&str]) -> SliderTarget {
    SliderTarget::new("hero", items.iter().copied())
}

/// Controller bound to `items` at t=0 with default timing.
pub fn started(items: &[&str]) -> (ManualClock, SliderController<ManualClock>) {
    started_with(items, SliderConfig::default())
}

pub fn started_with(
    items: &[&str],
    config: SliderConfig,
) -> (ManualClock, SliderController<ManualClock>) {
    let clock = ManualClock::new();
    let mut controller = SliderController::new(clock.clone());
    controller.init(Some(target(items)), config, false);
    (clock, controller)
}

/// Move the clock to `at_ms`, firing every deadline on the way.
pub fn run_until(clock: &ManualClock, controller: &mut SliderController<ManualClock>, at_ms: u64) {
    while let Some(deadline) = controller.next_deadline() {
        if deadline > at_ms {
            break;
        }
        clock.set(deadline);
        controller.tick();
    }
    clock.set(at_ms);
    controller.tick();
}

/// Number of items currently marked active.
pub fn active_count(controller: &SliderController<ManualClock>) -> usize {
    controller
        .state()
        .markers()
        .iter()
        .filter(|marker| marker.is_active())
        .count()
}

pub fn make_app(config: Config) -> (ManualClock, App<ManualClock>) {
    let clock = ManualClock::new();
    let mut app = App::new(config, clock.clone());
    app.on_resize(80, 24);
    (clock, app)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
