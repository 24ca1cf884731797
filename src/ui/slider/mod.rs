//! Hero text slider feature module.
//!
//! Cycles an ordered, fixed sequence of text items with timed automatic
//! advance and a three-phase hand-off between the outgoing and incoming
//! item. Pointer hover and visibility changes pause and resume it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Items, per-item markers and the transition phase machine
//! - `intent.rs` - Lifecycle operations, host signals and timer deadlines
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Owns one state per bound target, reads the clock, logs
//! - `clock.rs` - Millisecond time sources (monotonic and manual)
//!
//! A single deadline drives everything: the controller reports the earliest
//! pending deadline and the owner calls [`SliderController::tick`] once it
//! has passed.

mod clock;
mod config;
mod controller;
mod intent;
mod reducer;
mod state;

pub use clock::{sleep_until_deadline, Clock, ManualClock, MonotonicClock};
pub use config::{
    SliderConfig, SliderConfigPatch, DEFAULT_INTERVAL_MS, DEFAULT_TRANSITION_MS,
    REDUCED_MOTION_INTERVAL_MS, SETTLE_MS,
};
pub use controller::SliderController;
pub use intent::SliderIntent;
pub use reducer::SliderReducer;
pub use state::{ItemMarker, SliderItem, SliderState, SliderTarget, TransitionPhase};
