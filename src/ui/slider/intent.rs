//! Intents for the hero slider.

use crate::ui::mvi::Intent;

use super::config::{SliderConfig, SliderConfigPatch};
use super::state::SliderTarget;

/// Intents that can be dispatched to the slider reducer.
///
/// `now_ms` is the controller's clock reading at dispatch time.
#[derive(Debug, Clone)]
pub enum SliderIntent {
    /// Bind to a target and start cycling.
    /// A missing target or an empty item list leaves the state untouched.
    Init {
        target: Option<SliderTarget>,
        config: SliderConfig,
        /// Host prefers reduced motion; slows the interval.
        reduced_motion: bool,
        now_ms: u64,
    },

    /// Show the first item instantly and (re)arm the automatic advance.
    Start { now_ms: u64 },

    /// Hand off to the following item, wrapping at the end.
    Next { now_ms: u64 },

    /// Hand off to `index`, holding the timer until the hand-off completes.
    GoTo { index: usize, now_ms: u64 },

    /// Cancel the automatic advance, keeping position and activity.
    Pause,

    /// Re-arm a full interval if active and not already scheduled.
    Resume { now_ms: u64 },

    /// Cancel everything and show the first item instantly.
    Stop,

    /// Merge configuration; restarts when active.
    SetConfig {
        patch: SliderConfigPatch,
        now_ms: u64,
    },

    /// Detach from the target and drop all items.
    Destroy,

    /// Process every deadline that has passed by `now_ms`.
    Tick { now_ms: u64 },

    /// Pointer entered the bound target.
    PointerEnter,

    /// Pointer left the bound target.
    PointerLeave { now_ms: u64 },

    /// Host visibility changed.
    VisibilityChanged { hidden: bool, now_ms: u64 },
}

impl Intent for SliderIntent {}
