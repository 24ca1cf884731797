//! Timing configuration for the slider.

/// Default time between automatic advances.
pub const DEFAULT_INTERVAL_MS: u64 = 3500;

/// Default duration of a single exit or entry animation.
pub const DEFAULT_TRANSITION_MS: u64 = 400;

/// Interval used instead of the configured one when reduced motion is preferred.
pub const REDUCED_MOTION_INTERVAL_MS: u64 = 5000;

/// Gap between the outgoing item clearing and the incoming item appearing.
pub const SETTLE_MS: u64 = 100;

/// Slider timing and behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    /// Time between automatic advances.
    pub interval_ms: u64,
    /// Duration of each exit and entry animation.
    pub transition_ms: u64,
    /// Pause while the pointer is over the bound target.
    pub pause_on_hover: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            pause_on_hover: true,
        }
    }
}

impl SliderConfig {
    /// Wall-clock length of one full hand-off: exit, settle, entry.
    pub fn cycle_ms(&self) -> u64 {
        self.transition_ms
            .saturating_mul(2)
            .saturating_add(SETTLE_MS)
    }

    /// True when automatic advances cannot land mid-transition.
    pub fn is_timing_consistent(&self) -> bool {
        self.interval_ms > self.cycle_ms()
    }

    /// Merge the fields present in `patch` into a copy of this config.
    pub fn merged(self, patch: SliderConfigPatch) -> Self {
        Self {
            interval_ms: patch.interval_ms.unwrap_or(self.interval_ms),
            transition_ms: patch.transition_ms.unwrap_or(self.transition_ms),
            pause_on_hover: patch.pause_on_hover.unwrap_or(self.pause_on_hover),
        }
    }

    /// Interval used for scheduling. Never zero, so the schedule always moves forward.
    pub(super) fn effective_interval_ms(&self) -> u64 {
        self.interval_ms.max(1)
    }
}

/// Partial configuration applied with [`SliderConfig::merged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderConfigPatch {
    pub interval_ms: Option<u64>,
    pub transition_ms: Option<u64>,
    pub pause_on_hover: Option<bool>,
}

impl SliderConfigPatch {
    pub fn interval(interval_ms: u64) -> Self {
        Self {
            interval_ms: Some(interval_ms),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.interval_ms.is_none() && self.transition_ms.is_none() && self.pause_on_hover.is_none()
    }
}
