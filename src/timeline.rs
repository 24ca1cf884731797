//! Headless slider simulation.
//!
//! Drives a controller on a manual clock from deadline to deadline and
//! records every observable marker change. Backs the `timeline` subcommand.

use serde::Serialize;

use crate::ui::slider::{
    Clock, ItemMarker, ManualClock, SliderConfig, SliderController, SliderTarget,
};

/// Snapshot taken whenever the markers, position or activity change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub at_ms: u64,
    pub current_index: usize,
    pub is_active: bool,
    pub markers: Vec<ItemMarker>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Timeline {
    pub events: Vec<TimelineEvent>,
}

impl Timeline {
    /// Initialise a slider at `t = 0` and run it until `duration_ms`.
    ///
    /// An empty `items` list yields an empty timeline, as `init` is a no-op.
    pub fn simulate(
        items: Vec<String>,
        config: SliderConfig,
        reduced_motion: bool,
        duration_ms: u64,
    ) -> Self {
        let clock = ManualClock::new();
        let mut controller = SliderController::new(clock.clone());
        controller.init(
            Some(SliderTarget::new("timeline", items)),
            config,
            reduced_motion,
        );

        let mut timeline = Timeline::default();
        if !controller.state().is_bound() {
            return timeline;
        }
        timeline.record(&controller);

        while let Some(at_ms) = controller.next_deadline() {
            if at_ms > duration_ms {
                break;
            }
            clock.set(at_ms);
            controller.tick();
            timeline.record(&controller);
        }
        timeline
    }

    fn record(&mut self, controller: &SliderController<ManualClock>) {
        let state = controller.state();
        let event = TimelineEvent {
            at_ms: controller.clock().now_ms(),
            current_index: state.current_index(),
            is_active: state.is_active(),
            markers: state.markers().to_vec(),
        };
        let changed = self.events.last().map_or(true, |last| {
            last.markers != event.markers
                || last.current_index != event.current_index
                || last.is_active != event.is_active
        });
        if changed {
            self.events.push(event);
        }
    }

    /// Events as JSON lines.
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&serde_json::to_string(event)?);
            out.push('\n');
        }
        Ok(out)
    }
}
