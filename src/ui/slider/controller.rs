//! Slider controller: one instance per bound target.

use tokio::time::Instant;

use crate::ui::mvi::Reducer;

use super::clock::{Clock, MonotonicClock};
use super::config::{SliderConfig, SliderConfigPatch};
use super::intent::SliderIntent;
use super::reducer::SliderReducer;
use super::state::{SliderState, SliderTarget};

/// Owns the slider state and the clock it is driven by.
///
/// All operations are synchronous and never fail; setup problems and invalid
/// requests are logged and ignored. The owner is responsible for calling
/// [`tick`](Self::tick) once [`next_deadline`](Self::next_deadline) has passed.
#[derive(Debug)]
pub struct SliderController<C: Clock = MonotonicClock> {
    state: SliderState,
    clock: C,
}

impl<C: Clock> SliderController<C> {
    pub fn new(clock: C) -> Self {
        Self {
            state: SliderState::default(),
            clock,
        }
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run an intent through the reducer and store the result.
    pub fn dispatch(&mut self, intent: SliderIntent) {
        self.state = SliderReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Bind to `target` and start cycling.
    ///
    /// A missing target or one without items leaves the controller as it was.
    pub fn init(&mut self, target: Option<SliderTarget>, config: SliderConfig, reduced_motion: bool) {
        let Some(target) = target else {
            tracing::warn!("text slider target not found");
            return;
        };
        if target.items().is_empty() {
            tracing::warn!(target_name = target.name(), "no items found for text slider");
            return;
        }
        if !config.is_timing_consistent() {
            tracing::warn!(
                interval_ms = config.interval_ms,
                cycle_ms = config.cycle_ms(),
                "slider interval is shorter than a full hand-off; ticks will be dropped"
            );
        }

        let name = target.name().to_string();
        let count = target.items().len();
        let now_ms = self.clock.now_ms();
        self.dispatch(SliderIntent::Init {
            target: Some(target),
            config,
            reduced_motion,
            now_ms,
        });
        tracing::info!(
            target_name = %name,
            items = count,
            interval_ms = self.state.config().interval_ms,
            reduced_motion,
            "text slider initialised"
        );
    }

    pub fn start(&mut self) {
        let now_ms = self.clock.now_ms();
        self.dispatch(SliderIntent::Start { now_ms });
    }

    pub fn next_slide(&mut self) {
        if self.state.is_active() && self.state.is_transitioning() {
            tracing::debug!(phase = ?self.state.phase(), "next slide ignored mid-transition");
        }
        let now_ms = self.clock.now_ms();
        self.dispatch(SliderIntent::Next { now_ms });
    }

    pub fn go_to_slide(&mut self, index: usize) {
        if index >= self.state.len() {
            tracing::debug!(index, len = self.state.len(), "go to slide ignored: out of range");
            return;
        }
        if self.state.is_transitioning() {
            tracing::debug!(index, phase = ?self.state.phase(), "go to slide ignored mid-transition");
            return;
        }
        let now_ms = self.clock.now_ms();
        self.dispatch(SliderIntent::GoTo { index, now_ms });
    }

    pub fn pause(&mut self) {
        self.dispatch(SliderIntent::Pause);
    }

    pub fn resume(&mut self) {
        let now_ms = self.clock.now_ms();
        self.dispatch(SliderIntent::Resume { now_ms });
    }

    pub fn stop(&mut self) {
        self.dispatch(SliderIntent::Stop);
    }

    pub fn set_config(&mut self, patch: SliderConfigPatch) {
        if patch.is_empty() {
            return;
        }
        let now_ms = self.clock.now_ms();
        self.dispatch(SliderIntent::SetConfig { patch, now_ms });
        tracing::debug!(config = ?self.state.config(), "slider config updated");
    }

    pub fn destroy(&mut self) {
        self.dispatch(SliderIntent::Destroy);
        tracing::info!("text slider destroyed");
    }

    /// Process every deadline that has passed.
    pub fn tick(&mut self) {
        let now_ms = self.clock.now_ms();
        let before = self.state.current_index();
        self.dispatch(SliderIntent::Tick { now_ms });
        if self.state.current_index() != before {
            tracing::trace!(
                from = before,
                to = self.state.current_index(),
                now_ms,
                "slider advanced"
            );
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.dispatch(SliderIntent::PointerEnter);
    }

    pub fn on_pointer_leave(&mut self) {
        let now_ms = self.clock.now_ms();
        self.dispatch(SliderIntent::PointerLeave { now_ms });
    }

    pub fn on_visibility_change(&mut self, hidden: bool) {
        let now_ms = self.clock.now_ms();
        self.dispatch(SliderIntent::VisibilityChanged { hidden, now_ms });
    }

    /// Earliest pending deadline in clock milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        self.state.next_deadline()
    }
}

impl SliderController<MonotonicClock> {
    /// Earliest pending deadline as an instant to sleep until.
    pub fn deadline_instant(&self) -> Option<Instant> {
        self.next_deadline().and_then(|at| self.clock.instant_at(at))
    }
}

impl Default for SliderController<MonotonicClock> {
    fn default() -> Self {
        Self::new(MonotonicClock::new())
    }
}
