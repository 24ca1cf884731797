use ratatui::layout::Rect;
use tokio::time::Instant;

use crate::config::Config;
use crate::ui::layout::{body_rect, contains};
use crate::ui::slider::{Clock, MonotonicClock, SliderConfigPatch, SliderController};

/// Bounds for interactive interval adjustment.
pub const MIN_INTERVAL_MS: u64 = 500;
pub const MAX_INTERVAL_MS: u64 = 60_000;

/// Coarse slider status shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderStatus {
    /// Not bound yet (waiting for the start-up delay) or destroyed.
    Unbound,
    Stopped,
    Paused,
    Playing,
}

/// Terminal application: the banner surface the slider is bound to.
///
/// Pointer movement over the banner body maps to pointer enter/leave, and
/// terminal focus maps to page visibility.
pub struct App<C: Clock = MonotonicClock> {
    should_quit: bool,
    config: Config,
    slider: SliderController<C>,
    body: Rect,
    pointer_inside: bool,
    /// Clock time at which the slider binds to the banner.
    init_at: Option<u64>,
}

impl<C: Clock> App<C> {
    pub fn new(config: Config, clock: C) -> Self {
        let init_at = Some(clock.now_ms().saturating_add(config.slider.init_delay_ms));
        Self {
            should_quit: false,
            config,
            slider: SliderController::new(clock),
            body: Rect::default(),
            pointer_inside: false,
            init_at,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn slider(&self) -> &SliderController<C> {
        &self.slider
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub fn status(&self) -> SliderStatus {
        let state = self.slider.state();
        if !state.is_bound() {
            SliderStatus::Unbound
        } else if !state.is_active() {
            SliderStatus::Stopped
        } else if state.is_paused() {
            SliderStatus::Paused
        } else {
            SliderStatus::Playing
        }
    }

    /// Earliest time the app needs to be woken: pending init or a slider deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.init_at, self.slider.next_deadline()) {
            (Some(init), Some(slider)) => Some(init.min(slider)),
            (init, slider) => init.or(slider),
        }
    }

    /// Handle every deadline that has passed.
    pub fn on_deadline(&mut self) {
        let now_ms = self.slider.clock().now_ms();
        if self.init_at.is_some_and(|at| at <= now_ms) {
            self.init_slider();
        }
        self.slider.tick();
    }

    /// Bind the slider to the banner content, replacing any previous binding.
    pub fn init_slider(&mut self) {
        self.init_at = None;
        self.pointer_inside = false;
        self.slider.init(
            Some(self.config.content.target()),
            self.config.slider.slider_config(),
            self.config.slider.reduced_motion,
        );
    }

    pub fn destroy_slider(&mut self) {
        self.init_at = None;
        self.slider.destroy();
    }

    pub fn start(&mut self) {
        self.slider.start();
    }

    pub fn stop(&mut self) {
        self.slider.stop();
    }

    pub fn pause(&mut self) {
        self.slider.pause();
    }

    pub fn resume(&mut self) {
        self.slider.resume();
    }

    pub fn next_slide(&mut self) {
        self.slider.next_slide();
    }

    pub fn go_to_slide(&mut self, index: usize) {
        self.slider.go_to_slide(index);
    }

    /// Change the interval by `delta_ms`, clamped to a sane range.
    pub fn adjust_interval(&mut self, delta_ms: i64) {
        let current = self.slider.state().config().interval_ms;
        let next = current
            .saturating_add_signed(delta_ms)
            .clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        if next != current {
            self.slider.set_config(SliderConfigPatch::interval(next));
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.body = body_rect(Rect::new(0, 0, cols, rows));
        if self.pointer_inside && self.body.height == 0 {
            self.pointer_inside = false;
            self.slider.on_pointer_leave();
        }
    }

    pub fn on_mouse_move(&mut self, column: u16, row: u16) {
        let inside = contains(self.body, column, row);
        if inside == self.pointer_inside {
            return;
        }
        self.pointer_inside = inside;
        if inside {
            self.slider.on_pointer_enter();
        } else {
            self.slider.on_pointer_leave();
        }
    }

    /// Terminal focus stands in for page visibility.
    pub fn on_focus_change(&mut self, focused: bool) {
        self.slider.on_visibility_change(!focused);
    }
}

impl App<MonotonicClock> {
    /// Next deadline as an instant for the runtime to sleep until.
    pub fn deadline_instant(&self) -> Option<Instant> {
        self.next_deadline()
            .and_then(|at| self.slider.clock().instant_at(at))
    }
}
