//! Reducer for the hero slider.

use crate::ui::mvi::Reducer;

use super::config::{REDUCED_MOTION_INTERVAL_MS, SETTLE_MS};
use super::intent::SliderIntent;
use super::state::{ItemMarker, SliderState, TransitionPhase};

/// Reducer for slider state transitions.
///
/// Pure function: time comes in through the intents, and logging is the
/// controller's job.
pub struct SliderReducer;

impl Reducer for SliderReducer {
    type State = SliderState;
    type Intent = SliderIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SliderIntent::Init {
                target,
                mut config,
                reduced_motion,
                now_ms,
            } => {
                let Some(target) = target.filter(|target| !target.items().is_empty()) else {
                    return state;
                };
                if reduced_motion {
                    config.interval_ms = REDUCED_MOTION_INTERVAL_MS;
                }
                let items = target.into_items();
                let mut state = SliderState {
                    markers: vec![ItemMarker::Idle; items.len()],
                    items,
                    bound: true,
                    config,
                    ..SliderState::default()
                };
                show(&mut state, 0);
                start(state, now_ms)
            }

            SliderIntent::Start { now_ms } => start(state, now_ms),

            SliderIntent::Next { now_ms } => {
                if !state.is_active || state.items.is_empty() || !state.phase.is_idle() {
                    return state;
                }
                let next = (state.current_index + 1) % state.items.len();
                begin_transition(state, next, now_ms)
            }

            SliderIntent::GoTo { index, now_ms } => {
                if index >= state.items.len() || !state.phase.is_idle() {
                    return state;
                }
                let mut state = state;
                state.advance_at = None;
                state.resume_after_transition = true;
                begin_transition(state, index, now_ms)
            }

            SliderIntent::Pause => pause(state),

            SliderIntent::Resume { now_ms } => resume(state, now_ms),

            SliderIntent::Stop => stop(state),

            SliderIntent::SetConfig { patch, now_ms } => {
                let mut state = state;
                state.config = state.config.merged(patch);
                if state.is_active {
                    start(stop(state), now_ms)
                } else {
                    state
                }
            }

            SliderIntent::Destroy => {
                let config = state.config;
                SliderState {
                    config,
                    ..SliderState::default()
                }
            }

            SliderIntent::Tick { now_ms } => tick(state, now_ms),

            SliderIntent::PointerEnter => {
                if state.bound && state.config.pause_on_hover {
                    pause(state)
                } else {
                    state
                }
            }

            SliderIntent::PointerLeave { now_ms } => {
                if state.bound && state.config.pause_on_hover {
                    resume(state, now_ms)
                } else {
                    state
                }
            }

            SliderIntent::VisibilityChanged { hidden, now_ms } => {
                if !state.bound {
                    state
                } else if hidden {
                    pause(state)
                } else {
                    resume(state, now_ms)
                }
            }
        }
    }
}

/// Clear every marker and show `index` as active, cancelling any hand-off.
fn show(state: &mut SliderState, index: usize) {
    state.markers.fill(ItemMarker::Idle);
    if let Some(marker) = state.markers.get_mut(index) {
        *marker = ItemMarker::Active;
        state.current_index = index;
    }
    state.phase = TransitionPhase::Idle;
    state.resume_after_transition = false;
}

fn start(mut state: SliderState, now_ms: u64) -> SliderState {
    if state.items.is_empty() {
        return state;
    }
    show(&mut state, 0);
    if state.items.len() == 1 {
        // Nothing to cycle through.
        return state;
    }
    state.is_active = true;
    state.advance_at = Some(now_ms.saturating_add(state.config.effective_interval_ms()));
    state
}

fn stop(mut state: SliderState) -> SliderState {
    state.advance_at = None;
    state.is_active = false;
    show(&mut state, 0);
    state
}

fn pause(mut state: SliderState) -> SliderState {
    state.advance_at = None;
    state.resume_after_transition = false;
    state
}

fn resume(mut state: SliderState, now_ms: u64) -> SliderState {
    if state.is_active && state.advance_at.is_none() {
        state.advance_at = Some(now_ms.saturating_add(state.config.effective_interval_ms()));
        state.resume_after_transition = false;
    }
    state
}

/// Step 1 of the hand-off: the current item starts exiting.
fn begin_transition(mut state: SliderState, to: usize, now_ms: u64) -> SliderState {
    let from = state.current_index;
    if let Some(marker) = state.markers.get_mut(from) {
        *marker = ItemMarker::Exiting;
    }
    state.phase = TransitionPhase::Exiting {
        from,
        to,
        until: now_ms.saturating_add(state.config.transition_ms),
    };
    state
}

/// Fire every deadline up to `now_ms` in chronological order.
///
/// On a tie the phase change runs before the automatic advance, so a
/// hand-off that completes exactly on a tick does not swallow it.
fn tick(mut state: SliderState, now_ms: u64) -> SliderState {
    loop {
        let phase_due = state.phase.deadline().filter(|at| *at <= now_ms);
        let advance_due = state.advance_at.filter(|at| *at <= now_ms);
        state = match (phase_due, advance_due) {
            (None, None) => return state,
            (Some(phase_at), Some(advance_at)) if advance_at < phase_at => {
                fire_advance(state, advance_at)
            }
            (Some(_), _) => fire_phase(state),
            (None, Some(advance_at)) => fire_advance(state, advance_at),
        };
    }
}

/// Automatic advance. The timer re-arms from its own deadline (fixed rate),
/// and a tick landing mid hand-off is dropped.
///
/// A deadline that cannot move past `at` without overflowing is dropped, so
/// the tick loop always terminates.
fn fire_advance(mut state: SliderState, at: u64) -> SliderState {
    let rearm_at = at.saturating_add(state.config.effective_interval_ms());
    state.advance_at = (rearm_at > at).then_some(rearm_at);
    if !state.phase.is_idle() || state.items.is_empty() {
        return state;
    }
    let next = (state.current_index + 1) % state.items.len();
    begin_transition(state, next, at)
}

fn fire_phase(mut state: SliderState) -> SliderState {
    match state.phase {
        TransitionPhase::Idle => {}
        TransitionPhase::Exiting { from, to, until } => {
            // Step 2: exit animation done, clear the outgoing item.
            if let Some(marker) = state.markers.get_mut(from) {
                *marker = ItemMarker::Idle;
            }
            state.phase = TransitionPhase::Settling {
                to,
                until: until.saturating_add(SETTLE_MS),
            };
        }
        TransitionPhase::Settling { to, until } => {
            // Step 3: incoming item becomes entering + active.
            if let Some(marker) = state.markers.get_mut(to) {
                *marker = ItemMarker::Entering;
            }
            state.current_index = to;
            state.phase = TransitionPhase::Entering {
                to,
                until: until.saturating_add(state.config.transition_ms),
            };
        }
        TransitionPhase::Entering { to, until } => {
            // Step 4: drop the transient entering marker.
            if let Some(marker) = state.markers.get_mut(to) {
                *marker = ItemMarker::Active;
            }
            state.phase = TransitionPhase::Idle;
            if state.resume_after_transition {
                state.resume_after_transition = false;
                state = resume(state, until);
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::slider::config::SliderConfig;
    use crate::ui::slider::state::SliderTarget;

    fn init(items: &[&str], now_ms: u64) -> SliderState {
        SliderReducer::reduce(
            SliderState::default(),
            SliderIntent::Init {
                target: Some(SliderTarget::new("hero", items.iter().copied())),
                config: SliderConfig::default(),
                reduced_motion: false,
                now_ms,
            },
        )
    }

    #[test]
    fn init_shows_first_item_and_arms_timer() {
        let state = init(&["a", "b", "c"], 0);
        assert!(state.is_bound());
        assert!(state.is_active());
        assert_eq!(state.markers(), &[ItemMarker::Active, ItemMarker::Idle, ItemMarker::Idle]);
        assert_eq!(state.advance_at(), Some(3500));
    }

    #[test]
    fn init_with_missing_target_is_noop() {
        let state = SliderReducer::reduce(
            SliderState::default(),
            SliderIntent::Init {
                target: None,
                config: SliderConfig::default(),
                reduced_motion: false,
                now_ms: 0,
            },
        );
        assert_eq!(state, SliderState::default());
    }

    #[test]
    fn reduced_motion_slows_interval() {
        let state = SliderReducer::reduce(
            SliderState::default(),
            SliderIntent::Init {
                target: Some(SliderTarget::new("hero", ["a", "b"])),
                config: SliderConfig::default(),
                reduced_motion: true,
                now_ms: 100,
            },
        );
        assert_eq!(state.config().interval_ms, REDUCED_MOTION_INTERVAL_MS);
        assert_eq!(state.advance_at(), Some(5100));
    }

    #[test]
    fn single_item_is_shown_but_not_cycled() {
        let state = init(&["only"], 0);
        assert!(!state.is_active());
        assert_eq!(state.markers(), &[ItemMarker::Active]);
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn next_starts_exit_of_current_item() {
        let state = init(&["a", "b"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::Next { now_ms: 10 });
        assert_eq!(state.marker(0), ItemMarker::Exiting);
        assert_eq!(
            state.phase(),
            TransitionPhase::Exiting {
                from: 0,
                to: 1,
                until: 410
            }
        );
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn next_is_ignored_mid_transition() {
        let state = init(&["a", "b", "c"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::Next { now_ms: 0 });
        let again = SliderReducer::reduce(state.clone(), SliderIntent::Next { now_ms: 50 });
        assert_eq!(again, state);
    }

    #[test]
    fn phases_run_in_order() {
        let state = init(&["a", "b"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::Next { now_ms: 0 });

        let state = SliderReducer::reduce(state, SliderIntent::Tick { now_ms: 400 });
        assert!(matches!(state.phase(), TransitionPhase::Settling { to: 1, until: 500 }));
        assert_eq!(state.active_index(), None);

        let state = SliderReducer::reduce(state, SliderIntent::Tick { now_ms: 500 });
        assert_eq!(state.marker(1), ItemMarker::Entering);
        assert_eq!(state.current_index(), 1);

        let state = SliderReducer::reduce(state, SliderIntent::Tick { now_ms: 900 });
        assert_eq!(state.marker(1), ItemMarker::Active);
        assert!(state.phase().is_idle());
    }

    #[test]
    fn pause_keeps_position_and_activity() {
        let state = init(&["a", "b"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::Pause);
        assert!(state.is_active());
        assert!(state.is_paused());
        assert_eq!(state.advance_at(), None);
    }

    #[test]
    fn resume_arms_full_interval_from_now() {
        let state = init(&["a", "b"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::Pause);
        let state = SliderReducer::reduce(state, SliderIntent::Resume { now_ms: 2000 });
        assert_eq!(state.advance_at(), Some(5500));
    }

    #[test]
    fn resume_does_not_replace_scheduled_timer() {
        let state = init(&["a", "b"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::Resume { now_ms: 2000 });
        assert_eq!(state.advance_at(), Some(3500));
    }

    #[test]
    fn stop_cancels_transition_and_shows_first() {
        let state = init(&["a", "b", "c"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::GoTo { index: 2, now_ms: 0 });
        let state = SliderReducer::reduce(state, SliderIntent::Tick { now_ms: 600 });
        let state = SliderReducer::reduce(state, SliderIntent::Stop);
        assert!(!state.is_active());
        assert!(state.phase().is_idle());
        assert_eq!(state.markers(), &[ItemMarker::Active, ItemMarker::Idle, ItemMarker::Idle]);
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn go_to_out_of_range_is_noop() {
        let state = init(&["a", "b"], 0);
        let after = SliderReducer::reduce(state.clone(), SliderIntent::GoTo { index: 2, now_ms: 0 });
        assert_eq!(after, state);
    }

    #[test]
    fn go_to_holds_timer_until_entry_completes() {
        let state = init(&["a", "b", "c"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::GoTo { index: 2, now_ms: 1000 });
        assert_eq!(state.advance_at(), None);

        let state = SliderReducer::reduce(state, SliderIntent::Tick { now_ms: 1899 });
        assert_eq!(state.advance_at(), None);

        let state = SliderReducer::reduce(state, SliderIntent::Tick { now_ms: 1900 });
        assert_eq!(state.active_index(), Some(2));
        assert_eq!(state.advance_at(), Some(5400));
    }

    #[test]
    fn pause_during_go_to_cancels_deferred_resume() {
        let state = init(&["a", "b", "c"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::GoTo { index: 1, now_ms: 0 });
        let state = SliderReducer::reduce(state, SliderIntent::PointerEnter);
        let state = SliderReducer::reduce(state, SliderIntent::Tick { now_ms: 900 });
        assert_eq!(state.active_index(), Some(1));
        assert!(state.is_paused());
    }

    #[test]
    fn set_config_restarts_active_slider() {
        let state = init(&["a", "b"], 0);
        let state = SliderReducer::reduce(state, SliderIntent::Next { now_ms: 0 });
        let state = SliderReducer::reduce(
            state,
            SliderIntent::SetConfig {
                patch: crate::ui::slider::config::SliderConfigPatch::interval(2000),
                now_ms: 100,
            },
        );
        assert!(state.phase().is_idle());
        assert_eq!(state.active_index(), Some(0));
        assert_eq!(state.advance_at(), Some(2100));
    }

    #[test]
    fn destroy_unbinds_and_keeps_config() {
        let state = init(&["a", "b"], 0);
        let state = SliderReducer::reduce(
            state,
            SliderIntent::SetConfig {
                patch: crate::ui::slider::config::SliderConfigPatch::interval(9000),
                now_ms: 0,
            },
        );
        let state = SliderReducer::reduce(state, SliderIntent::Destroy);
        assert!(state.is_empty());
        assert!(!state.is_bound());
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.config().interval_ms, 9000);
    }

    #[test]
    fn signals_ignored_when_unbound() {
        let state = SliderReducer::reduce(
            SliderState::default(),
            SliderIntent::VisibilityChanged {
                hidden: false,
                now_ms: 0,
            },
        );
        assert_eq!(state, SliderState::default());
    }

    #[test]
    fn hover_respects_pause_on_hover() {
        let mut state = init(&["a", "b"], 0);
        state.config.pause_on_hover = false;
        let state = SliderReducer::reduce(state, SliderIntent::PointerEnter);
        assert_eq!(state.advance_at(), Some(3500));
    }

    #[test]
    fn tie_runs_phase_before_advance() {
        let mut state = init(&["a", "b", "c"], 0);
        state.config.interval_ms = 900;
        let state = SliderReducer::reduce(state, SliderIntent::Start { now_ms: 0 });
        // t=900: first hand-off starts. t=1800: its entry completes and the
        // next advance fires on the same millisecond.
        let state = SliderReducer::reduce(state, SliderIntent::Tick { now_ms: 1800 });
        assert_eq!(state.marker(1), ItemMarker::Exiting);
        assert!(matches!(state.phase(), TransitionPhase::Exiting { from: 1, to: 2, .. }));
        assert_eq!(state.advance_at(), Some(2700));
    }

    #[test]
    fn deadlines_saturate_at_clock_limit() {
        let mut state = init(&["a", "b"], 0);
        state.config.interval_ms = u64::MAX;
        state.config.transition_ms = u64::MAX;
        let state = SliderReducer::reduce(state, SliderIntent::Start { now_ms: 5 });
        assert_eq!(state.advance_at(), Some(u64::MAX));

        let state = SliderReducer::reduce(state, SliderIntent::Next { now_ms: 5 });
        assert_eq!(state.phase().deadline(), Some(u64::MAX));
    }

    #[test]
    fn tick_at_clock_limit_terminates() {
        let mut state = init(&["a", "b", "c"], 0);
        state.config.interval_ms = u64::MAX;
        state.config.transition_ms = u64::MAX;
        let state = SliderReducer::reduce(state, SliderIntent::GoTo { index: 1, now_ms: 1 });
        let state = SliderReducer::reduce(state, SliderIntent::Tick { now_ms: u64::MAX });
        assert_eq!(state.active_index(), Some(2));
        assert!(state.phase().is_idle());
        assert_eq!(state.advance_at(), None);
    }
}
