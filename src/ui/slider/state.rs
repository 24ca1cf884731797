//! State for the hero slider.

use serde::Serialize;

use crate::ui::mvi::UiState;

use super::config::SliderConfig;

/// One displayable unit of the slider, identified by its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderItem {
    text: String,
}

impl SliderItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for SliderItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SliderItem {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// The surface a slider binds to: a name for diagnostics and the ordered
/// items discovered on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SliderTarget {
    name: String,
    items: Vec<SliderItem>,
}

impl SliderTarget {
    pub fn new<I, T>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SliderItem>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[SliderItem] {
        &self.items
    }

    pub(super) fn into_items(self) -> Vec<SliderItem> {
        self.items
    }
}

/// Visual marker applied to an item. Styling reacts to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemMarker {
    /// Not displayed.
    #[default]
    Idle,
    /// Playing its exit animation.
    Exiting,
    /// Active and still playing its entry animation.
    Entering,
    /// Displayed.
    Active,
}

impl ItemMarker {
    /// Entering items already count as the active item.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Entering | Self::Active)
    }
}

/// Where the slider is in the exit → settle → entry hand-off.
///
/// Each non-idle phase carries the absolute deadline (milliseconds on the
/// controller's clock) at which it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// No transition in flight.
    #[default]
    Idle,
    /// `from` is exiting; `to` appears after the exit and settle delay.
    Exiting { from: usize, to: usize, until: u64 },
    /// Nothing is displayed while the settle delay runs.
    Settling { to: usize, until: u64 },
    /// `to` is active and carries the entering marker.
    Entering { to: usize, until: u64 },
}

impl TransitionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn deadline(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Exiting { until, .. }
            | Self::Settling { until, .. }
            | Self::Entering { until, .. } => Some(*until),
        }
    }
}

/// Complete slider state for one bound target.
///
/// `advance_at` is the automatic-advance timer: it is set exactly when the
/// slider is active and not paused.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliderState {
    pub(super) items: Vec<SliderItem>,
    pub(super) markers: Vec<ItemMarker>,
    pub(super) current_index: usize,
    pub(super) is_active: bool,
    pub(super) bound: bool,
    pub(super) config: SliderConfig,
    pub(super) advance_at: Option<u64>,
    pub(super) phase: TransitionPhase,
    /// Set by `GoTo`: re-arm the timer once the hand-off completes.
    pub(super) resume_after_transition: bool,
}

impl UiState for SliderState {}

impl SliderState {
    pub fn items(&self) -> &[SliderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn markers(&self) -> &[ItemMarker] {
        &self.markers
    }

    pub fn marker(&self, index: usize) -> ItemMarker {
        self.markers.get(index).copied().unwrap_or_default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Index of the item currently marked active, if any.
    ///
    /// `None` while the outgoing item exits and during the settle delay.
    pub fn active_index(&self) -> Option<usize> {
        self.markers.iter().position(|marker| marker.is_active())
    }

    /// Whether automatic cycling has been started.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether host signal listeners are attached.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Active but with no automatic advance scheduled.
    pub fn is_paused(&self) -> bool {
        self.is_active && self.advance_at.is_none()
    }

    pub fn is_transitioning(&self) -> bool {
        !self.phase.is_idle()
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn advance_at(&self) -> Option<u64> {
        self.advance_at
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Earliest pending deadline: a phase change or an automatic advance.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.phase.deadline(), self.advance_at) {
            (Some(phase), Some(advance)) => Some(phase.min(advance)),
            (phase, advance) => phase.or(advance),
        }
    }

    /// Text of the item a view should show, with its marker.
    pub fn visible_item(&self) -> Option<(&SliderItem, ItemMarker)> {
        self.markers
            .iter()
            .position(|marker| *marker != ItemMarker::Idle)
            .map(|index| (&self.items[index], self.markers[index]))
    }
}
