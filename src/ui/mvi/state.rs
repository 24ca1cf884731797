//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Cheap to replace (the owner swaps in the reducer output)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting marker changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
