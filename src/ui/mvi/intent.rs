//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Lifecycle operations requested by the owner (start, stop, go to slide)
/// - Host signals (pointer hover, visibility changes)
/// - Timer deadlines reached
///
/// Intents that depend on time carry the current timestamp so reducers stay
/// free of clock access.
pub trait Intent: Send + 'static {}
