//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every stateful UI feature (currently the hero slider) is expressed as an
//! immutable state, a set of intents and a pure reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions, host signals or timer deadlines
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
