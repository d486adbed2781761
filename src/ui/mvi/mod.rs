//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits and the state container for
//! implementing unidirectional data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a screen's state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **StateStore**: Owner of the current state; publishes every update

mod effect;
mod intent;
mod reducer;
mod state;
mod store;

pub use effect::Effect;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::StateStore;
