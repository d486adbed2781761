//! Greeting feature module.
//!
//! The start screen: an editable name and its derived greeting line.
//!
//! # Architecture
//!
//! Uses the MVI (Model-View-Intent) pattern:
//! - `state.rs` - Name plus derived greeting line
//! - `intent.rs` - User actions (UpdateName)
//! - `effect.rs` - Reserved one-shot signals (never emitted yet)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `screen.rs` - Rendering and key handling around the store

mod effect;
mod intent;
mod reducer;
mod screen;
mod state;

pub use effect::GreetingEffect;
pub use intent::GreetingIntent;
pub use reducer::GreetingReducer;
pub use screen::GreetingScreen;
pub use state::GreetingState;
