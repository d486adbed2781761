//! Message feature module.
//!
//! A static screen reached from Greeting, carrying the entered name as a
//! route parameter. Its intent set is empty, so its state never changes
//! after construction.

mod effect;
mod intent;
mod reducer;
mod screen;
mod state;

pub use effect::MessageEffect;
pub use intent::MessageIntent;
pub use reducer::MessageReducer;
pub use screen::MessageScreen;
pub use state::MessageState;
