//! greetly: a three-screen terminal app built on unidirectional data flow.
//!
//! Each screen (Greeting, Message, Details) owns a
//! [`ui::mvi::StateStore`]: intents go in through `dispatch`, a pure
//! reducer derives the next state, and the render layer draws from the
//! latest snapshot. Navigation is a typed back stack of live screens.

pub mod config;
pub mod logging;
pub mod ui;
