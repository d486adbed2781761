//! Intents for the greeting screen.

use crate::ui::mvi::Intent;

/// User actions on the greeting screen.
#[derive(Debug, Clone)]
pub enum GreetingIntent {
    /// Replace the entered name with the full new value.
    ///
    /// Unconstrained: an empty name is a legal update, not a reset.
    UpdateName(String),
}

impl Intent for GreetingIntent {}
