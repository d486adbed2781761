//! Intents for the message screen.

use crate::ui::mvi::Intent;

/// User actions on the message screen.
///
/// Empty: no value of this type can be constructed, so dispatching to the
/// message store is a no-op by construction rather than by runtime check.
#[derive(Debug, Clone)]
pub enum MessageIntent {}

impl Intent for MessageIntent {}
