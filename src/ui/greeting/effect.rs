//! One-shot effects for the greeting screen.

use crate::ui::mvi::Effect;

/// One-shot signals from the greeting screen.
///
/// Reserved extension point: no reducer emits these yet. A consumer would
/// drain them from a channel separate from the state stream.
#[derive(Debug, Clone, PartialEq)]
pub enum GreetingEffect {
    /// Ask the chrome to flash a transient notification.
    ShowToast(String),
}

impl Effect for GreetingEffect {}
