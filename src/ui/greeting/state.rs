//! State for the greeting screen.

use crate::ui::mvi::UiState;

/// State of the greeting screen.
///
/// `greeting_message` is derived: it always reads `"Hello {name}!"` for the
/// current `name`. The two fields are only ever replaced together, so an
/// observer can never see them out of sync.
#[derive(Debug, Clone, PartialEq)]
pub struct GreetingState {
    /// Name shown in the input field.
    pub name: String,
    /// Derived greeting line.
    pub greeting_message: String,
}

impl Default for GreetingState {
    fn default() -> Self {
        Self::for_name("Android".to_string())
    }
}

impl UiState for GreetingState {}

impl GreetingState {
    /// Build a state whose greeting line matches `name`.
    ///
    /// Any string is accepted, including the empty one ("Hello !").
    pub fn for_name(name: String) -> Self {
        Self {
            greeting_message: format!("Hello {name}!"),
            name,
        }
    }
}
