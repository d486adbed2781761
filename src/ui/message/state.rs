//! State for the message screen.

use crate::ui::mvi::UiState;

/// State of the message screen. Fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageState {
    pub message: String,
}

impl Default for MessageState {
    fn default() -> Self {
        Self {
            message: "message".to_string(),
        }
    }
}

impl UiState for MessageState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message() {
        assert_eq!(MessageState::default().message, "message");
    }
}
