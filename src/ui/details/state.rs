//! State for the details screen.

use crate::ui::mvi::UiState;
use chrono::Local;

/// State of the details screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailsState {
    /// Full date captured at construction, e.g. "Friday, January 17, 2026".
    pub current_date: String,
}

impl UiState for DetailsState {}

impl DetailsState {
    /// Capture the host date once. The value is fixed for the lifetime of
    /// the owning container, not recomputed on later reads.
    pub fn captured_now() -> Self {
        Self {
            current_date: Local::now().format("%A, %B %-d, %Y").to_string(),
        }
    }
}
