//! Details feature module.
//!
//! Shows the date captured when the screen was entered. The intent set is
//! empty; the date is computed once at container construction and never
//! refreshed for the screen's lifetime.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::DetailsIntent;
pub use reducer::DetailsReducer;
pub use screen::DetailsScreen;
pub use state::DetailsState;
