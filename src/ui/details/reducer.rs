//! Reducer for the details screen.

use crate::ui::mvi::Reducer;

use super::intent::DetailsIntent;
use super::state::DetailsState;

/// Reducer for the details screen. Unreachable, since the intent enum is
/// uninhabited; the date is set at construction, not through a reducer.
pub struct DetailsReducer;

impl Reducer for DetailsReducer {
    type State = DetailsState;
    type Intent = DetailsIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {}
    }
}
