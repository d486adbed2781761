//! Reducer for the message screen.

use crate::ui::mvi::Reducer;

use super::intent::MessageIntent;
use super::state::MessageState;

/// Reducer for the message screen.
///
/// The intent enum is uninhabited, so `reduce` can never actually run; the
/// empty match makes that explicit and keeps the reducer total.
pub struct MessageReducer;

impl Reducer for MessageReducer {
    type State = MessageState;
    type Intent = MessageIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {}
    }
}
