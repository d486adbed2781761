//! Reducer for the greeting screen.

use crate::ui::mvi::Reducer;

use super::intent::GreetingIntent;
use super::state::GreetingState;

/// Reducer for greeting state transitions.
///
/// `UpdateName` replaces the whole state, which is what keeps the derived
/// greeting line in lockstep with the name.
pub struct GreetingReducer;

impl Reducer for GreetingReducer {
    type State = GreetingState;
    type Intent = GreetingIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GreetingIntent::UpdateName(name) => GreetingState::for_name(name),
        }
    }
}
