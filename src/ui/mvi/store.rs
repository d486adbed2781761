//! State container: owns a screen's current state and publishes updates.

use std::sync::mpsc::{self, Receiver, Sender};

use super::reducer::Reducer;

/// Owns the current state for one screen and mediates all mutation.
///
/// `dispatch` is the sole mutation path: it runs the screen's reducer on
/// the held state and publishes the result. Subscribers always observe the
/// latest state immediately on subscribe, then every subsequent state in
/// dispatch order (replay-latest, not a replayable log).
///
/// The store is single-writer: `dispatch` takes `&mut self` and the render
/// layer is the only caller, so no locking is involved.
pub struct StateStore<R: Reducer> {
    state: R::State,
    subscribers: Vec<Sender<R::State>>,
}

impl<R: Reducer> StateStore<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// The latest state snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer on the current state and publish the result.
    ///
    /// Every dispatch publishes exactly one state, even when the reducer
    /// returns a value equal to the previous one. Subscribers must be able
    /// to count dispatches, so updates are never coalesced.
    pub fn dispatch(&mut self, intent: R::Intent) {
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        self.publish();
    }

    /// Subscribe to the state stream.
    ///
    /// The receiver observes the current state immediately, then every
    /// update. Dropping the receiver detaches it; the store prunes dead
    /// subscribers on the next publish.
    pub fn subscribe(&mut self) -> Receiver<R::State> {
        let (tx, rx) = mpsc::channel();
        // Replay the latest value before registering for updates.
        let _ = tx.send(self.state.clone());
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self) {
        let state = &self.state;
        self.subscribers.retain(|tx| tx.send(state.clone()).is_ok());
    }
}

impl<R: Reducer> Default for StateStore<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
