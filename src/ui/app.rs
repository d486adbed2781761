//! Application shell: quit flag plus the navigator.

use crate::ui::navigation::{NavRequest, Navigator, Screen};
use crossterm::event::KeyEvent;

/// Top-level UI state outside the per-screen containers.
///
/// The shell forwards input to the active screen and applies the
/// navigation requests the screen hands back. It never touches screen
/// state directly; all mutation flows through each screen's store.
pub struct App {
    should_quit: bool,
    navigator: Navigator,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            navigator: Navigator::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::debug!("quit requested");
        self.should_quit = true;
    }

    pub fn screen(&self) -> &Screen {
        self.navigator.active()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Back action. Popping the root screen quits, mirroring back-press on
    /// the start destination.
    pub fn navigate_back(&mut self) {
        if !self.navigator.pop() {
            self.request_quit();
        }
    }

    /// Forward a key press to the active screen.
    ///
    /// Quit and back chords are handled by the input router before this
    /// point. Screens without intents ignore keys entirely.
    pub fn on_key(&mut self, key: KeyEvent) {
        let request = match self.navigator.active_mut() {
            Screen::Greeting(screen) => screen.handle_key(key),
            Screen::Message(_) | Screen::Details(_) => None,
        };
        if let Some(request) = request {
            self.apply(request);
        }
    }

    pub fn on_tick(&mut self) {}

    fn apply(&mut self, request: NavRequest) {
        match request {
            NavRequest::Push(route) => self.navigator.push(route),
            NavRequest::Pop => self.navigate_back(),
        }
    }
}
