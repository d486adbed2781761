//! Typed routes and the screen back stack.
//!
//! The navigator owns the live screens. Pushing a route constructs the
//! destination screen together with its state container; popping drops the
//! active screen and returns to the still-alive container below. The stack
//! is never empty: the greeting screen is the start destination.

use crate::ui::details::DetailsScreen;
use crate::ui::greeting::GreetingScreen;
use crate::ui::message::MessageScreen;

/// Destinations in the navigation graph, with their construction
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Greeting,
    /// Carries the name current in the greeting state at navigation time.
    Message { name: String },
    Details,
}

/// Requests emitted by screens toward the navigation layer.
///
/// Navigation bypasses the state containers entirely: screens hand these
/// to the app shell, which applies them to the navigator.
#[derive(Debug, Clone, PartialEq)]
pub enum NavRequest {
    Push(Route),
    Pop,
}

/// A live screen: its state container plus any view-local data.
pub enum Screen {
    Greeting(GreetingScreen),
    Message(MessageScreen),
    Details(DetailsScreen),
}

impl Screen {
    fn for_route(route: Route) -> Self {
        match route {
            Route::Greeting => Screen::Greeting(GreetingScreen::new()),
            Route::Message { name } => Screen::Message(MessageScreen::new(name)),
            Route::Details => Screen::Details(DetailsScreen::new()),
        }
    }

    /// Title shown centered in the header bar.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Greeting(_) => "Greeting",
            Screen::Message(_) => "Message",
            Screen::Details(_) => "Details",
        }
    }

    /// Key hints shown in the footer.
    pub fn key_hints(&self) -> &'static str {
        match self {
            Screen::Greeting(_) => " Enter: Message │ Ctrl+D: Details │ Esc: Quit",
            Screen::Message(_) | Screen::Details(_) => " Esc: Back │ Ctrl+Q: Quit",
        }
    }
}

/// Back stack of live screens.
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on the greeting screen.
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::for_route(Route::Greeting)],
        }
    }

    pub fn active(&self) -> &Screen {
        self.stack.last().expect("navigator stack is never empty")
    }

    pub fn active_mut(&mut self) -> &mut Screen {
        self.stack
            .last_mut()
            .expect("navigator stack is never empty")
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a destination, constructing its screen and state container.
    pub fn push(&mut self, route: Route) {
        tracing::debug!(?route, "navigate");
        self.stack.push(Screen::for_route(route));
    }

    /// Pop the active screen, dropping its container. Returns false when
    /// already at the root, in which case nothing is popped.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        tracing::debug!(depth = self.stack.len(), "navigate back");
        true
    }
}
