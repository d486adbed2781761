//! Rendering for the message screen.

use crate::ui::mvi::StateStore;
use crate::ui::theme::{HEADER_TEXT, HINT_TEXT};
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::reducer::MessageReducer;
use super::state::MessageState;

/// The message screen.
///
/// `recipient` is the route parameter carried from the greeting screen's
/// state at navigation time. It is view-local, consumed once here at
/// construction and never pushed into the store.
pub struct MessageScreen {
    store: StateStore<MessageReducer>,
    recipient: String,
}

impl MessageScreen {
    pub fn new(recipient: String) -> Self {
        Self {
            store: StateStore::default(),
            recipient,
        }
    }

    pub fn state(&self) -> &MessageState {
        self.store.state()
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Mutable access to the store, for observers that want the stream.
    pub fn store_mut(&mut self) -> &mut StateStore<MessageReducer> {
        &mut self.store
    }

    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        let [message, from] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(2)])
                .flex(Flex::Center)
                .areas(area);

        frame.render_widget(
            Paragraph::new(self.state().message.clone())
                .alignment(Alignment::Center)
                .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
            message,
        );
        frame.render_widget(
            Paragraph::new(format!("for {}", self.recipient))
                .alignment(Alignment::Center)
                .style(Style::default().fg(HINT_TEXT)),
            from,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_consumes_the_route_param() {
        let screen = MessageScreen::new("John".to_string());
        assert_eq!(screen.recipient(), "John");
        // The param stays out of the state.
        assert_eq!(screen.state().message, "message");
    }

    #[test]
    fn state_never_changes_without_intents() {
        let mut screen = MessageScreen::new(String::new());
        let rx = screen.store_mut().subscribe();

        assert_eq!(rx.try_recv().unwrap().message, "message");
        // No dispatch can happen: MessageIntent has no constructible value.
        assert!(rx.try_recv().is_err());
        assert_eq!(screen.state().message, "message");
    }
}
