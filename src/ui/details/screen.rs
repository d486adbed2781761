//! Rendering for the details screen.

use crate::ui::mvi::StateStore;
use crate::ui::theme::{ACCENT, HEADER_TEXT};
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::reducer::DetailsReducer;
use super::state::DetailsState;

/// The details screen. Captures the date when it is entered.
pub struct DetailsScreen {
    store: StateStore<DetailsReducer>,
}

impl Default for DetailsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailsScreen {
    pub fn new() -> Self {
        Self {
            store: StateStore::new(DetailsState::captured_now()),
        }
    }

    pub fn state(&self) -> &DetailsState {
        self.store.state()
    }

    /// Mutable access to the store, for observers that want the stream.
    pub fn store_mut(&mut self) -> &mut StateStore<DetailsReducer> {
        &mut self.store
    }

    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        let [heading, date] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);

        frame.render_widget(
            Paragraph::new("Current Date")
                .alignment(Alignment::Center)
                .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            heading,
        );
        frame.render_widget(
            Paragraph::new(self.state().current_date.clone())
                .alignment(Alignment::Center)
                .style(Style::default().fg(HEADER_TEXT)),
            date,
        );
    }
}
