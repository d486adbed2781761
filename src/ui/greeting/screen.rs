//! Rendering and key handling for the greeting screen.

use crate::ui::mvi::StateStore;
use crate::ui::navigation::{NavRequest, Route};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HINT_TEXT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::intent::GreetingIntent;
use super::reducer::GreetingReducer;
use super::state::GreetingState;

const FIELD_WIDTH: u16 = 48;

/// The start screen: name entry plus navigation to the other screens.
///
/// Owns the greeting state container for as long as the screen is on the
/// navigation stack. Every edit goes through `dispatch`, never through
/// direct mutation.
pub struct GreetingScreen {
    store: StateStore<GreetingReducer>,
}

impl Default for GreetingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingScreen {
    pub fn new() -> Self {
        Self {
            store: StateStore::default(),
        }
    }

    pub fn state(&self) -> &GreetingState {
        self.store.state()
    }

    /// Mutable access to the store, for observers that want the stream.
    pub fn store_mut(&mut self) -> &mut StateStore<GreetingReducer> {
        &mut self.store
    }

    /// Handle a key press, possibly producing a navigation request.
    ///
    /// Quit and back keys are routed globally before this is called.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NavRequest> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('d') => Some(NavRequest::Push(Route::Details)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(NavRequest::Push(Route::Message {
                name: self.state().name.clone(),
            })),
            KeyCode::Backspace => {
                let mut name = self.state().name.clone();
                name.pop();
                self.update_name(name);
                None
            }
            KeyCode::Char(ch) => {
                let mut name = self.state().name.clone();
                name.push(ch);
                self.update_name(name);
                None
            }
            _ => None,
        }
    }

    fn update_name(&mut self, name: String) {
        self.store.dispatch(GreetingIntent::UpdateName(name));
    }

    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        let [column] = Layout::horizontal([Constraint::Length(FIELD_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [greeting, field] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(3)])
                .flex(Flex::Center)
                .areas(column);

        let state = self.state();
        frame.render_widget(
            Paragraph::new(state.greeting_message.clone())
                .alignment(Alignment::Center)
                .style(Style::default().fg(ACCENT)),
            greeting,
        );
        frame.render_widget(
            Paragraph::new(state.name.clone()).block(
                Block::default()
                    .title("Enter your name")
                    .title_style(Style::default().fg(HINT_TEXT))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
            field,
        );

        // Place the cursor after the last typed character, clamped to the
        // field's inner width.
        if field.width > 2 && field.height > 2 {
            let inner_width = field.width - 2;
            let cursor_col = (state.name.chars().count() as u16).min(inner_width - 1);
            frame.set_cursor_position((field.x + 1 + cursor_col, field.y + 1));
        }
    }
}
