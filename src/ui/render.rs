//! Frame composition: header, active screen body, footer.

use crate::ui::app::App;
use crate::ui::layout::layout_regions;
use crate::ui::navigation::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let screen = app.screen();

    // Header: the active screen's title, centered like a top app bar.
    frame.render_widget(
        Paragraph::new(screen.title())
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        header,
    );

    frame.render_widget(Clear, body);
    match screen {
        Screen::Greeting(greeting) => greeting.draw(frame, body),
        Screen::Message(message) => message.draw(frame, body),
        Screen::Details(details) => details.draw(frame, body),
    }

    // Footer: per-screen key hints left, version right.
    let hints = screen.key_hints();
    let version = format!("v{} ", VERSION);
    // Pad by char count, not byte count.
    let padding = (footer.width as usize)
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());
    let hint_style = Style::default().fg(HINT_TEXT);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(hints, hint_style),
            Span::styled(" ".repeat(padding), hint_style),
            Span::styled(version, hint_style),
        ]))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        footer,
    );
}
