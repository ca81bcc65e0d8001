//! About screen: project name, version, author and description.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::instrument;

use crate::tui::screen::{Screen, ScreenTransition};
use crate::{PROJECT_NAME, about_text};

/// Static about page.
#[derive(Debug, Default)]
pub struct AboutScreen;

impl AboutScreen {
    /// Creates the about screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for AboutScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(3)])
            .split(frame.area());

        let body = Paragraph::new(about_text())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(PROJECT_NAME)
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            );
        frame.render_widget(body, chunks[0]);

        let help = Paragraph::new("Enter/Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace => ScreenTransition::GoToStart,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
