//! Start screen: ABOUT / PLAY / EXIT menu.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{info, instrument};

use crate::PROJECT_NAME;
use crate::tui::screen::{Screen, ScreenTransition};

/// Menu options available on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
enum StartOption {
    About,
    Play,
    Exit,
}

impl StartOption {
    fn transition(self) -> ScreenTransition {
        match self {
            Self::About => ScreenTransition::GoToAbout,
            Self::Play => ScreenTransition::GoToRoundsPrompt,
            Self::Exit => ScreenTransition::Quit,
        }
    }
}

/// State for the start screen.
#[derive(Debug)]
pub struct StartScreen {
    list_state: ListState,
}

impl StartScreen {
    /// Creates the start screen with PLAY highlighted.
    #[instrument]
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(1));
        Self { list_state: state }
    }

    /// Moves selection up.
    #[instrument(skip(self))]
    fn select_previous(&mut self) {
        let count = StartOption::iter().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    #[instrument(skip(self))]
    fn select_next(&mut self) {
        let count = StartOption::iter().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected menu option.
    #[instrument(skip(self))]
    fn selected_option(&self) -> StartOption {
        let idx = self.list_state.selected().unwrap_or(1);
        StartOption::iter().nth(idx).unwrap_or(StartOption::Play)
    }
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for StartScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(PROJECT_NAME)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = StartOption::iter()
            .map(|opt| ListItem::new(opt.to_string()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | a/p/q: About/Play/Exit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Start option selected");
                option.transition()
            }
            KeyCode::Char('a') | KeyCode::Char('A') => ScreenTransition::GoToAbout,
            KeyCode::Char('p') | KeyCode::Char('P') => ScreenTransition::GoToRoundsPrompt,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
