//! Ending screen: announces the match winner and asks what comes next.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::tui::screen::{Screen, ScreenTransition};

const WON_MESSAGE: &str = "Congratulations! You have won. :D";
const LOST_MESSAGE: &str = "Oops! You have lost this game. :(";

/// Which question the ending screen is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingStage {
    /// "Do you want to play again ?"
    AskReplay,
    /// "Do you want to exit this game ?"
    AskExit,
}

impl EndingStage {
    fn question(self) -> &'static str {
        match self {
            EndingStage::AskReplay => "Do you want to play again ?",
            EndingStage::AskExit => "Do you want to exit this game ?",
        }
    }
}

/// State for the ending screen.
#[derive(Debug)]
pub struct EndingScreen {
    human_won: bool,
    stage: EndingStage,
}

impl EndingScreen {
    /// Creates the ending screen for a finished match.
    #[instrument]
    pub fn new(human_won: bool) -> Self {
        Self {
            human_won,
            stage: EndingStage::AskReplay,
        }
    }

    /// Returns the winner announcement.
    pub fn message(&self) -> &'static str {
        if self.human_won { WON_MESSAGE } else { LOST_MESSAGE }
    }

    /// Returns the question currently asked.
    pub fn stage(&self) -> EndingStage {
        self.stage
    }
}

impl Screen for EndingScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let color = if self.human_won { Color::Green } else { Color::Red };
        let banner = Paragraph::new(self.message())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Game Over"));
        frame.render_widget(banner, chunks[0]);

        let question = Paragraph::new(self.stage.question())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(question, chunks[1]);

        let help = Paragraph::new("y: Yes | n: No")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key), fields(stage = ?self.stage))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        let yes = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => true,
            KeyCode::Char('n') | KeyCode::Char('N') => false,
            KeyCode::Esc => return ScreenTransition::Quit,
            _ => return ScreenTransition::Stay,
        };

        match (self.stage, yes) {
            (EndingStage::AskReplay, true) => ScreenTransition::Replay,
            (EndingStage::AskReplay, false) => {
                debug!("Replay declined");
                self.stage = EndingStage::AskExit;
                ScreenTransition::Stay
            }
            (EndingStage::AskExit, true) => ScreenTransition::Quit,
            (EndingStage::AskExit, false) => ScreenTransition::Replay,
        }
    }
}
