//! Round-count prompt: asks how many wins take the match.

use crossterm::event::{KeyCode, KeyEvent};
use derive_more::Display;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::tui::screen::{Screen, ScreenTransition};

/// Longest input accepted by the prompt.
const MAX_INPUT_LEN: usize = 12;

/// Why the typed round count was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RoundsInputError {
    /// Not an integer at all, or too large to represent.
    #[display("Please enter a valid positive integer number.")]
    NotANumber,
    /// Zero or negative.
    #[display("Please enter a positive integer number.")]
    NotPositive,
}

impl std::error::Error for RoundsInputError {}

/// Parses the text typed into the round-count prompt.
#[instrument]
pub fn parse_rounds(input: &str) -> Result<u32, RoundsInputError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| RoundsInputError::NotANumber)?;

    if value <= 0 {
        return Err(RoundsInputError::NotPositive);
    }
    u32::try_from(value).map_err(|_| RoundsInputError::NotANumber)
}

/// State for the round-count prompt.
#[derive(Debug, Default)]
pub struct RoundsScreen {
    input: String,
    error: Option<RoundsInputError>,
}

impl RoundsScreen {
    /// Creates the prompt, optionally pre-filled.
    #[instrument]
    pub fn new(prefill: Option<u32>) -> Self {
        Self {
            input: prefill.map(|n| n.to_string()).unwrap_or_default(),
            error: None,
        }
    }

    /// Returns the current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the last validation error, if any.
    pub fn error(&self) -> Option<RoundsInputError> {
        self.error
    }

    #[instrument(skip(self), fields(input = %self.input))]
    fn submit(&mut self) -> ScreenTransition {
        match parse_rounds(&self.input) {
            Ok(target_rounds) => {
                info!(target_rounds, "Round count accepted");
                self.error = None;
                ScreenTransition::StartMatch { target_rounds }
            }
            Err(e) => {
                warn!(error = %e, "Round count rejected");
                self.error = Some(e);
                self.input.clear();
                ScreenTransition::Stay
            }
        }
    }
}

impl Screen for RoundsScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let label = Paragraph::new("NUMBER OF ROUNDS")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(label, chunks[0]);

        let input = Paragraph::new(format!("{}_", self.input))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(input, chunks[1]);

        if let Some(error) = self.error {
            let message = Paragraph::new(error.to_string())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Invalid Data"));
            frame.render_widget(message, chunks[2]);
        }

        let help = Paragraph::new("Enter: NEXT | Esc: BACK")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => ScreenTransition::GoToStart,
            KeyCode::Backspace => {
                self.input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if !c.is_control() && self.input.len() < MAX_INPUT_LEN => {
                self.input.push(c);
                debug!(input = %self.input, "Prompt input updated");
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_parse_rounds() {
        assert_eq!(parse_rounds("3"), Ok(3));
        assert_eq!(parse_rounds(" 12\n"), Ok(12));
        assert_eq!(parse_rounds("three"), Err(RoundsInputError::NotANumber));
        assert_eq!(parse_rounds(""), Err(RoundsInputError::NotANumber));
        assert_eq!(parse_rounds("0"), Err(RoundsInputError::NotPositive));
        assert_eq!(parse_rounds("-4"), Err(RoundsInputError::NotPositive));
        assert_eq!(parse_rounds("99999999999"), Err(RoundsInputError::NotANumber));
    }

    #[test]
    fn test_submit_valid_input() {
        let mut screen = RoundsScreen::new(None);
        screen.handle_key(press(KeyCode::Char('5')));
        assert_eq!(
            screen.handle_key(press(KeyCode::Enter)),
            ScreenTransition::StartMatch { target_rounds: 5 }
        );
    }

    #[test]
    fn test_invalid_input_clears_and_reports() {
        let mut screen = RoundsScreen::new(None);
        screen.handle_key(press(KeyCode::Char('x')));
        assert_eq!(screen.handle_key(press(KeyCode::Enter)), ScreenTransition::Stay);
        assert_eq!(screen.error(), Some(RoundsInputError::NotANumber));
        assert_eq!(screen.input(), "");
    }

    #[test]
    fn test_prefill_and_backspace() {
        let mut screen = RoundsScreen::new(Some(42));
        assert_eq!(screen.input(), "42");
        screen.handle_key(press(KeyCode::Backspace));
        assert_eq!(screen.input(), "4");
    }

    #[test]
    fn test_escape_goes_back() {
        let mut screen = RoundsScreen::new(None);
        assert_eq!(screen.handle_key(press(KeyCode::Esc)), ScreenTransition::GoToStart);
    }
}
