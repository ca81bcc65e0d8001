//! Playground screen where rounds are chosen, revealed and scored.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_rps::{MatchState, Move, RoundResult, Scores, Seat, Side};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};

const CHOOSE_PROMPT: &str = "Choose your move";
const NO_SELECTION: &str = "Please choose a valid move";

/// Whether the screen is taking input or showing a round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to pick and submit.
    Choosing,
    /// A submitted round is being revealed.
    Waiting,
}

/// Colour family of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Plain informational text.
    Neutral,
    /// Input problem.
    Warning,
    /// Round won by whoever sits on this side.
    Won(Side),
    /// Round tied.
    Tie,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Neutral => Color::White,
            Tone::Warning => Color::Red,
            Tone::Won(side) => side_color(side),
            Tone::Tie => Color::Yellow,
        }
    }
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Left => Color::Cyan,
        Side::Right => Color::Green,
    }
}

/// State for the playground.
#[derive(Debug, Getters)]
pub struct PlaygroundScreen {
    /// Pane the human sits in.
    human_side: Side,
    /// Score after the last resolved round.
    scores: Scores,
    /// Wins needed to take the match.
    target_rounds: u32,
    /// Move highlighted in the selector.
    selection: Option<Move>,
    /// Move the human submitted this round.
    human_move: Option<Move>,
    /// Move the computer revealed this round.
    computer_move: Option<Move>,
    /// Text of the status line.
    status: String,
    /// Colour family of the status line.
    tone: Tone,
    /// Whether input is accepted.
    phase: Phase,
}

impl PlaygroundScreen {
    /// Creates the playground for a freshly started match.
    #[instrument(skip(game), fields(target = game.target_rounds(), computer_side = %game.computer_side()))]
    pub fn new(game: &MatchState) -> Self {
        Self {
            human_side: game.human_side(),
            scores: game.scores(),
            target_rounds: game.target_rounds(),
            selection: None,
            human_move: None,
            computer_move: None,
            status: CHOOSE_PROMPT.to_string(),
            tone: Tone::Neutral,
            phase: Phase::Choosing,
        }
    }

    /// Locks in the human move and starts the reveal.
    #[instrument(skip(self))]
    pub fn begin_reveal(&mut self, human: Move) {
        self.human_move = Some(human);
        self.computer_move = None;
        self.phase = Phase::Waiting;
        self.status = format!("You chose {human}. Waiting for the computer...");
        self.tone = Tone::Neutral;
    }

    /// Shows the computer's move.
    #[instrument(skip(self))]
    pub fn reveal_computer(&mut self, computer: Move) {
        self.computer_move = Some(computer);
        self.status = format!("Computer chose {computer}");
    }

    /// Shows the round verdict and the updated score.
    #[instrument(skip(self, result, game), fields(round = result.round()))]
    pub fn show_result(&mut self, result: &RoundResult, game: &MatchState) {
        self.scores = result.scores();
        self.status = result.cause().to_string();
        self.tone = match result.outcome().winner() {
            None => Tone::Tie,
            Some(Seat::First) => Tone::Won(game.human_side()),
            Some(Seat::Second) => Tone::Won(game.computer_side()),
        };
        self.selection = None;
        self.phase = Phase::Choosing;
        debug!(scores = %self.scores, tone = ?self.tone, "Round shown");
    }

    fn side_label(&self, side: Side) -> &'static str {
        if side == self.human_side {
            "You"
        } else {
            "Computer"
        }
    }

    fn move_on(&self, side: Side) -> Option<Move> {
        if side == self.human_side {
            self.human_move
        } else {
            self.computer_move
        }
    }

    fn step_selection(&mut self, forward: bool) {
        let count = Move::ALL.len();
        let idx = match self.selection {
            None if forward => 0,
            None => count - 1,
            Some(mv) => {
                let current = Move::ALL.iter().position(|m| *m == mv).unwrap_or(0);
                if forward {
                    (current + 1) % count
                } else {
                    (current + count - 1) % count
                }
            }
        };
        self.select(Move::ALL[idx]);
    }

    fn select(&mut self, mv: Move) {
        self.selection = Some(mv);
        if self.tone == Tone::Warning {
            self.status = CHOOSE_PROMPT.to_string();
            self.tone = Tone::Neutral;
        }
    }

    #[instrument(skip(self))]
    fn submit(&mut self) -> ScreenTransition {
        match self.selection {
            Some(mv) => {
                info!(human_move = %mv, "Move submitted");
                ScreenTransition::SubmitMove(mv)
            }
            None => {
                self.status = NO_SELECTION.to_string();
                self.tone = Tone::Warning;
                ScreenTransition::Stay
            }
        }
    }

    fn render_pane(&self, frame: &mut Frame, area: Rect, side: Side) {
        let color = side_color(side);
        let glyph = self
            .move_on(side)
            .map(|mv| format!("{}  {}", mv.glyph(), mv))
            .unwrap_or_else(|| "?".to_string());

        let pane = Paragraph::new(Line::from(Span::styled(
            glyph,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.side_label(side))
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(pane, area);
    }

    fn render_scores(&self, frame: &mut Frame, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let boxes = [
            ("YOUR SCORE", self.scores.get(Seat::First), side_color(self.human_side)),
            (
                "COMPUTER'S SCORE",
                self.scores.get(Seat::Second),
                side_color(self.human_side.opposite()),
            ),
            ("TOTAL", self.target_rounds, Color::White),
        ];
        for ((title, value, color), col) in boxes.into_iter().zip(cols.iter()) {
            let widget = Paragraph::new(value.to_string())
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(widget, *col);
        }
    }

    fn render_selector(&self, frame: &mut Frame, area: Rect) {
        let spans: Vec<Span> = Move::ALL
            .iter()
            .flat_map(|mv| {
                let label = format!(" {} {} ", mv.glyph(), mv);
                let style = if self.selection == Some(*mv) {
                    Style::default().bg(Color::White).fg(Color::Black)
                } else {
                    Style::default().fg(Color::Gray)
                };
                [Span::styled(label, style), Span::raw("  ")]
            })
            .collect();

        let selector = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Your move"));
        frame.render_widget(selector, area);
    }
}

impl Screen for PlaygroundScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Min(5),    // Panes
                Constraint::Length(3), // Scores
                Constraint::Length(3), // Selector
                Constraint::Length(3), // Help
            ])
            .split(frame.area());

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(self.tone.color()).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[0]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.render_pane(frame, panes[0], Side::Left);
        self.render_pane(frame, panes[1], Side::Right);

        self.render_scores(frame, chunks[2]);
        self.render_selector(frame, chunks[3]);

        let help = Paragraph::new(
            "←→/r/p/s: Select | c: CLEAR SELECTION | Enter: SUBMIT | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if let KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc = key.code {
            return ScreenTransition::Quit;
        }
        if self.phase == Phase::Waiting {
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Left | KeyCode::Up => self.step_selection(false),
            KeyCode::Right | KeyCode::Down => self.step_selection(true),
            KeyCode::Char('r') | KeyCode::Char('R') => self.select(Move::Rock),
            KeyCode::Char('p') | KeyCode::Char('P') => self.select(Move::Paper),
            KeyCode::Char('s') | KeyCode::Char('S') => self.select(Move::Scissor),
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Backspace => {
                self.selection = None;
            }
            KeyCode::Enter => return self.submit(),
            _ => {}
        }
        ScreenTransition::Stay
    }
}
