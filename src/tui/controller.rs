//! Game controller: the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use strictly_rps::{MatchState, Move, Seat};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;
use crate::players::Player;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{
    AboutScreen, EndingScreen, PlaygroundScreen, RoundsScreen, StartScreen,
};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Start(StartScreen),
    About(AboutScreen),
    Rounds(RoundsScreen),
    Playground(PlaygroundScreen),
    Ending(EndingScreen),
}

/// Which screen the controller is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Start menu.
    Start,
    /// About page.
    About,
    /// Round-count prompt.
    Rounds,
    /// Match in progress.
    Playground,
    /// Match over.
    Ending,
}

impl ActiveScreen {
    fn kind(&self) -> ScreenKind {
        match self {
            ActiveScreen::Start(_) => ScreenKind::Start,
            ActiveScreen::About(_) => ScreenKind::About,
            ActiveScreen::Rounds(_) => ScreenKind::Rounds,
            ActiveScreen::Playground(_) => ScreenKind::Playground,
            ActiveScreen::Ending(_) => ScreenKind::Ending,
        }
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Start(s) => s,
            ActiveScreen::About(s) => s,
            ActiveScreen::Rounds(s) => s,
            ActiveScreen::Playground(s) => s,
            ActiveScreen::Ending(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Start(s) => s,
            ActiveScreen::About(s) => s,
            ActiveScreen::Rounds(s) => s,
            ActiveScreen::Playground(s) => s,
            ActiveScreen::Ending(s) => s,
        }
    }
}

/// Controller that owns the match and drives screen transitions.
///
/// The human always plays [`Seat::First`]; `opponent` picks the moves for
/// [`Seat::Second`]. Call [`GameController::run`] to start the event loop,
/// or feed keys through [`GameController::handle_key`] directly.
pub struct GameController {
    config: GameConfig,
    opponent: Box<dyn Player>,
    game: Option<MatchState>,
    screen: ActiveScreen,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("config", &self.config)
            .field("opponent", &self.opponent.name())
            .field("game", &self.game)
            .field("screen", &self.screen)
            .finish()
    }
}

impl GameController {
    /// Creates a controller showing the start screen.
    #[instrument(skip(config, opponent), fields(opponent = opponent.name()))]
    pub fn new(config: GameConfig, opponent: Box<dyn Player>) -> Self {
        info!("Creating GameController");
        Self {
            config,
            opponent,
            game: None,
            screen: ActiveScreen::Start(StartScreen::new()),
        }
    }

    /// Returns the current match, if one has been started.
    pub fn game(&self) -> Option<&MatchState> {
        self.game.as_ref()
    }

    /// Returns which screen is showing.
    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Returns the playground when it is showing.
    pub fn playground(&self) -> Option<&PlaygroundScreen> {
        match &self.screen {
            ActiveScreen::Playground(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the ending screen when it is showing.
    pub fn ending(&self) -> Option<&EndingScreen> {
        match &self.screen {
            ActiveScreen::Ending(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the current screen.
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        terminal.draw(|f| self.screen.as_screen().render(f))?;
        Ok(())
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game event loop");

        loop {
            self.draw(terminal)?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // crossterm reports both press and release on some platforms.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(terminal, key).await? {
                    info!("Game quitting");
                    return Ok(());
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Routes a key to the active screen and applies the resulting transition.
    ///
    /// Returns `Ok(false)` once the user has asked to quit. Engine misuse is
    /// returned as an error.
    #[instrument(skip(self, terminal, key), fields(screen = ?self.screen.kind(), code = ?key.code))]
    pub async fn handle_key<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        key: KeyEvent,
    ) -> anyhow::Result<bool>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        let transition = self.screen.as_screen_mut().handle_key(key);
        self.apply_transition(terminal, transition).await
    }

    #[instrument(skip(self, terminal))]
    async fn apply_transition<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        transition: ScreenTransition,
    ) -> anyhow::Result<bool>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoToStart => {
                self.screen = ActiveScreen::Start(StartScreen::new());
            }
            ScreenTransition::GoToAbout => {
                self.screen = ActiveScreen::About(AboutScreen::new());
            }
            ScreenTransition::GoToRoundsPrompt => {
                self.screen = ActiveScreen::Rounds(RoundsScreen::new(*self.config.default_rounds()));
            }
            ScreenTransition::StartMatch { target_rounds } => {
                let game = MatchState::start(target_rounds)?;
                self.screen = ActiveScreen::Playground(PlaygroundScreen::new(&game));
                self.game = Some(game);
            }
            ScreenTransition::SubmitMove(mv) => {
                self.play_round(terminal, mv).await?;
            }
            ScreenTransition::Replay => match &self.game {
                Some(previous) => {
                    let game = previous.restart();
                    self.screen = ActiveScreen::Playground(PlaygroundScreen::new(&game));
                    self.game = Some(game);
                }
                None => {
                    warn!("Replay requested without a previous match");
                    self.screen = ActiveScreen::Start(StartScreen::new());
                }
            },
            ScreenTransition::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Plays one round: records the human move, reveals the opponent's
    /// move and the verdict with pauses in between, then checks for the end.
    #[instrument(skip(self, terminal))]
    async fn play_round<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        human: Move,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        let game = self
            .game
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Move submitted without an active match"))?;
        game.set_move(Seat::First, human)?;
        if let ActiveScreen::Playground(s) = &mut self.screen {
            s.begin_reveal(human);
        }
        self.draw(terminal)?;
        sleep(self.config.reveal_delay()).await;

        let game = self
            .game
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Match disappeared mid-round"))?;
        let computer = self.opponent.choose(game);
        game.set_move(Seat::Second, computer)?;
        if let ActiveScreen::Playground(s) = &mut self.screen {
            s.reveal_computer(computer);
        }
        self.draw(terminal)?;
        sleep(self.config.verdict_delay()).await;

        let game = self
            .game
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Match disappeared mid-round"))?;
        let result = game.resolve_round()?;
        info!(
            round = result.round(),
            human_move = %human,
            computer_move = %computer,
            outcome = %result.outcome(),
            scores = %result.scores(),
            "Round resolved"
        );
        let winner = game.winner();
        if let ActiveScreen::Playground(s) = &mut self.screen {
            s.show_result(&result, game);
        }
        self.draw(terminal)?;

        if let Some(winner) = winner {
            info!(winner = %winner, "Showing ending screen");
            sleep(self.config.ending_delay()).await;
            self.screen = ActiveScreen::Ending(EndingScreen::new(winner == Seat::First));
        }
        Ok(())
    }
}
