//! The game loop's decision logic, independent of any window.
//!
//! A [`Session`] consumes [`InputEvent`]s one at a time and tells the caller
//! what to do next through a [`Step`].

use crate::input::{InputEvent, InputMapper, PointerButton};
use tictac_game::{GameState, MoveError, Outcome, Position};
use tracing::{debug, info, instrument};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player closed the window.
    Quit,
    /// Someone won or the board filled up.
    GameOver(Outcome),
}

impl Ending {
    /// The line printed to the console when the loop stops.
    pub fn announcement(&self) -> String {
        match self {
            Ending::Quit => "Quit".to_string(),
            Ending::GameOver(Outcome::Draw) => "It's a draw!".to_string(),
            Ending::GameOver(Outcome::Win(player)) => format!("{player} wins!"),
            Ending::GameOver(Outcome::InProgress) => "Game in progress".to_string(),
        }
    }
}

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Not a move: wrong button, release, or the session already ended.
    Ignored,
    /// A click on a cell that cannot be played. Nothing changed.
    Rejected(MoveError),
    /// A mark was placed and the turn passed to the other player.
    Moved(Position),
    /// The loop must stop.
    Finished(Ending),
}

impl Step {
    /// True when the board changed and the frame must be repainted.
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Step::Moved(_) | Step::Finished(Ending::GameOver(_)))
    }
}

/// One game from first click to quit or game over.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    mapper: InputMapper,
    ending: Option<Ending>,
}

impl Session {
    /// Starts a fresh game on a canvas handled by `mapper`.
    pub fn new(mapper: InputMapper) -> Self {
        Self {
            state: GameState::new(),
            mapper,
            ending: None,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// How the session ended, once it has.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// True after a quit or a terminal outcome.
    pub fn is_finished(&self) -> bool {
        self.ending.is_some()
    }

    /// Handles one input event.
    #[instrument(level = "trace", skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> Step {
        if self.is_finished() {
            return Step::Ignored;
        }

        match event {
            InputEvent::Quit => {
                info!("Quit");
                self.finish(Ending::Quit)
            }
            InputEvent::Pointer {
                button: PointerButton::Primary,
                pressed: true,
                x,
                y,
            } => self.click(x, y),
            InputEvent::Pointer { .. } => Step::Ignored,
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn click(&mut self, x: f32, y: f32) -> Step {
        let (row, col) = self.mapper.cell_at(x, y);

        let placed = match self.state.apply_move(row, col) {
            Ok(position) => position,
            Err(err) => {
                debug!(%err, row, col, "Move rejected");
                return Step::Rejected(err);
            }
        };

        let outcome = self.state.evaluate();
        if !outcome.is_terminal() {
            self.state.advance_turn();
            return Step::Moved(placed);
        }

        let line = outcome
            .winner()
            .and_then(|player| self.state.winning_line(player));
        info!(
            %outcome,
            ?line,
            moves = self.state.move_count(),
            board = %self.state.board().display(),
            "Game over"
        );
        self.finish(Ending::GameOver(outcome))
    }

    #[instrument(skip(self))]
    fn finish(&mut self, ending: Ending) -> Step {
        self.ending = Some(ending);
        Step::Finished(ending)
    }
}
