//! Game state: board, turn and move counter.

use super::action::{Move, MoveError};
use super::board::Board;
use super::invariants::{GameInvariants, InvariantSet};
use super::lines::{self, Line};
use super::position::Position;
use super::types::{Cell, Outcome, Player};
use tracing::{debug, instrument, warn};

/// Number of moves that fill the board.
pub const MAX_MOVES: u8 = 9;

/// Complete game state.
///
/// The board is only mutated through [`GameState::apply_move`]; the turn only
/// through [`GameState::advance_turn`]. A move loop looks like:
///
/// ```
/// use tictac_game::{GameState, Outcome};
///
/// let mut game = GameState::new();
/// for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
///     game.apply_move(row, col).expect("legal move");
///     match game.evaluate() {
///         Outcome::InProgress => game.advance_turn(),
///         outcome => {
///             assert_eq!(outcome.to_string(), "Player 1 wins");
///             break;
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    move_count: u8,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with Player 1 to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::One,
            move_count: 0,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the number of accepted moves.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Does not change the turn; call [`GameState::evaluate`] and then
    /// [`GameState::advance_turn`] if the game continues.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the state untouched if the cell is
    /// off the board, already occupied, or the game is over.
    #[instrument(skip(self), fields(turn = %self.turn, move_count = self.move_count))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Position, MoveError> {
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;

        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(position) {
            return Err(MoveError::Occupied(position));
        }

        self.board.set(position, Cell::Occupied(self.turn));
        self.move_count += 1;
        self.history.push(Move::new(self.turn, position));
        debug!(%position, move_count = self.move_count, "Move accepted");

        if cfg!(debug_assertions) {
            if let Err(violations) = GameInvariants::check_all(self) {
                warn!(?violations, "Invariant violated after move");
            }
        }

        Ok(position)
    }

    /// Evaluates the board for the player who just moved.
    ///
    /// Only the current turn's lines are checked, in order rows, columns,
    /// diagonals. Call this before [`GameState::advance_turn`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn evaluate(&self) -> Outcome {
        if let Some(line) = lines::completed_by(&self.board, self.turn) {
            debug!(%line, "Winning line");
            return Outcome::Win(self.turn);
        }

        if self.move_count == MAX_MOVES {
            return Outcome::Draw;
        }

        Outcome::InProgress
    }

    /// Hands the turn to the other player.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Returns true once either player holds a line or the board is full.
    pub fn is_over(&self) -> bool {
        self.board.is_full() || lines::winner(&self.board).is_some()
    }

    /// Returns the line `player` has completed, if any.
    pub fn winning_line(&self, player: Player) -> Option<Line> {
        lines::completed_by(&self.board, player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
