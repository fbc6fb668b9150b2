//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. `GameState` asserts them in debug builds; tests check them directly.

use super::{Cell, GameState, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the move counter equals the number of occupied cells.
pub struct MoveCountMatchesBoard;

impl Invariant<GameState> for MoveCountMatchesBoard {
    fn holds(state: &GameState) -> bool {
        usize::from(state.move_count()) == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count equals number of occupied cells"
    }
}

/// Invariant: every recorded move is still on the board, owned by its mover.
///
/// Together with the count check this means no cell was ever overwritten.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(state: &GameState) -> bool {
        state.history().len() == usize::from(state.move_count())
            && state
                .history()
                .iter()
                .all(|mov| state.board().get(mov.position) == Cell::Occupied(mov.player))
    }

    fn description() -> &'static str {
        "History matches the marks on the board"
    }
}

/// Invariant: players alternate, starting with Player 1.
pub struct AlternatingTurns;

impl Invariant<GameState> for AlternatingTurns {
    fn holds(state: &GameState) -> bool {
        state.history().iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::One } else { Player::Two };
            mov.player == expected
        })
    }

    fn description() -> &'static str {
        "Players alternate starting with Player 1"
    }
}

/// All invariants checked after each accepted move.
pub type GameInvariants = (MoveCountMatchesBoard, HistoryConsistent, AlternatingTurns);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert_eq!(GameInvariants::check_all(&GameState::new()), Ok(()));
    }

    #[test]
    fn test_holds_through_a_game() {
        let mut state = GameState::new();
        for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2)] {
            state.apply_move(row, col).expect("legal move");
            assert!(MoveCountMatchesBoard::holds(&state));
            assert!(HistoryConsistent::holds(&state));
            assert!(AlternatingTurns::holds(&state));
            state.advance_turn();
        }
    }

    #[test]
    fn test_turn_skip_detected() {
        let mut state = GameState::new();
        state.apply_move(0, 0).expect("legal move");
        // Forgetting to advance the turn lets Player 1 move twice.
        state.apply_move(1, 1).expect("legal move");
        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, AlternatingTurns::description());
    }
}
