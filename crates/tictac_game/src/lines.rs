//! Win detection over the eight winning lines.

use super::board::Board;
use super::position::Position;
use super::types::{Cell, Player};
use derive_more::Display;
use tracing::instrument;

/// One of the eight lines that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("center column")]
    CenterColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Every line, in checking order: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::Diagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Returns true if all three cells hold `player`'s mark.
    pub fn is_held_by(self, board: &Board, player: Player) -> bool {
        self.positions()
            .iter()
            .all(|pos| board.get(*pos) == Cell::Occupied(player))
    }
}

/// Returns the first line completed by `player`, if any.
#[instrument(skip(board))]
pub fn completed_by(board: &Board, player: Player) -> Option<Line> {
    Line::ALL
        .into_iter()
        .find(|line| line.is_held_by(board, player))
}

/// Checks for a winner on the board, regardless of whose turn it is.
pub fn winner(board: &Board) -> Option<(Player, Line)> {
    [Player::One, Player::Two]
        .into_iter()
        .find_map(|player| completed_by(board, player).map(|line| (player, line)))
}
