//! Pure tic-tac-toe game logic.
//!
//! - [`GameState`] owns the board, the player to move and the move counter.
//! - [`lines`] enumerates the eight winning lines.
//! - [`invariants`] states the properties every accepted move preserves.
//!
//! Nothing here knows about windows, pixels or textures.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod invariants;
pub mod lines;
mod position;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, SIZE};
pub use lines::Line;
pub use position::Position;
pub use state::{GameState, MAX_MOVES};
pub use types::{Cell, Outcome, Player};
