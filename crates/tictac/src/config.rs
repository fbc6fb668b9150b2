//! Game configuration.
//!
//! There is no config file and no command line: every value here is fixed at
//! build time and threaded from `main` into the loader and the window.

use derive_getters::Getters;
use std::path::PathBuf;

/// Side length of the square canvas, in points.
pub const CANVAS_EXTENT: u32 = 600;

/// Piece image for Player 1, relative to the working directory.
pub const PLAYER_ONE_PIECE: &str = "assets/piece1.png";

/// Piece image for Player 2, relative to the working directory.
pub const PLAYER_TWO_PIECE: &str = "assets/piece2.png";

/// Window and asset settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameConfig {
    /// Window title.
    title: String,
    /// Side length of the square canvas.
    canvas_extent: u32,
    /// Piece image paths, Player 1 first.
    piece_paths: [PathBuf; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Tic Tac Toe".to_string(),
            canvas_extent: CANVAS_EXTENT,
            piece_paths: [PLAYER_ONE_PIECE.into(), PLAYER_TWO_PIECE.into()],
        }
    }
}
