//! Two-player tic-tac-toe in a native window.
//!
//! # Architecture
//!
//! - **Session**: the event loop's decisions (click → move → outcome)
//! - **InputMapper**: canvas pixels to board cells
//! - **BoardRenderer**: full-frame repaint onto a [`Surface`]
//! - **Assets**: concurrent piece image decoding and texture upload
//! - **App**: the eframe window tying it together
//!
//! Game rules live in the `tictac_game` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod assets;
mod config;
mod error;
mod input;
mod render;
mod session;

// Crate-level exports - Window
pub use app::{TicTacApp, run};

// Crate-level exports - Asset loading
pub use assets::{DecodedPieces, PieceImage, PieceTextures, load_pieces, load_pieces_blocking};

// Crate-level exports - Configuration
pub use config::{CANVAS_EXTENT, GameConfig, PLAYER_ONE_PIECE, PLAYER_TWO_PIECE};

// Crate-level exports - Errors
pub use error::StartupError;

// Crate-level exports - Input
pub use input::{InputEvent, InputMapper, PointerButton};

// Crate-level exports - Rendering
pub use render::{BACKGROUND, BoardRenderer, GRID_COLOR, GRID_WIDTH, Geometry, Surface};

// Crate-level exports - Game loop
pub use session::{Ending, Session, Step};
