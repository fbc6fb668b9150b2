//! Fatal startup errors.

use derive_more::{Display, Error};

/// An unrecoverable failure before the game loop starts.
///
/// Each variant maps to its own process exit code.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StartupError {
    /// The startup runtime for asset decoding could not be built.
    #[display("Failed to start asset loader: {message}")]
    Runtime {
        /// Underlying error text.
        message: String,
    },

    /// The window or its drawing surface could not be created.
    #[display("Failed to open window: {message}")]
    Window {
        /// Underlying error text.
        message: String,
    },

    /// A piece image file does not exist.
    #[display("Piece image {path} is missing")]
    AssetMissing {
        /// Path that was looked up.
        path: String,
    },

    /// A piece image exists but could not be decoded.
    #[display("Failed to decode piece image {path}: {message}")]
    AssetDecode {
        /// Path of the image.
        path: String,
        /// Underlying error text.
        message: String,
    },

    /// A decoded image could not be turned into a texture.
    #[display("Failed to create texture {name}: {message}")]
    TextureCreation {
        /// Texture name.
        name: String,
        /// Reason the texture was refused.
        message: String,
    },
}

impl StartupError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            StartupError::Runtime { .. } => 2,
            StartupError::Window { .. } => 3,
            StartupError::AssetMissing { .. } | StartupError::AssetDecode { .. } => 4,
            StartupError::TextureCreation { .. } => 5,
        }
    }
}
