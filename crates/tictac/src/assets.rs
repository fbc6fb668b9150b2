//! Piece image loading.
//!
//! Both images are decoded on their own blocking task, dispatched together
//! and joined once. Textures are created afterwards on the rendering thread,
//! which consumes the decoded buffers.

use crate::error::StartupError;
use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use std::path::{Path, PathBuf};
use tictac_game::Player;
use tokio::task::JoinError;
use tracing::{debug, info, instrument};

/// A decoded RGBA image waiting to become a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceImage {
    name: String,
    size: [usize; 2],
    rgba: Vec<u8>,
}

impl PieceImage {
    /// Wraps raw RGBA8 pixels, `size` being `[width, height]`.
    pub fn from_rgba(name: impl Into<String>, size: [usize; 2], rgba: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size,
            rgba,
        }
    }

    /// Texture name, taken from the file stem.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `[width, height]` in pixels.
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    /// Reads and decodes an image file.
    ///
    /// # Errors
    ///
    /// [`StartupError::AssetMissing`] if the file does not exist,
    /// [`StartupError::AssetDecode`] if it cannot be read as an image.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn decode(path: &Path) -> Result<Self, StartupError> {
        let shown = path.display().to_string();
        let image = image::open(path).map_err(|err| match err {
            image::ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                StartupError::AssetMissing { path: shown.clone() }
            }
            other => StartupError::AssetDecode {
                path: shown.clone(),
                message: other.to_string(),
            },
        })?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or(shown);
        debug!(name = %name, width, height, "Piece image decoded");

        Ok(Self::from_rgba(
            name,
            [width as usize, height as usize],
            rgba.into_raw(),
        ))
    }

    /// Checks the image can be uploaded as a texture no wider than `max_side`.
    ///
    /// # Errors
    ///
    /// [`StartupError::TextureCreation`] for empty or oversized images, or a
    /// pixel buffer that does not match the stated size.
    pub fn check_texture(&self, max_side: usize) -> Result<(), StartupError> {
        let [width, height] = self.size;
        let refuse = |message: String| StartupError::TextureCreation {
            name: self.name.clone(),
            message,
        };

        if width == 0 || height == 0 {
            return Err(refuse("image is empty".to_string()));
        }
        if width > max_side || height > max_side {
            return Err(refuse(format!(
                "{width}x{height} exceeds the {max_side} pixel texture limit"
            )));
        }
        if self.rgba.len() != width * height * 4 {
            return Err(refuse(format!(
                "expected {} bytes of RGBA, found {}",
                width * height * 4,
                self.rgba.len()
            )));
        }
        Ok(())
    }
}

/// Decoded images for both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPieces {
    /// Player 1's piece.
    pub player_one: PieceImage,
    /// Player 2's piece.
    pub player_two: PieceImage,
}

/// Decodes both piece images concurrently.
///
/// # Errors
///
/// The first failing image's [`StartupError`], Player 1 first.
#[instrument(skip_all)]
pub async fn load_pieces(paths: &[PathBuf; 2]) -> Result<DecodedPieces, StartupError> {
    let [first, second] = paths.clone();

    let first_task = tokio::task::spawn_blocking(move || PieceImage::decode(&first));
    let second_task = tokio::task::spawn_blocking(move || PieceImage::decode(&second));
    let (first, second) = tokio::join!(first_task, second_task);

    let pieces = DecodedPieces {
        player_one: joined(first, &paths[0])?,
        player_two: joined(second, &paths[1])?,
    };
    info!(
        player_one = pieces.player_one.name(),
        player_two = pieces.player_two.name(),
        "Piece images loaded"
    );
    Ok(pieces)
}

fn joined(
    result: Result<Result<PieceImage, StartupError>, JoinError>,
    path: &Path,
) -> Result<PieceImage, StartupError> {
    result.map_err(|err| StartupError::AssetDecode {
        path: path.display().to_string(),
        message: err.to_string(),
    })?
}

/// Runs [`load_pieces`] on a short-lived runtime that is gone on return.
///
/// # Errors
///
/// [`StartupError::Runtime`] if the runtime cannot start, otherwise whatever
/// [`load_pieces`] reports.
pub fn load_pieces_blocking(paths: &[PathBuf; 2]) -> Result<DecodedPieces, StartupError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| StartupError::Runtime {
            message: err.to_string(),
        })?;
    runtime.block_on(load_pieces(paths))
}

/// GPU textures for both pieces.
#[derive(Clone)]
pub struct PieceTextures {
    player_one: TextureHandle,
    player_two: TextureHandle,
}

impl PieceTextures {
    /// Uploads both images. Must run on the thread that owns `ctx`.
    ///
    /// # Errors
    ///
    /// [`StartupError::TextureCreation`] if either image is refused.
    #[instrument(skip_all)]
    pub fn upload(ctx: &Context, pieces: DecodedPieces) -> Result<Self, StartupError> {
        let max_side = ctx.input(|i| i.max_texture_side);
        let textures = Self {
            player_one: upload(ctx, pieces.player_one, max_side)?,
            player_two: upload(ctx, pieces.player_two, max_side)?,
        };
        info!(max_side, "Piece textures created");
        Ok(textures)
    }

    /// Texture for `player`'s piece.
    pub fn get(&self, player: Player) -> &TextureHandle {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }
}

impl std::fmt::Debug for PieceTextures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PieceTextures")
            .field("player_one", &self.player_one.name())
            .field("player_two", &self.player_two.name())
            .finish()
    }
}

#[instrument(skip(ctx, piece), fields(name = piece.name()))]
fn upload(
    ctx: &Context,
    piece: PieceImage,
    max_side: usize,
) -> Result<TextureHandle, StartupError> {
    piece.check_texture(max_side)?;
    let PieceImage { name, size, rgba } = piece;
    let image = ColorImage::from_rgba_unmultiplied(size, &rgba);
    drop(rgba);
    Ok(ctx.load_texture(name, image, TextureOptions::LINEAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_texture_rejects_empty() {
        let piece = PieceImage::from_rgba("blank", [0, 0], Vec::new());
        let err = piece.check_texture(2048).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_check_texture_rejects_oversized() {
        let piece = PieceImage::from_rgba("huge", [4, 4], vec![0; 64]);
        assert!(piece.check_texture(4).is_ok());
        assert!(matches!(
            piece.check_texture(3),
            Err(StartupError::TextureCreation { .. })
        ));
    }

    #[test]
    fn test_check_texture_rejects_short_buffer() {
        let piece = PieceImage::from_rgba("short", [2, 2], vec![0; 15]);
        assert!(matches!(
            piece.check_texture(2048),
            Err(StartupError::TextureCreation { .. })
        ));
    }

    #[test]
    fn test_upload_on_headless_context() {
        let ctx = Context::default();
        let red = PieceImage::from_rgba("red", [1, 1], vec![255, 0, 0, 255]);
        let blue = PieceImage::from_rgba("blue", [1, 1], vec![0, 0, 255, 255]);
        let textures = PieceTextures::upload(
            &ctx,
            DecodedPieces {
                player_one: red,
                player_two: blue,
            },
        )
        .expect("textures");
        assert_eq!(textures.get(Player::One).name(), "red");
        assert_eq!(textures.get(Player::Two).size(), [1, 1]);
    }
}
