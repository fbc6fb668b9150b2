//! Board rendering.
//!
//! [`BoardRenderer`] repaints the whole frame from a [`Board`] onto any
//! [`Surface`]: background, the four separator lines, then one piece image
//! per occupied cell.

use egui::{Color32, Pos2, Rect, Stroke, pos2, vec2};
use tictac_game::{Board, Player, Position, SIZE};
use tracing::instrument;

/// Frame background.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Separator line color.
pub const GRID_COLOR: Color32 = Color32::BLACK;

/// Separator line width, in points.
pub const GRID_WIDTH: f32 = 1.0;

/// Something the renderer can draw onto.
pub trait Surface {
    /// Fills the whole canvas with `color`.
    fn clear(&mut self, color: Color32);

    /// Draws a straight line.
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);

    /// Draws `player`'s piece image scaled into `rect`.
    fn piece(&mut self, player: Player, rect: Rect);

    /// Finishes the frame.
    fn present(&mut self);
}

/// Canvas layout: where cells, pieces and separators go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    origin: Pos2,
    extent: f32,
}

impl Geometry {
    /// Layout for a square canvas of side `extent` whose top-left is `origin`.
    pub fn new(origin: Pos2, extent: f32) -> Self {
        Self { origin, extent }
    }

    /// Side length of one cell.
    pub fn cell_size(&self) -> f32 {
        self.extent / SIZE as f32
    }

    /// Side length of a piece image: a quarter of the canvas.
    pub fn piece_size(&self) -> f32 {
        self.extent / 4.0
    }

    /// Gap between a cell's edge and its piece, on each side.
    pub fn padding(&self) -> f32 {
        (self.cell_size() - self.piece_size()) / 2.0
    }

    /// The area covered by `pos`.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        let cell = self.cell_size();
        let min = self.origin + vec2(pos.col() as f32 * cell, pos.row() as f32 * cell);
        Rect::from_min_size(min, vec2(cell, cell))
    }

    /// Where the piece at `pos` is drawn, centered in its cell.
    pub fn piece_rect(&self, pos: Position) -> Rect {
        let min = self.cell_rect(pos).min + vec2(self.padding(), self.padding());
        Rect::from_min_size(min, vec2(self.piece_size(), self.piece_size()))
    }

    /// Two vertical then two horizontal separators, as `[from, to]` pairs.
    pub fn separators(&self) -> [[Pos2; 2]; 4] {
        let Pos2 { x, y } = self.origin;
        let (first, second) = (self.cell_size(), self.cell_size() * 2.0);
        let end = self.extent;
        [
            [pos2(x + first, y), pos2(x + first, y + end)],
            [pos2(x + second, y), pos2(x + second, y + end)],
            [pos2(x, y + first), pos2(x + end, y + first)],
            [pos2(x, y + second), pos2(x + end, y + second)],
        ]
    }
}

/// Draws a full frame for a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardRenderer {
    geometry: Geometry,
}

impl BoardRenderer {
    /// Creates a renderer for the given layout.
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    /// Clears and repaints the whole frame.
    #[instrument(level = "trace", skip_all)]
    pub fn draw<S: Surface>(&self, board: &Board, surface: &mut S) {
        surface.clear(BACKGROUND);

        let stroke = Stroke::new(GRID_WIDTH, GRID_COLOR);
        for [from, to] in self.geometry.separators() {
            surface.line(from, to, stroke);
        }

        for (pos, cell) in board.iter() {
            if let Some(player) = cell.player() {
                surface.piece(player, self.geometry.piece_rect(pos));
            }
        }

        surface.present();
    }
}
