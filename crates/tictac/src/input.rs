//! Pointer input and pixel-to-cell mapping.

use tictac_game::SIZE;

/// Mouse button, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button.
    Primary,
    /// Right button.
    Secondary,
    /// Wheel button.
    Middle,
    /// Any extra button.
    Other,
}

/// An input event fed to the game session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    /// A button went down or up at canvas-relative `(x, y)`.
    Pointer {
        /// Which button.
        button: PointerButton,
        /// True on press, false on release.
        pressed: bool,
        /// Horizontal offset from the canvas's left edge.
        x: f32,
        /// Vertical offset from the canvas's top edge.
        y: f32,
    },
}

/// Maps canvas pixels to board cells.
///
/// Each axis is divided by one third of the canvas extent. Coordinates
/// outside the canvas are clamped to the nearest cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputMapper {
    extent: f32,
}

impl InputMapper {
    /// Creates a mapper for a square canvas of side `extent`.
    pub fn new(extent: f32) -> Self {
        Self { extent }
    }

    /// Returns the `(row, col)` under `(x, y)`.
    pub fn cell_at(&self, x: f32, y: f32) -> (usize, usize) {
        let cell = self.extent / SIZE as f32;
        (axis_index(y, cell), axis_index(x, cell))
    }
}

fn axis_index(offset: f32, cell: f32) -> usize {
    // Also catches NaN.
    if !(offset > 0.0) || !(cell > 0.0) {
        return 0;
    }
    ((offset / cell) as usize).min(SIZE - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let mapper = InputMapper::new(600.0);
        assert_eq!(mapper.cell_at(0.0, 0.0), (0, 0));
        assert_eq!(mapper.cell_at(599.0, 599.0), (2, 2));
        assert_eq!(mapper.cell_at(599.0, 0.0), (0, 2));
        assert_eq!(mapper.cell_at(0.0, 599.0), (2, 0));
    }

    #[test]
    fn test_cell_boundaries() {
        let mapper = InputMapper::new(600.0);
        assert_eq!(mapper.cell_at(199.9, 199.9), (0, 0));
        assert_eq!(mapper.cell_at(200.0, 200.0), (1, 1));
        assert_eq!(mapper.cell_at(400.0, 399.0), (1, 2));
    }

    #[test]
    fn test_clamps_outside_canvas() {
        let mapper = InputMapper::new(600.0);
        assert_eq!(mapper.cell_at(-5.0, 700.0), (2, 0));
        assert_eq!(mapper.cell_at(f32::NAN, 10.0), (0, 0));
    }
}
