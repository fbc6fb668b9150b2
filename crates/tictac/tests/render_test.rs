//! Tests for full-frame board rendering.

use egui::{Color32, Pos2, Rect, Stroke, pos2};
use tictac::{
    BACKGROUND, BoardRenderer, GRID_COLOR, Geometry, InputEvent, InputMapper, PointerButton,
    Session, Surface,
};
use tictac_game::Player;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(Color32),
    Line(Pos2, Pos2, Stroke),
    Piece(Player, Rect),
    Present,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn clear(&mut self, color: Color32) {
        self.ops.push(Op::Clear(color));
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.ops.push(Op::Line(from, to, stroke));
    }

    fn piece(&mut self, player: Player, rect: Rect) {
        self.ops.push(Op::Piece(player, rect));
    }

    fn present(&mut self) {
        self.ops.push(Op::Present);
    }
}

fn renderer() -> BoardRenderer {
    BoardRenderer::new(Geometry::new(Pos2::ZERO, 600.0))
}

fn click(x: f32, y: f32) -> InputEvent {
    InputEvent::Pointer {
        button: PointerButton::Primary,
        pressed: true,
        x,
        y,
    }
}

#[test]
fn test_empty_board_frame() {
    let mut recorder = Recorder::default();
    renderer().draw(&tictac_game::Board::new(), &mut recorder);

    assert_eq!(recorder.ops.len(), 6);
    assert_eq!(recorder.ops.first(), Some(&Op::Clear(BACKGROUND)));
    assert_eq!(recorder.ops.last(), Some(&Op::Present));

    let lines: Vec<(Pos2, Pos2)> = recorder
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Line(from, to, stroke) => {
                assert_eq!(stroke.color, GRID_COLOR);
                Some((*from, *to))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        vec![
            (pos2(200.0, 0.0), pos2(200.0, 600.0)),
            (pos2(400.0, 0.0), pos2(400.0, 600.0)),
            (pos2(0.0, 200.0), pos2(600.0, 200.0)),
            (pos2(0.0, 400.0), pos2(600.0, 400.0)),
        ]
    );
}

#[test]
fn test_pieces_drawn_centered_with_padding() {
    let mut session = Session::new(InputMapper::new(600.0));
    session.handle(click(10.0, 10.0)); // Player 1 top-left
    session.handle(click(590.0, 300.0)); // Player 2 middle-right

    let mut recorder = Recorder::default();
    renderer().draw(session.state().board(), &mut recorder);

    let pieces: Vec<&Op> = recorder
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Piece(..)))
        .collect();
    assert_eq!(
        pieces,
        vec![
            &Op::Piece(
                Player::One,
                Rect::from_min_max(pos2(25.0, 25.0), pos2(175.0, 175.0))
            ),
            &Op::Piece(
                Player::Two,
                Rect::from_min_max(pos2(425.0, 225.0), pos2(575.0, 375.0))
            ),
        ]
    );
    // Pieces come after the grid and before present.
    assert!(matches!(recorder.ops[5], Op::Piece(..)));
    assert_eq!(recorder.ops.last(), Some(&Op::Present));
}

#[test]
fn test_redraw_is_total_and_idempotent() {
    let mut session = Session::new(InputMapper::new(600.0));
    session.handle(click(300.0, 300.0));

    let mut first = Recorder::default();
    let mut second = Recorder::default();
    renderer().draw(session.state().board(), &mut first);
    renderer().draw(session.state().board(), &mut second);

    assert_eq!(first.ops, second.ops);
    assert_eq!(first.ops.len(), 7);
}
