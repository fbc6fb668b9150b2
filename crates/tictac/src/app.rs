//! Native window: adapts egui input to the session and paints the board.

use crate::assets::{DecodedPieces, PieceTextures};
use crate::config::GameConfig;
use crate::error::StartupError;
use crate::input::{InputEvent, InputMapper, PointerButton};
use crate::render::{BoardRenderer, Geometry, Surface};
use crate::session::{Ending, Session, Step};
use egui::{Color32, Painter, Pos2, Rect, Stroke, pos2, vec2};
use tictac_game::Player;
use tracing::{debug, info, instrument};

/// The running game window.
#[derive(Debug)]
pub struct TicTacApp {
    session: Session,
    textures: PieceTextures,
    extent: f32,
}

impl TicTacApp {
    /// Creates the app around already-uploaded textures.
    pub fn new(config: &GameConfig, textures: PieceTextures) -> Self {
        let extent = *config.canvas_extent() as f32;
        Self {
            session: Session::new(InputMapper::new(extent)),
            textures,
            extent,
        }
    }

    /// Handles this frame's input and paints the board.
    ///
    /// Returns how the session ended if it ended during this frame. Nothing
    /// schedules another frame unless the board changed; egui wakes the app
    /// again on the next input event.
    #[instrument(level = "trace", skip_all)]
    fn frame(&mut self, ctx: &egui::Context) -> Option<Ending> {
        let mut ended = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());
                let canvas = Rect::from_min_size(response.rect.min, vec2(self.extent, self.extent));

                for event in pointer_events(ctx, canvas.min) {
                    let step = self.session.handle(event);
                    if step.needs_redraw() {
                        debug!(?step, "Redraw");
                        ctx.request_repaint();
                    }
                    if let Step::Finished(ending) = step {
                        ended = Some(ending);
                        break;
                    }
                }

                // Draws the final board too, in the frame that closes the window.
                let renderer = BoardRenderer::new(Geometry::new(canvas.min, self.extent));
                let mut surface = PainterSurface {
                    painter: &painter,
                    textures: &self.textures,
                    canvas,
                };
                renderer.draw(self.session.state().board(), &mut surface);
            });

        if ended.is_none() && ctx.input(|i| i.viewport().close_requested()) {
            if let Step::Finished(ending) = self.session.handle(InputEvent::Quit) {
                ended = Some(ending);
            }
        }

        if let Some(ending) = ended {
            self.finish(ctx, ending);
        }
        ended
    }

    #[instrument(skip(self, ctx))]
    fn finish(&self, ctx: &egui::Context, ending: Ending) {
        println!("{}", ending.announcement());
        if let Ending::GameOver(outcome) = ending {
            info!(%outcome, "Closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for TicTacApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }

    // All drawing happens in `update`; eframe 0.34 requires this method.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

/// Pointer button events from this frame, relative to `origin`.
#[instrument(level = "trace", skip(ctx))]
fn pointer_events(ctx: &egui::Context, origin: Pos2) -> Vec<InputEvent> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => Some(InputEvent::Pointer {
                    button: map_button(*button),
                    pressed: *pressed,
                    x: pos.x - origin.x,
                    y: pos.y - origin.y,
                }),
                _ => None,
            })
            .collect()
    })
}

fn map_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Paints onto the window through an egui painter.
struct PainterSurface<'a> {
    painter: &'a Painter,
    textures: &'a PieceTextures,
    canvas: Rect,
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.canvas, 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter.line_segment([from, to], stroke);
    }

    fn piece(&mut self, player: Player, rect: Rect) {
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        self.painter
            .image(self.textures.get(player).id(), rect, uv, Color32::WHITE);
    }

    // egui presents the frame when `update` returns.
    fn present(&mut self) {}
}

/// Opens the window and runs the game until quit or game over.
///
/// Textures are created inside the window's creation callback, on the
/// rendering thread, from the already decoded `pieces`.
///
/// # Errors
///
/// [`StartupError::TextureCreation`] if a piece cannot be uploaded,
/// [`StartupError::Window`] for any other windowing failure.
#[instrument(skip_all, fields(title = %config.title()))]
pub fn run(config: GameConfig, pieces: DecodedPieces) -> Result<(), StartupError> {
    let extent = *config.canvas_extent() as f32;
    let title = config.title().clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([extent, extent])
            .with_resizable(false),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    info!(extent, "Opening window");
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let textures = PieceTextures::upload(&cc.egui_ctx, pieces)?;
            Ok(Box::new(TicTacApp::new(&config, textures)))
        }),
    )
    .map_err(|err| match err {
        eframe::Error::AppCreation(inner) => match inner.downcast::<StartupError>() {
            Ok(startup) => *startup,
            Err(other) => StartupError::Window {
                message: other.to_string(),
            },
        },
        other => StartupError::Window {
            message: other.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{DecodedPieces, PieceImage};
    use tictac_game::{Cell, Position};

    fn headless_app(ctx: &egui::Context) -> TicTacApp {
        let pixel = |name| PieceImage::from_rgba(name, [1, 1], vec![0, 0, 0, 255]);
        let pieces = DecodedPieces {
            player_one: pixel("one"),
            player_two: pixel("two"),
        };
        let textures = PieceTextures::upload(ctx, pieces).expect("textures");
        TicTacApp::new(&GameConfig::default(), textures)
    }

    fn button(button: egui::PointerButton, pressed: bool, x: f32, y: f32) -> egui::Event {
        egui::Event::PointerButton {
            pos: pos2(x, y),
            button,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn with_events(events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            events,
            ..Default::default()
        }
    }

    fn close_request() -> egui::RawInput {
        let mut input = egui::RawInput::default();
        input
            .viewports
            .entry(egui::ViewportId::ROOT)
            .or_default()
            .events
            .push(egui::ViewportEvent::Close);
        input
    }

    #[test]
    fn test_pointer_events_relative_to_origin() {
        let ctx = egui::Context::default();
        let input = with_events(vec![
            button(egui::PointerButton::Primary, true, 110.0, 45.0),
            egui::Event::Text("x".to_string()),
            button(egui::PointerButton::Secondary, false, 10.0, 20.0),
        ]);

        let mut events = Vec::new();
        let _ = ctx.run(input, |ctx| {
            events = pointer_events(ctx, pos2(10.0, 20.0));
        });

        assert_eq!(
            events,
            vec![
                InputEvent::Pointer {
                    button: PointerButton::Primary,
                    pressed: true,
                    x: 100.0,
                    y: 25.0,
                },
                InputEvent::Pointer {
                    button: PointerButton::Secondary,
                    pressed: false,
                    x: 0.0,
                    y: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_map_button_variants() {
        assert_eq!(map_button(egui::PointerButton::Primary), PointerButton::Primary);
        assert_eq!(map_button(egui::PointerButton::Secondary), PointerButton::Secondary);
        assert_eq!(map_button(egui::PointerButton::Middle), PointerButton::Middle);
        assert_eq!(map_button(egui::PointerButton::Extra1), PointerButton::Other);
        assert_eq!(map_button(egui::PointerButton::Extra2), PointerButton::Other);
    }

    #[test]
    fn test_frame_plays_primary_press_only() {
        let ctx = egui::Context::default();
        let mut app = headless_app(&ctx);
        let input = with_events(vec![
            button(egui::PointerButton::Secondary, true, 50.0, 50.0),
            button(egui::PointerButton::Primary, false, 50.0, 50.0),
            button(egui::PointerButton::Primary, true, 300.0, 300.0),
        ]);

        let mut ended = None;
        let _ = ctx.run(input, |ctx| ended = app.frame(ctx));

        assert_eq!(ended, None);
        let state = app.session.state();
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.board().get(Position::Center), Cell::Occupied(Player::One));
        assert!(state.board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_close_request_quits_once() {
        let ctx = egui::Context::default();
        let mut app = headless_app(&ctx);

        let mut endings = Vec::new();
        for _ in 0..2 {
            let _ = ctx.run(close_request(), |ctx| endings.push(app.frame(ctx)));
        }

        assert_eq!(endings, vec![Some(Ending::Quit), None]);
        assert_eq!(app.session.ending(), Some(Ending::Quit));
    }

    #[test]
    fn test_idle_frames_stop_repainting() {
        let ctx = egui::Context::default();
        let mut app = headless_app(&ctx);

        let mut output = None;
        for _ in 0..3 {
            output = Some(ctx.run(egui::RawInput::default(), |ctx| {
                app.frame(ctx);
            }));
        }

        let output = output.expect("ran a frame");
        let root = &output.viewport_output[&egui::ViewportId::ROOT];
        assert_eq!(root.repaint_delay, std::time::Duration::MAX);
        assert_eq!(app.session.state().move_count(), 0);
    }
}
