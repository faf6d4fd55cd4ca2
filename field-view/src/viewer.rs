//! Animated particle field viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (field, pointer tracker, configuration) and implements [`eframe::App`]
//! to render one simulation step per repaint.

use eframe::App;
use field_core::{
    config::Config, field::Field, phases, pointer::PointerState, surface::Surface,
};
use glam::Vec2;

/// Background fill behind the particles.
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(13, 17, 23);

/// Main application state for the particle field viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Field`], [`PointerState`], [`Config`].
/// - eframe/egui callbacks for drawing and pointer input.
///
/// The per-frame update is:
/// 1. Reseed the field if the canvas changed size.
/// 2. Feed the pointer tracker from the current hover position.
/// 3. Run one [`phases::step`] through a painter-backed surface.
/// 4. Request a repaint, so the animation runs continuously.
pub struct Viewer {
    field: Field,
    cfg: Config,
    pointer: PointerState,

    rng: rand::rngs::ThreadRng,

    /// Canvas size seen on the previous frame; `ZERO` before the first.
    canvas_size: egui::Vec2,

    last_frame_time: f64,
    last_frame_dt: f64,
}

/// Adapts an [`egui::Painter`] to the core's [`Surface`].
///
/// Field coordinates are canvas-local with the origin at the top-left
/// corner of the allocated rect; alphas map onto the opacity of a white
/// foreground over [`BACKGROUND`].
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl PainterSurface<'_> {
    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.origin.x + p.x, self.origin.y + p.y)
    }
}

fn white(alpha: f32) -> egui::Color32 {
    egui::Color32::from_white_alpha((alpha * 255.0).round() as u8)
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, bounds: Vec2) {
        let rect = egui::Rect::from_min_size(self.origin, egui::vec2(bounds.x, bounds.y));
        self.painter
            .rect_filled(rect, egui::CornerRadius::ZERO, BACKGROUND);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, white(alpha));
    }

    fn stroke_line(&mut self, a: Vec2, b: Vec2, alpha: f32) {
        self.painter.line_segment(
            [self.to_screen(a), self.to_screen(b)],
            egui::Stroke::new(1.0, white(alpha)),
        );
    }
}

/// Maps a screen-space pointer position into canvas-local coordinates.
fn canvas_pos(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
}

impl Viewer {
    /// Creates a viewer with a default configuration and a field seeded
    /// at a nominal size.
    ///
    /// The first frame reseeds the field to the real canvas size, so the
    /// nominal bounds only exist between construction and that frame.
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let cfg = Config::default();
        let field = Field::new(Vec2::new(1280.0, 720.0), &cfg, &mut rng);

        Self {
            field,
            cfg,
            pointer: PointerState::default(),
            rng,
            canvas_size: egui::Vec2::ZERO,
            last_frame_time: 0.0,
            last_frame_dt: 0.0,
        }
    }

    /// Reseeds the field whenever the canvas size changed since the last
    /// frame. A repeat of the previous size leaves the population alone.
    fn sync_canvas_size(&mut self, size: egui::Vec2) {
        if size == self.canvas_size {
            return;
        }
        self.canvas_size = size;
        self.field
            .resize(Vec2::new(size.x, size.y), &self.cfg, &mut self.rng);
        log::debug!(
            "reseeded {} points for a {:.0}x{:.0} canvas",
            self.field.points.len(),
            size.x,
            size.y
        );
    }

    /// Builds the bottom status bar (point count, frame delta).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("frame dt = {:.1} ms", self.last_frame_dt * 1000.0));
                ui.separator();
                ui.label(format!("points = {}", self.field.points.len()));
            });
        });
    }

    /// Builds the central canvas: input handling plus one simulation step.
    fn ui_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response =
                    ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                if rect.width() < 1.0 || rect.height() < 1.0 {
                    return;
                }

                self.sync_canvas_size(rect.size());

                // Hovering feeds the tracker in canvas-local coordinates;
                // anything else counts as the pointer leaving.
                match response.hover_pos() {
                    Some(p) => self.pointer.on_move(canvas_pos(p, rect)),
                    None => self.pointer.on_leave(),
                }

                let painter = ui.painter_at(rect);
                let mut surface = PainterSurface {
                    painter: &painter,
                    origin: rect.min,
                };
                phases::step(&mut self.field, self.pointer.get(), &self.cfg, &mut surface);

                ctx.request_repaint();
            });
    }
}

impl App for Viewer {
    /// eframe callback that renders one animation frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        if self.last_frame_time > 0.0 {
            self.last_frame_dt = now - self.last_frame_time;
        }
        self.last_frame_time = now;

        self.ui_status_bar(ctx);
        self.ui_canvas(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_canvas_size_reseeds_on_change_only() {
        let mut viewer = Viewer::new();

        viewer.sync_canvas_size(egui::vec2(300.0, 200.0));

        assert_eq!(viewer.field.bounds, Vec2::new(300.0, 200.0));
        assert_eq!(viewer.field.points.len(), viewer.cfg.count);
        for p in &viewer.field.points {
            assert!(p.pos.x < 300.0 && p.pos.y < 200.0);
        }

        // The same size again must not reseed the population.
        let before: Vec<Vec2> = viewer.field.points.iter().map(|p| p.pos).collect();
        viewer.sync_canvas_size(egui::vec2(300.0, 200.0));
        let after: Vec<Vec2> = viewer.field.points.iter().map(|p| p.pos).collect();
        assert_eq!(before, after, "unchanged size reseeded the field");
    }

    #[test]
    fn canvas_pos_is_rect_local() {
        let rect = egui::Rect::from_min_size(egui::pos2(40.0, 25.0), egui::vec2(800.0, 600.0));

        assert_eq!(
            canvas_pos(egui::pos2(40.0, 25.0), rect),
            Vec2::new(0.0, 0.0)
        );
        assert_eq!(
            canvas_pos(egui::pos2(140.0, 75.0), rect),
            Vec2::new(100.0, 50.0)
        );
    }

    #[test]
    fn white_maps_alpha_onto_opacity() {
        assert_eq!(white(0.0).a(), 0);
        assert_eq!(white(1.0).a(), 255);
        assert!(white(0.15).a() > 0);
    }
}
