use glam::Vec2;

/// Drawing primitives the simulation renders through.
///
/// The core never draws directly. Each frame it issues one `clear`, one
/// `fill_circle` per point, and one `stroke_line` per close pair against
/// whatever surface the host provides — an `egui::Painter` adapter in the
/// viewer, a recording stub in tests.
///
/// Alpha values are opacities in `[0, 1]` over the host's foreground
/// color; the core has no notion of concrete colors.
pub trait Surface {
    /// Wipes the frame region `[0, bounds.x] × [0, bounds.y]`.
    fn clear(&mut self, bounds: Vec2);

    /// Paints a filled dot at `center` with the given translucency.
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32);

    /// Paints a 1-px line from `a` to `b` at the given opacity.
    fn stroke_line(&mut self, a: Vec2, b: Vec2, alpha: f32);
}
