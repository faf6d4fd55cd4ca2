//! Per-frame passes for the particle field.
//!
//! The typical frame looks like:
//! 1. [`move_phase`] — integrate velocities, bounce off the edges, and
//!    push points away from a nearby pointer.
//! 2. [`draw_phase`] — paint every point onto the surface.
//! 3. [`link_phase`] — paint a fading line between every pair of points
//!    closer than the connection distance.
//!
//! [`step`] runs all three behind a [`Surface::clear`]; a host calls it
//! once per display refresh.

use crate::{config::Config, field::Field, point::Point, surface::Surface};
use glam::Vec2;

/// Advances every point by one frame.
///
/// For each point, in stored order:
///
/// 1. Integrates the position: `pos += vel`.
/// 2. Bounces off the edges: a position outside `[0, bounds.x]` negates
///    `vel.x`, outside `[0, bounds.y]` negates `vel.y`. The position
///    itself is not clamped; a point may sit outside the bounds until the
///    flipped velocity carries it back in.
/// 3. Applies pointer repulsion: a pointer present within
///    `cfg.pointer_radius` displaces the point directly away from it by
///    `(pointer_radius - d) / pointer_radius * cfg.repel_strength`. A
///    pointer sitting exactly on the point applies no force
///    (`normalize_or_zero`).
///
/// ### Parameters
/// - `points` - The population to mutate in place.
/// - `bounds` - Current canvas extent; the bounce box is `[0, bounds]`.
/// - `pointer` - Pointer snapshot for this frame, or `None` when absent.
/// - `cfg` - Fixed simulation parameters.
pub fn move_phase(points: &mut [Point], bounds: Vec2, pointer: Option<Vec2>, cfg: &Config) {
    for p in points.iter_mut() {
        p.pos += p.vel;

        if p.pos.x > bounds.x || p.pos.x < 0.0 {
            p.vel.x = -p.vel.x;
        }
        if p.pos.y > bounds.y || p.pos.y < 0.0 {
            p.vel.y = -p.vel.y;
        }

        if let Some(m) = pointer {
            let d = m.distance(p.pos);
            if d < cfg.pointer_radius {
                // Unit vector from the point toward the pointer; zero when
                // the two coincide.
                let dir = (m - p.pos).normalize_or_zero();
                let force = (cfg.pointer_radius - d) / cfg.pointer_radius;
                p.pos -= dir * force * cfg.repel_strength;
            }
        }
    }
}

/// Paints every point as a filled dot at its own translucency.
pub fn draw_phase(points: &[Point], surface: &mut impl Surface) {
    for p in points {
        surface.fill_circle(p.pos, p.size, p.alpha);
    }
}

/// Connection opacity for a pair at the given distance.
///
/// Falls off linearly from `cfg.link_alpha` at distance zero to exactly
/// zero at `cfg.connection_distance`. Pairs at or beyond the threshold
/// get `None` and are not drawn.
pub fn link_alpha(distance: f32, cfg: &Config) -> Option<f32> {
    if distance < cfg.connection_distance {
        Some(cfg.link_alpha * (1.0 - distance / cfg.connection_distance))
    } else {
        None
    }
}

/// Paints fading connection lines between nearby pairs.
///
/// Every unordered pair of distinct points closer than
/// `cfg.connection_distance` gets one line, with opacity from
/// [`link_alpha`]. Scanning `i < j` visits each pair once, so no line is
/// drawn twice and a point is never linked to itself.
pub fn link_phase(points: &[Point], cfg: &Config, surface: &mut impl Surface) {
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = a.pos.distance(b.pos);
            if let Some(alpha) = link_alpha(d, cfg) {
                surface.stroke_line(a.pos, b.pos, alpha);
            }
        }
    }
}

/// Runs one full frame: clear, move, draw, link.
///
/// ### Parameters
/// - `field` - The population and bounds to advance and render.
/// - `pointer` - Pointer snapshot for this frame, or `None` when absent.
/// - `cfg` - Fixed simulation parameters.
/// - `surface` - Drawing surface receiving this frame's output.
pub fn step(field: &mut Field, pointer: Option<Vec2>, cfg: &Config, surface: &mut impl Surface) {
    surface.clear(field.bounds);
    move_phase(&mut field.points, field.bounds, pointer, cfg);
    draw_phase(&field.points, surface);
    link_phase(&field.points, cfg, surface);
}
