use crate::config::Config;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Point {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub alpha: f32,
}

impl Point {
    /// Samples a point within `[0, bounds.x) × [0, bounds.y)` with a slow
    /// random drift, a small random radius, and a random translucency.
    pub fn random_in(bounds: Vec2, cfg: &Config, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            ),
            vel: Vec2::new(
                rng.random_range(-cfg.max_speed..cfg.max_speed),
                rng.random_range(-cfg.max_speed..cfg.max_speed),
            ),
            size: rng.random_range(cfg.min_size..cfg.max_size),
            alpha: rng.random_range(cfg.min_alpha..cfg.max_alpha),
        }
    }
}
