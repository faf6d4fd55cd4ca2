use crate::{config::Config, point::Point};
use glam::Vec2;
use rand::Rng;

#[derive(Debug)]
pub struct Field {
    pub points: Vec<Point>,
    pub bounds: Vec2,
}

impl Field {
    pub fn new(bounds: Vec2, cfg: &Config, rng: &mut impl Rng) -> Self {
        let points = (0..cfg.count)
            .map(|_| Point::random_in(bounds, cfg, rng))
            .collect();
        Self { points, bounds }
    }

    pub fn from_points(points: Vec<Point>, bounds: Vec2) -> Self {
        Self { points, bounds }
    }

    /// Replaces the whole population with a fresh seed in the new bounds.
    ///
    /// Called by the host whenever the canvas changes size. The population
    /// size stays `cfg.count`; points are never replaced individually.
    pub fn resize(&mut self, bounds: Vec2, cfg: &Config, rng: &mut impl Rng) {
        self.bounds = bounds;
        self.points = (0..cfg.count)
            .map(|_| Point::random_in(bounds, cfg, rng))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_seeds_exactly_count_points_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let cfg = Config::default();
        let bounds = Vec2::new(300.0, 200.0);

        let field = Field::new(bounds, &cfg, &mut rng);

        assert_eq!(field.points.len(), cfg.count);
        assert_eq!(field.bounds, bounds);

        for p in &field.points {
            assert!(
                p.pos.x >= 0.0 && p.pos.x < bounds.x && p.pos.y >= 0.0 && p.pos.y < bounds.y,
                "point out of bounds: {:?}",
                p.pos
            );
            assert!(p.vel.x.abs() <= cfg.max_speed && p.vel.y.abs() <= cfg.max_speed);
            assert!(p.size >= cfg.min_size && p.size < cfg.max_size);
            assert!(p.alpha >= cfg.min_alpha && p.alpha < cfg.max_alpha);
        }
    }

    #[test]
    fn resize_replaces_population_in_new_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let cfg = Config::default();
        let mut field = Field::new(Vec2::new(300.0, 200.0), &cfg, &mut rng);

        let new_bounds = Vec2::new(80.0, 60.0);
        field.resize(new_bounds, &cfg, &mut rng);

        assert_eq!(field.points.len(), cfg.count);
        assert_eq!(field.bounds, new_bounds);
        for p in &field.points {
            assert!(
                p.pos.x < new_bounds.x && p.pos.y < new_bounds.y,
                "point not reseeded into the new bounds: {:?}",
                p.pos
            );
        }
    }

    #[test]
    fn resize_with_zero_count_yields_an_empty_field() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cfg = Config::default();
        let mut field = Field::new(Vec2::new(100.0, 100.0), &cfg, &mut rng);

        cfg.count = 0;
        field.resize(Vec2::new(100.0, 100.0), &cfg, &mut rng);

        // An empty population is a valid, silently degraded state.
        assert!(field.points.is_empty());
    }
}
