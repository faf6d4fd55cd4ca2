#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub count: usize,
    pub connection_distance: f32,
    pub pointer_radius: f32,
    pub repel_strength: f32,
    pub max_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub min_alpha: f32,
    pub max_alpha: f32,
    pub link_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 60,
            connection_distance: 120.0,
            pointer_radius: 150.0,
            repel_strength: 2.0,
            max_speed: 0.2,
            min_size: 0.5,
            max_size: 2.5,
            min_alpha: 0.1,
            max_alpha: 0.4,
            link_alpha: 0.15,
        }
    }
}
