use glam::Vec2;

/// Last known pointer position over the tracked surface, or `None` when
/// the pointer left (or was never seen).
///
/// Written by the host's pointer event handlers, read once per frame by
/// the simulation.
#[derive(Debug, Default)]
pub struct PointerState {
    pos: Option<Vec2>,
}

impl PointerState {
    pub fn on_move(&mut self, pos: Vec2) {
        self.pos = Some(pos);
    }

    pub fn on_leave(&mut self) {
        self.pos = None;
    }

    pub fn get(&self) -> Option<Vec2> {
        self.pos
    }
}
