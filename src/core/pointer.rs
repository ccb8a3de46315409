use glam::Vec2;

/// Last known pointer position over the surface.
///
/// `active` is false until the first move and again after the pointer
/// leaves; the position is kept across a leave.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl PointerState {
    pub fn inactive_at(position: Vec2) -> Self {
        Self {
            position,
            active: false,
        }
    }

    #[inline]
    pub fn moved(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.active = true;
    }

    #[inline]
    pub fn left(&mut self) {
        self.active = false;
    }

    /// Position if the pointer currently counts for interaction.
    #[inline]
    pub fn active_position(&self) -> Option<Vec2> {
        self.active.then_some(self.position)
    }
}
