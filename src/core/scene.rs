use super::field::ParticleField;
use super::paint::Painter;

/// Host input delivered to a mounted field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    PointerLeave,
    Resize { width: f32, height: f32 },
}

/// Lifecycle wrapper around a [`ParticleField`].
///
/// A scene is live from construction until [`Scene::teardown`]. Once torn
/// down it ignores input and draws nothing, so a frame callback or event
/// already queued by the host cannot touch state after unmount.
pub struct Scene {
    field: ParticleField,
    live: bool,
    frames: u64,
}

impl Scene {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            live: true,
            frames: 0,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply an input event. Returns false if the scene is torn down.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        if !self.live {
            return false;
        }
        match event {
            InputEvent::PointerMove { x, y } => self.field.pointer_moved(x, y),
            InputEvent::PointerLeave => self.field.pointer_left(),
            InputEvent::Resize { width, height } => {
                self.field.resize(width, height);
                log::debug!("[resize] {}x{}", width, height);
            }
        }
        true
    }

    /// Run one frame. Returns false, without drawing, once torn down; the
    /// caller must not schedule another frame in that case.
    pub fn tick(&mut self, painter: &mut impl Painter) -> bool {
        if !self.live {
            return false;
        }
        self.field.frame(painter);
        self.frames += 1;
        true
    }

    /// Stop the scene. Idempotent; returns true only on the first call.
    pub fn teardown(&mut self) -> bool {
        if !self.live {
            return false;
        }
        self.live = false;
        log::info!("[frame] scene stopped after {} frames", self.frames);
        true
    }
}
