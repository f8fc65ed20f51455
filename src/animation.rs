// The repeating render task: a particle field bound to a surface, plus the
// token that stops it.

use crate::field::{FrameStats, ParticleField};
use crate::surface::Surface;
use std::cell::Cell;
use std::rc::Rc;

// Shared stop flag. Clones observe the same flag, and every holder lives
// on the one thread that drives the animation.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub struct Animation<S: Surface> {
    field: ParticleField,
    surface: S,
    token: CancelToken,
}

impl<S: Surface> Animation<S> {
    // Sizes the surface to the field.
    pub fn new(field: ParticleField, mut surface: S) -> Animation<S> {
        let (width, height) = field.size();
        surface.set_size(width, height);
        Animation {
            field,
            surface,
            token: CancelToken::new(),
        }
    }

    // Runs one frame. `None` means the animation is over and the caller
    // should not schedule another tick.
    pub fn tick(&mut self) -> Option<FrameStats> {
        if self.token.is_cancelled() {
            return None;
        }
        Some(self.field.step(&mut self.surface))
    }

    // Returns whether anything changed. Ignored after dispose.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.token.is_cancelled() || !self.field.resize(width, height) {
            return false;
        }
        self.surface.set_size(width, height);
        true
    }

    pub fn dispose(&mut self) {
        self.token.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
