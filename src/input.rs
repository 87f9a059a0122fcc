//! Pointer tracking for the field.
//!
//! `Pointer` folds mouse and touch events into the single surface-local
//! coordinate the simulation reads once per frame. Last write wins; there is
//! no history or queueing.

use glam::Vec2;
use winit::event::{TouchPhase, WindowEvent};

/// The most recent known pointer position.
///
/// winit delivers `CursorMoved` and `Touch` positions already relative to the
/// window surface, so no offset conversion is needed.
#[derive(Debug, Default)]
pub struct Pointer {
    position: Vec2,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position in surface-local physical pixels.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Process a winit window event. Events other than cursor and touch
    /// movement are ignored.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::Touch(touch)
                if matches!(touch.phase, TouchPhase::Started | TouchPhase::Moved) =>
            {
                self.set(Vec2::new(touch.location.x as f32, touch.location.y as f32));
            }
            _ => {}
        }
    }

    fn set(&mut self, position: Vec2) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // winit event structs cannot be constructed outside the library, so the
    // tests drive the same internal setter `handle_event` uses.

    #[test]
    fn test_initial_position_is_origin() {
        let pointer = Pointer::new();
        assert_eq!(pointer.position(), Vec2::ZERO);
    }

    #[test]
    fn test_last_write_wins() {
        let mut pointer = Pointer::new();
        pointer.set(Vec2::new(10.0, 20.0));
        pointer.set(Vec2::new(300.0, 400.0));
        assert_eq!(pointer.position(), Vec2::new(300.0, 400.0));
    }
}
