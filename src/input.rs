//! Cursor tracking for the backdrop.
//!
//! The repulsion step needs the pointer position or an explicit absence,
//! never a stale coordinate. [`Cursor`] folds the winit cursor events into
//! an `Option<Vec2>` that the shell threads into the field update each
//! frame.

use glam::Vec2;
use winit::event::WindowEvent;

/// Last known pointer position over the surface, in physical pixels.
///
/// `None` before the pointer first enters and after it leaves, so an
/// off-surface pointer exerts no force anywhere.
#[derive(Debug, Default)]
pub struct Cursor {
    position: Option<Vec2>,
}

impl Cursor {
    /// Create a tracker with no pointer present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pointer position, or `None` while the pointer is off the
    /// surface.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.position = None;
            }
            _ => {}
        }
    }
}
