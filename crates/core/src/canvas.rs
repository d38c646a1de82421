//! Drawing target abstraction.
//!
//! The table only ever copies sprite-sheet regions onto the table surface, so
//! the whole drawing surface it needs is a single "blit" call.

use crate::types::Rect;

/// Something the table can draw card sprites onto.
pub trait Canvas {
    /// Copy the sprite-sheet region `src` onto the table region `dst`.
    fn draw_sprite(&mut self, src: Rect, dst: Rect);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_sprite(&mut self, src: Rect, dst: Rect) {
        (**self).draw_sprite(src, dst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub src: Rect,
    pub dst: Rect,
}

/// Canvas that remembers every draw call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_sprite(&mut self, src: Rect, dst: Rect) {
        self.calls.push(DrawCall { src, dst });
    }
}
