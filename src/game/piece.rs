use std::sync::Arc;

use ratatui::style::Color;

use crate::game::shapes::{Frame, ShapeDefinition};

/// The falling piece. Movement never mutates in place: `translated` and
/// `rotated` return candidates that the caller commits or drops.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub shape: Arc<ShapeDefinition>,
    pub x: i32,
    pub y: i32,
    pub rotation: usize,
    pub color: Color,
}

impl Piece {
    /// Origin at column `width / 2 - 1`, row 0, first frame. Not validated.
    pub fn spawn(shape: Arc<ShapeDefinition>, color: Color, grid_width: usize) -> Self {
        Self {
            shape,
            x: (grid_width / 2) as i32 - 1,
            y: 0,
            rotation: 0,
            color,
        }
    }

    pub fn current_frame(&self) -> &Frame {
        self.shape.frame(self.rotation)
    }

    /// Absolute `(x, y)` grid positions of the occupied cells.
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.current_frame()
            .occupied()
            .map(move |(cx, cy)| (self.x + cx, self.y + cy))
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let mut next = self.clone();
        next.x += dx;
        next.y += dy;
        next
    }

    pub fn rotated(&self) -> Self {
        let mut next = self.clone();
        next.rotation = (self.rotation + 1) % self.shape.frame_count();
        next
    }
}
