use ratatui::style::Color;

use crate::game::board::{Cell, Grid};
use crate::game::piece::Piece;
use crate::game::state::GameState;

/// A pixel-space square covering one occupied cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub color: Color,
}

/// A pixel-space grid line from `(x0, y0)` to `(x1, y1)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineSegment {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

/// Drawable view of the board: locked cells with the falling piece on top.
#[derive(Clone, PartialEq, Debug)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Vec<Cell>>,
    pub game_state: GameState,
}

impl Snapshot {
    pub fn capture(grid: &Grid, piece: &Piece, game_state: GameState) -> Self {
        let mut cells = grid.rows().to_vec();

        // Cells above the top edge are not drawn
        for (x, y) in piece.blocks() {
            if x >= 0 && y >= 0 && (x as usize) < grid.width() && (y as usize) < grid.height() {
                cells[y as usize][x as usize] = Cell::Filled(piece.color);
            }
        }

        Self {
            width: grid.width(),
            height: grid.height(),
            cells,
            game_state,
        }
    }

    pub fn window_size(&self, block_size: u32) -> (u32, u32) {
        (self.width as u32 * block_size, self.height as u32 * block_size)
    }

    pub fn block_rects(&self, block_size: u32) -> Vec<BlockRect> {
        let mut rects = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Cell::Filled(color) = cell {
                    rects.push(BlockRect {
                        x: col as u32 * block_size,
                        y: row as u32 * block_size,
                        size: block_size,
                        color: *color,
                    });
                }
            }
        }
        rects
    }

    pub fn grid_lines(&self, block_size: u32) -> Vec<LineSegment> {
        let (w, h) = self.window_size(block_size);
        let vertical = (0..self.width as u32).map(|col| LineSegment {
            x0: col * block_size,
            y0: 0,
            x1: col * block_size,
            y1: h,
        });
        let horizontal = (0..self.height as u32).map(|row| LineSegment {
            x0: 0,
            y0: row * block_size,
            x1: w,
            y1: row * block_size,
        });
        vertical.chain(horizontal).collect()
    }
}
