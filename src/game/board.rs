use ratatui::style::Color;

use crate::game::piece::Piece;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// Locked cells, row 0 at the top. Dimensions are fixed at creation.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Writes a cell; out-of-range coordinates are ignored and return false.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .map_or(false, |row| row.iter().all(Cell::is_filled))
    }

    /// Columns must stay in `[0, width)` and rows below `height`. Rows above
    /// the top edge are allowed and skip the occupancy check.
    pub fn is_valid_placement(&self, piece: &Piece) -> bool {
        for (x, y) in piece.blocks() {
            if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
                return false;
            }
            if y >= 0 && self.rows[y as usize][x as usize] != Cell::Empty {
                return false;
            }
        }
        true
    }

    /// Writes the piece color into every cell it covers. Callers validate
    /// first; cells above the top edge are dropped.
    pub fn lock_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.blocks() {
            if x >= 0 && y >= 0 {
                self.set(x as usize, y as usize, Cell::Filled(piece.color));
            }
        }
    }

    /// Removes every full row, inserting an empty row on top for each, and
    /// returns how many were removed. Surviving rows keep their order.
    pub fn clear_full_lines(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !row.iter().all(Cell::is_filled));
        let cleared = before - self.rows.len();

        for _ in 0..cleared {
            self.rows.insert(0, vec![Cell::Empty; self.width]);
        }

        cleared
    }
}
