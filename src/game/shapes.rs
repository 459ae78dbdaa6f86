use std::sync::Arc;

use crate::error::CatalogError;

/// One rotation state of a shape: a rectangular occupancy matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Frame {
    fn from_rows(shape: &str, frame: usize, rows: &[&[u8]]) -> Result<Self, CatalogError> {
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        if cols == 0 {
            return Err(CatalogError::EmptyFrame { shape: shape.to_string(), frame });
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(CatalogError::RaggedFrame {
                    shape: shape.to_string(),
                    frame,
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().map(|&v| v != 0));
        }

        if !cells.iter().any(|&c| c) {
            return Err(CatalogError::NoOccupiedCells { shape: shape.to_string(), frame });
        }

        Ok(Self { rows: rows.len(), cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Occupied cells as `(col, row)` offsets from the frame origin.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell)
            .map(move |(i, _)| ((i % self.cols) as i32, (i / self.cols) as i32))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeDefinition {
    name: String,
    frames: Vec<Frame>,
}

impl ShapeDefinition {
    /// Builds a shape from raw 0/1 rows, one slice of rows per rotation frame.
    pub fn new(name: &str, frames: &[&[&[u8]]]) -> Result<Self, CatalogError> {
        if frames.is_empty() {
            return Err(CatalogError::NoFrames { shape: name.to_string() });
        }
        let frames = frames
            .iter()
            .enumerate()
            .map(|(i, rows)| Frame::from_rows(name, i, rows))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { name: name.to_string(), frames })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, rotation: usize) -> &Frame {
        &self.frames[rotation % self.frames.len()]
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

const BAR: &[&[&[u8]]] = &[
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const SQUARE: &[&[&[u8]]] = &[&[&[1, 1], &[1, 1]]];

const T: &[&[&[u8]]] = &[
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
];

const L: &[&[&[u8]]] = &[
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
];

const MIRRORED_L: &[&[&[u8]]] = &[
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 0], &[1, 0], &[1, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
];

/// The immutable set of piece templates a game draws from.
#[derive(Clone, Debug)]
pub struct Catalog {
    shapes: Vec<Arc<ShapeDefinition>>,
}

impl Catalog {
    pub fn new(shapes: Vec<ShapeDefinition>) -> Result<Self, CatalogError> {
        if shapes.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(Self {
            shapes: shapes.into_iter().map(Arc::new).collect(),
        })
    }

    /// Bar, square, T, L and mirrored L.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(vec![
            ShapeDefinition::new("bar", BAR)?,
            ShapeDefinition::new("square", SQUARE)?,
            ShapeDefinition::new("t", T)?,
            ShapeDefinition::new("l", L)?,
            ShapeDefinition::new("mirrored-l", MIRRORED_L)?,
        ])
    }

    pub fn all_shapes(&self) -> &[Arc<ShapeDefinition>] {
        &self.shapes
    }

    pub fn find(&self, name: &str) -> Option<&Arc<ShapeDefinition>> {
        self.shapes.iter().find(|shape| shape.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_frame_fails_fast() {
        let err = ShapeDefinition::new("bad", &[&[&[1, 1], &[1]]]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::RaggedFrame {
                shape: "bad".to_string(),
                frame: 0,
                row: 1,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn blank_frame_fails_fast() {
        let err = ShapeDefinition::new("blank", &[&[&[1]], &[&[0, 0]]]).unwrap_err();
        assert_eq!(err, CatalogError::NoOccupiedCells { shape: "blank".to_string(), frame: 1 });
    }

    #[test]
    fn shape_without_frames_fails_fast() {
        let err = ShapeDefinition::new("none", &[]).unwrap_err();
        assert_eq!(err, CatalogError::NoFrames { shape: "none".to_string() });
    }

    #[test]
    fn frame_without_rows_fails_fast() {
        let err = ShapeDefinition::new("hollow", &[&[]]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyFrame { shape: "hollow".to_string(), frame: 0 });
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::EmptyCatalog);
    }

    #[test]
    fn occupied_offsets_are_col_row() {
        let shape = ShapeDefinition::new("t", T).unwrap();
        let offsets: Vec<_> = shape.frame(0).occupied().collect();
        assert_eq!(offsets, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
