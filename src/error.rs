use thiserror::Error;

/// Malformed shape data, rejected when a catalog is built.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CatalogError {
    #[error("catalog contains no shapes")]
    EmptyCatalog,
    #[error("shape '{shape}' has no rotation frames")]
    NoFrames { shape: String },
    #[error("shape '{shape}' frame {frame} has no rows")]
    EmptyFrame { shape: String, frame: usize },
    #[error("shape '{shape}' frame {frame} row {row} has {found} cells, expected {expected}")]
    RaggedFrame {
        shape: String,
        frame: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("shape '{shape}' frame {frame} has no occupied cells")]
    NoOccupiedCells { shape: String, frame: usize },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
    #[error("block size must be positive")]
    ZeroBlockSize,
}
