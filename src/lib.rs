//! Falling-block puzzle engine with a terminal front end.
//!
//! [`game`] holds the simulation: the shape catalog, the grid, the active
//! piece and the per-tick state machine. [`input`] and [`ui`] adapt it to a
//! crossterm/ratatui terminal.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;

pub use config::GameConfig;
pub use error::{CatalogError, ConfigError};
pub use game::{Catalog, Cell, Command, Game, GameState, Grid, Piece, ShapeDefinition, Snapshot};
