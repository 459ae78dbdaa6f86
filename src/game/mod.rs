pub mod board;
pub mod piece;
pub mod shapes;
pub mod snapshot;
pub mod state;

pub use board::{Cell, Grid};
pub use piece::Piece;
pub use shapes::{Catalog, Frame, ShapeDefinition};
pub use snapshot::{BlockRect, LineSegment, Snapshot};
pub use state::{Command, Game, GameState, TickOutcome};
