pub mod handler;

pub use handler::{command_for_key, TickInput};
