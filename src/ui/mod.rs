pub mod renderer;

pub use renderer::{ui, Renderer, TerminalRenderer};
