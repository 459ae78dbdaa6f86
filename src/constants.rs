use ratatui::style::Color;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Pixel size of one block in the reference renderer contract
pub const BLOCK_SIZE: u32 = 30;

// Terminal columns used per block so cells look square
pub const CELL_W: usize = 2;

pub const TICKS_PER_SECOND: u32 = 5;

pub const GRID_LINE_COLOR: Color = Color::Rgb(50, 50, 50);

pub const PALETTE: [Color; 7] = [
    Color::Rgb(0, 255, 255),  // Cyan
    Color::Rgb(0, 0, 255),    // Blue
    Color::Rgb(255, 165, 0),  // Orange
    Color::Rgb(255, 255, 0),  // Yellow
    Color::Rgb(0, 255, 0),    // Green
    Color::Rgb(128, 0, 128),  // Violet
    Color::Rgb(255, 0, 0),    // Red
];
