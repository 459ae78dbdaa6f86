use std::io::Stdout;

use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::constants::{CELL_W, GRID_LINE_COLOR};
use crate::game::{Cell, GameState, Snapshot};

/// Anything that can present a board snapshot.
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot) -> anyhow::Result<()>;
}

pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalRenderer {
    pub fn new(terminal: Terminal<CrosstermBackend<Stdout>>) -> Self {
        Self { terminal }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        self.terminal.draw(|f| ui(f, snapshot))?;
        Ok(())
    }
}

pub fn ui(f: &mut Frame, snapshot: &Snapshot) {
    let size = f.size();

    let board_height = snapshot.height as u16 + 2;
    let board_width = (snapshot.width * CELL_W) as u16 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_height),
            Constraint::Min(0),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_width),
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    render_board(f, snapshot, board_area);

    if snapshot.game_state == GameState::GameOver {
        render_game_over_overlay(f, board_area);
    }
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let filler = " ".repeat(CELL_W.saturating_sub(1));
    let block = "█".repeat(CELL_W);

    let board_lines: Vec<Line> = snapshot
        .cells
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| match cell {
                    // Grid line dot in the corner of each empty cell
                    Cell::Empty => Span::styled(
                        format!("·{}", filler),
                        Style::default().fg(GRID_LINE_COLOR),
                    ),
                    Cell::Filled(color) => {
                        Span::styled(block.clone(), Style::default().fg(*color))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("gridfall"));

    f.render_widget(board_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 25, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}
