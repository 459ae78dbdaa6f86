use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;

use crate::constants::PALETTE;
use crate::game::board::Grid;
use crate::game::piece::Piece;
use crate::game::shapes::Catalog;
use crate::game::snapshot::Snapshot;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Running,
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}

/// What happened during one call to [`Game::tick`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickOutcome {
    pub command_applied: bool,
    pub locked: bool,
    pub lines_cleared: usize,
    pub game_over: bool,
}

/// One grid plus exactly one active piece.
pub struct Game {
    grid: Grid,
    current_piece: Piece,
    game_state: GameState,
    catalog: Catalog,
    rng: StdRng,
}

impl Game {
    pub fn new(catalog: Catalog, width: usize, height: usize) -> Self {
        Self::from_parts(catalog, Grid::new(width, height), StdRng::from_entropy())
    }

    pub fn with_seed(catalog: Catalog, width: usize, height: usize, seed: u64) -> Self {
        Self::from_parts(catalog, Grid::new(width, height), StdRng::seed_from_u64(seed))
    }

    /// Starts from a prepared grid. The first piece is still checked, so a
    /// grid blocked at the spawn point starts in `GameOver`.
    pub fn with_grid(catalog: Catalog, grid: Grid, seed: u64) -> Self {
        Self::from_parts(catalog, grid, StdRng::seed_from_u64(seed))
    }

    fn from_parts(catalog: Catalog, grid: Grid, mut rng: StdRng) -> Self {
        let current_piece = Self::random_piece(&catalog, &mut rng, grid.width());
        let game_state = if grid.is_valid_placement(&current_piece) {
            GameState::Running
        } else {
            GameState::GameOver
        };

        Self {
            grid,
            current_piece,
            game_state,
            catalog,
            rng,
        }
    }

    fn random_piece(catalog: &Catalog, rng: &mut StdRng, width: usize) -> Piece {
        // Catalog::new guarantees at least one shape
        let shapes = catalog.all_shapes();
        let shape = shapes[rng.gen_range(0..shapes.len())].clone();
        let color = PALETTE.choose(rng).copied().unwrap_or(Color::White);
        Piece::spawn(shape, color, width)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current_piece
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn is_over(&self) -> bool {
        self.game_state == GameState::GameOver
    }

    pub fn is_valid_placement(&self, piece: &Piece) -> bool {
        self.grid.is_valid_placement(piece)
    }

    /// Commits `candidate` only if it fits; the current piece is untouched otherwise.
    fn commit_if_valid(&mut self, candidate: Piece) -> bool {
        if self.grid.is_valid_placement(&candidate) {
            self.current_piece = candidate;
            true
        } else {
            trace!(
                "rejected move to ({}, {}) rotation {}",
                candidate.x,
                candidate.y,
                candidate.rotation
            );
            false
        }
    }

    pub fn try_translate(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_over() {
            return false;
        }
        let candidate = self.current_piece.translated(dx, dy);
        self.commit_if_valid(candidate)
    }

    /// Advances to the next frame. No kicks: a colliding rotation is dropped.
    pub fn try_rotate(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        let candidate = self.current_piece.rotated();
        self.commit_if_valid(candidate)
    }

    /// `Quit` belongs to the loop driving the game and is a no-op here.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_translate(-1, 0),
            Command::MoveRight => self.try_translate(1, 0),
            Command::SoftDrop => self.try_translate(0, 1),
            Command::Rotate => self.try_rotate(),
            Command::Quit => false,
        }
    }

    /// Locks the current piece where it stands and replaces it. Returns false
    /// and ends the game if the replacement does not fit.
    fn lock_and_spawn(&mut self) -> bool {
        self.grid.lock_piece(&self.current_piece);
        debug!(
            "locked '{}' at ({}, {})",
            self.current_piece.shape.name(),
            self.current_piece.x,
            self.current_piece.y
        );

        self.current_piece = Self::random_piece(&self.catalog, &mut self.rng, self.grid.width());
        if !self.grid.is_valid_placement(&self.current_piece) {
            self.game_state = GameState::GameOver;
            info!("game over: '{}' cannot spawn", self.current_piece.shape.name());
            return false;
        }
        debug!("spawned '{}'", self.current_piece.shape.name());
        true
    }

    /// One step: optional command, gravity, lock and spawn on landing, then
    /// line clearing. Does nothing once the game is over.
    pub fn tick(&mut self, command: Option<Command>) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.is_over() {
            outcome.game_over = true;
            return outcome;
        }

        if let Some(command) = command {
            outcome.command_applied = self.apply_command(command);
        }

        if !self.try_translate(0, 1) {
            outcome.locked = true;
            if !self.lock_and_spawn() {
                outcome.game_over = true;
                return outcome;
            }
        }

        outcome.lines_cleared = self.grid.clear_full_lines();
        if outcome.lines_cleared > 0 {
            info!("cleared {} line(s)", outcome.lines_cleared);
        }
        outcome
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.grid, &self.current_piece, self.game_state)
    }
}
