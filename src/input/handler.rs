use crossterm::event::{KeyCode, KeyEventKind};

use crate::game::Command;

pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Key events seen between two ticks, reduced to at most one command.
/// The first movement key wins; `Quit` overrides anything.
#[derive(Debug, Default)]
pub struct TickInput {
    pending: Option<Command>,
    quit: bool,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, code: KeyCode, kind: KeyEventKind) {
        if kind == KeyEventKind::Release {
            return;
        }
        match command_for_key(code) {
            Some(Command::Quit) => self.quit = true,
            Some(command) => {
                if self.pending.is_none() {
                    self.pending = Some(command);
                }
            }
            None => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Hands over this tick's command and clears the slot for the next tick.
    pub fn take(&mut self) -> Option<Command> {
        if self.quit {
            return Some(Command::Quit);
        }
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_moves() {
        assert_eq!(command_for_key(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(command_for_key(KeyCode::Right), Some(Command::MoveRight));
        assert_eq!(command_for_key(KeyCode::Down), Some(Command::SoftDrop));
        assert_eq!(command_for_key(KeyCode::Up), Some(Command::Rotate));
        assert_eq!(command_for_key(KeyCode::Esc), Some(Command::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for_key(KeyCode::Char(' ')), None);
        assert_eq!(command_for_key(KeyCode::Enter), None);
    }

    #[test]
    fn first_command_of_a_tick_wins() {
        let mut input = TickInput::new();
        input.handle_key(KeyCode::Left, KeyEventKind::Press);
        input.handle_key(KeyCode::Up, KeyEventKind::Press);
        assert_eq!(input.take(), Some(Command::MoveLeft));
        assert_eq!(input.take(), None);
    }

    #[test]
    fn releases_do_not_queue_commands() {
        let mut input = TickInput::new();
        input.handle_key(KeyCode::Right, KeyEventKind::Release);
        assert_eq!(input.take(), None);
    }

    #[test]
    fn quit_overrides_pending_move() {
        let mut input = TickInput::new();
        input.handle_key(KeyCode::Down, KeyEventKind::Press);
        input.handle_key(KeyCode::Char('q'), KeyEventKind::Press);
        assert!(input.quit_requested());
        assert_eq!(input.take(), Some(Command::Quit));
    }
}
