use std::{
    fs::File,
    io::stdout,
    time::{Duration, Instant},
};

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use gridfall::input::TickInput;
use gridfall::ui::{Renderer, TerminalRenderer};
use gridfall::{Catalog, Command, Game, GameConfig};

// Logs go to a file so they never draw over the alternate screen
fn init_logging() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create("gridfall.log").context("creating gridfall.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = GameConfig::default();
    config.validate()?;
    let catalog = Catalog::standard()?;
    let mut game = Game::new(catalog, config.width, config.height);

    // Setup terminal
    terminal::enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    let mut renderer = TerminalRenderer::new(terminal);

    let result = run(&mut game, &mut renderer, &config);

    // Cleanup runs even when the loop failed
    terminal::disable_raw_mode()?;
    execute!(renderer.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    renderer.terminal_mut().show_cursor()?;

    result?;
    if game.is_over() {
        println!("Game Over");
    }
    Ok(())
}

fn run(game: &mut Game, renderer: &mut impl Renderer, config: &GameConfig) -> anyhow::Result<()> {
    let tick_interval = config.tick_interval();
    let mut input = TickInput::new();
    let mut running = true;

    info!("starting {}x{} game at {} ticks/s", config.width, config.height, config.ticks_per_second);
    let (px_w, px_h) = game.snapshot().window_size(config.block_size);
    info!("reference window {}x{} px", px_w, px_h);
    renderer.draw(&game.snapshot())?;

    while running {
        let deadline = Instant::now() + tick_interval;

        // Collect keys until the tick is due
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining == Duration::ZERO || input.quit_requested() {
                break;
            }
            if event::poll(remaining)? {
                if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                    input.handle_key(code, kind);
                }
            }
        }

        let command = input.take();
        if command == Some(Command::Quit) {
            info!("quit requested");
            break;
        }

        let outcome = game.tick(command);
        renderer.draw(&game.snapshot())?;

        if outcome.game_over {
            running = false;
        }
    }

    Ok(())
}
