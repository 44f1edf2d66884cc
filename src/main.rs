mod cli;
mod input;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Variant};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use input::{command_for, Command};
use maze_escape::{DynamicGame, MazeGame, MoveOutcome, PredefinedGame};
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::Renderer;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const INSTRUCTIONS: [&str; 4] = [
    "Welcome to Maze Escape!",
    "Find the key and avoid the traps to reach the exit.",
    "",
    "Press any key to begin (q to quit).",
];

const PLAY_AGAIN: &str = "Press Enter to play again or Esc to quit.";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let mut game: Box<dyn MazeGame> = match cli.variant {
        Variant::Dynamic => Box::new(DynamicGame::new(cli.config())?),
        Variant::Predefined => Box::new(PredefinedGame::new()?),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(variant = ?cli.variant, seed = ?cli.seed, reveal = cli.reveal, "starting maze escape");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, game.as_mut(), &mut rng, &cli);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    if let Err(err) = &result {
        error!(%err, "game aborted");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run(stdout: &mut Stdout, game: &mut dyn MazeGame, rng: &mut StdRng, cli: &Cli) -> Result<()> {
    if cli.variant == Variant::Dynamic {
        render::render_text(stdout, &INSTRUCTIONS)?;
        if next_command()? == Command::Quit {
            return Ok(());
        }
    }

    let (width, height) = (game.grid().width(), game.grid().height());
    loop {
        game.generate(rng)?;
        let mut renderer = Renderer::new(width, height, cli.reveal);
        if !play_round(stdout, game, &mut renderer)? {
            return Ok(());
        }
        info!("round won");
        render::render(stdout, game, &mut renderer, PLAY_AGAIN)?;
        loop {
            match next_command()? {
                Command::Confirm => break,
                Command::Quit => return Ok(()),
                _ => {}
            }
        }
    }
}

/// Plays until the player escapes (`true`) or quits (`false`).
fn play_round(stdout: &mut Stdout, game: &mut dyn MazeGame, renderer: &mut Renderer) -> Result<bool> {
    let mut message = "";
    render::render(stdout, game, renderer, message)?;
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match command_for(key.code) {
                Command::Quit => return Ok(false),
                Command::Move(dir) => {
                    let outcome = game.move_player(dir);
                    message = outcome.message().unwrap_or("");
                    render::render(stdout, game, renderer, message)?;
                    if outcome == MoveOutcome::Escaped {
                        return Ok(true);
                    }
                }
                Command::Confirm | Command::Ignore => {}
            },
            Event::Resize(_, _) => {
                renderer.invalidate();
                render::render(stdout, game, renderer, message)?;
            }
            _ => {}
        }
    }
}

/// Blocks until the next key press and maps it.
fn next_command() -> io::Result<Command> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(command_for(key.code));
            }
        }
    }
}
