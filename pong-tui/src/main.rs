//! Terminal frontend: the frame driver, input routing, and config glue
//! around the `pong-core` simulation.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    ExecutableCommand,
};
use ratatui::{layout::Rect, DefaultTerminal};

use pong_core::config::GameConfig;
use pong_core::game::GameManager;

mod ui;

/// Terminal Pong against a ball-chasing computer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// YAML file the game tunables are loaded from and saved to.
    #[arg(long, default_value = "pong.yaml")]
    config: PathBuf,

    /// Seed for the serve RNG; omit for a different game every run.
    #[arg(long)]
    seed: Option<u64>,
}

/// Keyboard fallback step for terminals without mouse reporting.
const NUDGE: f64 = 0.05;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = GameConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    let mut game = match args.seed {
        Some(seed) => GameManager::with_seed(config, seed),
        None => GameManager::new(config),
    };

    let mut terminal = ratatui::init();
    let mut stdout = io::stdout();
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(EnableFocusChange)?;

    let result = run(&mut terminal, &mut game);

    stdout.execute(DisableFocusChange)?;
    stdout.execute(DisableMouseCapture)?;
    ratatui::restore();

    game.config()
        .save(&args.config)
        .with_context(|| format!("saving config to {}", args.config.display()))?;

    if result.is_ok() {
        println!(
            "Final score: {} {} - {} {}",
            game.player().side.label(),
            game.player().score,
            game.computer().score,
            game.computer().side.label(),
        );
        io::stdout().flush()?;
    }
    result
}

fn run(terminal: &mut DefaultTerminal, game: &mut GameManager) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        // Drain everything pending so a burst of mouse moves costs one frame
        while event::poll(Duration::from_millis(5))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Enter => game.toggle_status(),
                    KeyCode::Up => game.set_player_target(game.player().target - NUDGE),
                    KeyCode::Down => game.set_player_target(game.player().target + NUDGE),
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        if let Some(fraction) = ui::row_fraction(area, mouse.row) {
                            game.set_player_target(fraction);
                        }
                    }
                    MouseEventKind::Down(_) => game.toggle_status(),
                    _ => {}
                },
                Event::FocusLost => game.lose_focus(),
                _ => {}
            }
        }

        let dt = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();
        if dt > 0.0 {
            game.update(dt);
        }

        terminal.draw(|frame| ui::draw(frame, game))?;
    }
}
