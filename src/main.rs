use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout};
use std::path::PathBuf;

use drop_token::{Console, Controller, Engine, EngineConfig};

/// Drop Token - drop tokens into columns, line up a run to win
#[derive(Parser, Debug)]
#[command(name = "drop_token")]
#[command(version)]
struct Cli {
    /// TOML file with `board_size`, `players_count` and `winning_streak`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Width and height of the board
    #[arg(long)]
    board_size: Option<usize>,

    /// Number of players taking turns
    #[arg(long)]
    players: Option<u32>,

    /// Run length needed to win (defaults to the board size)
    #[arg(long)]
    winning_streak: Option<usize>,

    /// Colour the tokens of each player on the board
    #[arg(long)]
    color: bool,
}

impl Cli {
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load_or_default(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(players) = self.players {
            config.players_count = players;
        }
        if let Some(winning_streak) = self.winning_streak {
            config.winning_streak = Some(winning_streak);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // stdout is the game surface, keep diagnostics on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.engine_config()?;
    let engine = Engine::new(config).context("invalid game configuration")?;
    info!(?config, "starting game");

    let stdin = stdin();
    let console = Console::new(stdin.lock(), stdout()).with_style(cli.color);
    let (engine, _) = Controller::new(engine, console).run()?;

    info!(status = %engine.status(), tokens = engine.token_count(), "game closed");
    Ok(())
}
