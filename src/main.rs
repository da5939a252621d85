use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use snake_arcade::game::GameConfig;
use snake_arcade::modes::PlayMode;
use snake_arcade::score::FileScoreStore;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Grid-based arcade snake game")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Width and height of the square grid, in cells
    #[arg(long, default_value = "15")]
    grid_size: usize,

    /// Simulation tick interval in milliseconds
    #[arg(long, default_value = "170")]
    tick_ms: u64,

    /// File the high score is persisted to
    #[arg(long, default_value = "highscore.txt")]
    highscore_file: PathBuf,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Play,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the stdout TUI stays clean; silent unless
    // RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Create game configuration from CLI arguments
    let config = GameConfig::new(cli.grid_size).with_tick_ms(cli.tick_ms);

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Play => {
            let store = FileScoreStore::new(cli.highscore_file);
            let mut play_mode = PlayMode::new(config, store);
            play_mode.run().await?;
        }
    }

    Ok(())
}
