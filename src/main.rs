use anyhow::{Context, Result};
use clap::Parser;
use neon_snake::game::GameConfig;
use neon_snake::modes::HumanMode;
use neon_snake::storage::{shared, FileStore, MemoryStore, SharedStore};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "neon-snake")]
#[command(version, about = "Snake in the terminal, with dash, history and themes")]
struct Cli {
    /// TOML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width and height
    #[arg(long)]
    grid_size: Option<usize>,

    /// Starting tick interval in milliseconds
    #[arg(long)]
    initial_speed: Option<u64>,

    /// Where history, preferences and the log file are kept
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Do not read or write any saved data
    #[arg(long)]
    no_save: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create game configuration: file first, then CLI overrides
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(initial_speed) = cli.initial_speed {
        config.initial_speed_ms = initial_speed;
    }
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid game configuration")?;

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|dir| dir.join("neon-snake")));

    if let Some(dir) = &data_dir {
        if let Err(err) = init_logging(dir) {
            eprintln!("Logging disabled: {:#}", err);
        }
    }
    info!("Starting with {:?}", config);

    let store = open_store(data_dir.as_deref(), cli.no_save);

    let mut human_mode = HumanMode::new(config, store)?;
    human_mode.run().await?;

    info!("Bye");
    Ok(())
}

/// Log to a file; the terminal itself is taken by the game
fn init_logging(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    let path = dir.join("neon-snake.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "neon_snake=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn open_store(data_dir: Option<&Path>, no_save: bool) -> SharedStore {
    let Some(dir) = data_dir.filter(|_| !no_save) else {
        return shared(MemoryStore::new());
    };

    match FileStore::open(dir.join("store.json")) {
        Ok(store) => {
            info!("Using save file {:?}", store.path());
            shared(store)
        }
        Err(err) => {
            warn!("Saved data unavailable, playing without it: {}", err);
            shared(MemoryStore::new())
        }
    }
}
