use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use snake_arcade::game::GameConfig;
use snake_arcade::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Classic Snake arcade game for the terminal")]
struct Cli {
    /// TOML file with play area settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play area width in grid cells
    #[arg(long)]
    width: Option<usize>,

    /// Play area height in grid cells
    #[arg(long)]
    height: Option<usize>,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Failed to initialize logger")
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    config.resize(cli.width, cli.height)?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;
    let config = build_config(&cli)?;
    log::info!("starting with {:?}", config);

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
