//! Replays recorded board snapshots through the bot.
//!
//! Prints one JSON line per turn to stdout; logs go to stderr and follow
//! `RUST_LOG`.
mod replay;

use std::path::PathBuf;

use anyhow::Result;
use board::ObjectId;
use bot::{BotConfig, ConfigLoader, GreedyBot};
use clap::Parser;

/// Run the greedy bot over a snapshot file
#[derive(Parser)]
#[command(name = "replay")]
#[command(about = "Replay board snapshots through the diamond bot", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with one board snapshot or an array of them
    #[arg(short, long, value_name = "FILE")]
    snapshots: PathBuf,

    /// Id of the bot to drive
    #[arg(short, long, value_name = "ID")]
    bot_id: u32,

    /// TOML file overriding the default thresholds
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the TOML file, then `BOT_*` environment overrides.
    fn bot_config(&self) -> Result<BotConfig> {
        let Some(path) = &self.config else {
            return Ok(BotConfig::from_env());
        };
        let mut config = ConfigLoader::load(path)?;
        config.apply_env();
        Ok(config)
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let bot_config = cli.bot_config()?;

    let boards = replay::load_snapshots(&cli.snapshots)?;
    tracing::info!(turns = boards.len(), file = %cli.snapshots.display(), "loaded snapshots");

    let mut bot = GreedyBot::new(bot_config);
    tracing::debug!(config = ?bot.config(), "bot configuration");
    let stdout = std::io::stdout();
    replay::replay(&mut bot, ObjectId(cli.bot_id), &boards, &mut stdout.lock())?;
    Ok(())
}
