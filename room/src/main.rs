mod logger;
mod error;
mod types;
mod consts;
mod config;
mod console;
mod room;

mod player;
mod observer;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use config::Settings;
use observer::{Mode, Observer};
use protocol::Difficulty;
use types::Request;

/// Two-player draw and guess.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// TOML settings file
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Directory holding easymode.txt and hardmode.txt
    #[clap(short, long)]
    words_dir: Option<PathBuf>,
    /// Skip the difficulty prompt
    #[clap(short, long)]
    difficulty: Option<Difficulty>,
    /// Read requests and write events as JSON lines
    #[clap(long)]
    json: bool,
    /// Seed for word picks
    #[clap(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(dir) = args.words_dir {
        settings.words_dir = dir;
    }
    let mut room = room::Room::new(settings.room_config(args.seed)?);
    let room_tx = room.get_tx();
    info!(words_dir = %settings.words_dir.display(), "room ready");

    let mode = if args.json { Mode::Json } else { Mode::Text };
    let mut observer = Observer::stdout(mode);
    match args.difficulty {
        Some(difficulty) => room_tx.send(Request::DifficultyChosen(difficulty)).await?,
        None if mode == Mode::Text => {
            observer.send(&protocol::Response::Notice {
                msg: "Pictionary: draw and guess! Choose a difficulty: easy or hard".to_string(),
            })?;
        }
        None => {}
    }

    let json = args.json;
    std::thread::spawn(move || console::forward_stdin(room_tx, json));
    room.run(&mut observer).await;
    Ok(())
}
