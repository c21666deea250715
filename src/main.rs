use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tabiya_cli::{Session, SessionConfig};
use tabiya_core::{Glyphs, STARTING_FEN};

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player chess in the terminal", long_about = None)]
struct Args {
    /// FEN piece placement to start from (White moves first)
    #[arg(long, default_value = STARTING_FEN)]
    fen: String,

    /// Draw pieces as FEN letters instead of chess symbols
    #[arg(long)]
    ascii: bool,

    /// Do not redraw the board after every move
    #[arg(long)]
    quiet_board: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    info!("tabiya starting");

    let config = SessionConfig {
        start_fen: args.fen,
        glyphs: if args.ascii { Glyphs::Ascii } else { Glyphs::Unicode },
        show_board_after_move: !args.quiet_board,
    };

    let mut session = Session::new(config).context("cannot start game")?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;

    info!("tabiya shutting down");
    Ok(())
}
