//! Play a single move on a random board from the terminal.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gem_swap::text::{parse_move, render_with, GlyphSet};
use gem_swap::{Board, BoardConfig, GameRng, DEFAULT_MIN_RUN_LENGTH};

/// Swap two gems and see what matches.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of columns.
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Number of rows.
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Minimum run length that counts as a match.
    #[arg(long, default_value_t = DEFAULT_MIN_RUN_LENGTH)]
    min_run: usize,

    /// Seed for the board; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Glyphs used to draw the board.
    #[arg(long, value_enum, default_value_t = GlyphSet::Emoji)]
    glyphs: GlyphSet,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "starting board");

    let config = BoardConfig::new(args.width, args.height).with_min_run_length(args.min_run);
    let mut board = Board::with_config(config, &mut GameRng::new(seed))?;

    println!("{}", render_with(board.grid(), args.glyphs));

    print!("please enter a move in the format x1,y1 x2,y2: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let mv = parse_move(&line)?;
    if let Err(err) = board.try_move(mv) {
        eprintln!("sorry, that move does not lead to a valid position ({err}).");
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", render_with(board.grid(), args.glyphs));

    let compounds = board.compounds().len();
    if compounds > 0 {
        println!("🎉 this board contains {compounds} compound shapes! 🎉");
    }
    println!("{}", serde_json::to_string_pretty(&board.shapes())?);

    Ok(ExitCode::SUCCESS)
}
