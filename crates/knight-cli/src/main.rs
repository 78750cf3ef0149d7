// Knight path driver: two square labels in, shortest knight path out

use anyhow::{Context, Result};
use clap::Parser;
use knight_core::{Board, KnightError, PathFinder, PathJson, Square};

/// Exit status for a malformed square label
const EXIT_INVALID_LABEL: i32 = 2;
/// Exit status for no path and any other failure
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "knight-path", author, version)]
#[command(about = "Print the shortest knight path between two squares of an 8x8 board")]
struct Args {
    /// Start square (e.g. a8)
    start: String,

    /// Target square (e.g. h2)
    end: String,

    /// Squares the knight may not enter, comma separated (e.g. c7,b6)
    #[arg(long, value_delimiter = ',')]
    blocked: Vec<String>,

    /// Print the path as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_logger(args.debug);

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

fn init_logger(debug: bool) {
    use std::io::Write;
    let log_level = if debug { "debug" } else { "warn" };

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

fn run(args: &Args) -> Result<String> {
    // ラベルはすべて探索前に検証する
    let start = Square::from_label(&args.start).context("invalid start square")?;
    let end = Square::from_label(&args.end).context("invalid target square")?;
    let board = Board::from_labels(&args.blocked).context("invalid --blocked square")?;

    log::info!("searching {start} -> {end} ({} blocked squares)", board.blocked_count());
    let finder = PathFinder::new(board, start, end);
    let path = finder.run().with_context(|| format!("search {start} -> {end} failed"))?;
    log::info!("found {} move path", path.moves());

    if args.json {
        let json = serde_json::to_string(&PathJson::from(&path)).context("failed to encode path")?;
        Ok(json)
    } else {
        Ok(path.to_string())
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.chain().find_map(|e| e.downcast_ref::<KnightError>()) {
        Some(KnightError::InvalidLabel { .. }) => EXIT_INVALID_LABEL,
        _ => EXIT_FAILURE,
    }
}
