//! Batch entry point: read a tree and an interval, delete the interval and
//! print the shape of the reassembled tree.
#![forbid(unsafe_code)]

use std::{error::Error, fs::File, io, path::PathBuf};

use clap::Parser;
use interprune::reader::Input;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "interprune",
    version,
    about = "Delete a closed key interval from a binary search tree and report its shape",
    long_about = "Reads three lines: the number of keys, the keys in insertion order, and \
                  the interval bounds `lo hi`. Prints `height width`, where width is the \
                  number of nodes on the level above the deepest level."
)]
struct Cli {
    #[arg(
        long,
        short,
        value_name = "FILE",
        help = "Read input from FILE instead of stdin"
    )]
    input: Option<PathBuf>,

    #[arg(long, help = "Also print the reassembled tree as a Graphviz digraph")]
    dot: bool,

    #[arg(
        long,
        value_name = "FILTER",
        help = "Log filter directives, overriding RUST_LOG (default: warn)"
    )]
    log_level: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let input = match &cli.input {
        Some(path) => Input::read(File::open(path)?)?,
        None => Input::read(io::stdin().lock())?,
    };
    info!(keys = input.keys.len(), interval = %input.interval, "input read");

    let mut tree = input.tree()?;
    let pruned = tree.delete_interval(&input.interval)?;
    info!(
        deleted = pruned.deleted,
        fragments = pruned.fragments,
        height = pruned.shape.height,
        "interval deleted"
    );

    println!("{} {}", pruned.shape.height, pruned.shape.penultimate_width);
    if cli.dot {
        print!("{}", tree.dot());
    }

    Ok(())
}

fn init_tracing(directives: Option<&str>) -> Result<(), Box<dyn Error>> {
    let filter = match directives {
        Some(v) => EnvFilter::try_new(v)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Logs go to stderr, keeping stdout for the result.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| e as Box<dyn Error>)?;

    Ok(())
}
