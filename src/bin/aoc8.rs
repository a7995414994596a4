use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use aoclib::{Forest, Report};

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Part1,
    Part2,
    Both,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_enum, default_value = "both")]
    mode: Mode,
    #[arg(short, long)]
    verbose: bool,
    /// Evaluate trees on a thread pool
    #[arg(short, long)]
    parallel: bool,
    /// Puzzle input; read from stdin if not given
    input: Option<PathBuf>,
}

fn read_forest(input: Option<&PathBuf>) -> anyhow::Result<Forest> {
    match input {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?;
            Forest::from_reader(BufReader::new(file))
                .with_context(|| format!("could not load forest from {}", path.display()))
        }
        None => {
            let stdin = std::io::stdin();
            let handle = stdin.lock();
            Forest::from_reader(handle).context("could not load forest from stdin")
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let forest = read_forest(args.input.as_ref())?;
    log::debug!("forest:\n{}", forest.render());
    let start = std::time::Instant::now();
    let report = if args.parallel {
        Report::evaluate_parallel(&forest)?
    } else {
        Report::evaluate(&forest)?
    };
    log::debug!("evaluated in {:?}", start.elapsed());
    match args.mode {
        Mode::Part1 => println!("{}", report.visible_count),
        Mode::Part2 => println!("{}", report.max_scenic_score),
        Mode::Both => {
            println!("{}", report.visible_count);
            println!("{}", report.max_scenic_score);
        }
    }
    Ok(())
}
