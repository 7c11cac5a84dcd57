use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use textbook_sort::print::Spaced;
use textbook_sort::Strategy;

const SAMPLES: [&[i32]; 2] = [&[10, 8, 80, 5, -5], &[64, 25, 12, 22, 11]];

/// Prints sample arrays before and after sorting them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Only run this strategy (insertion or selection). Runs all by default.
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Values to sort instead of the built-in samples.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Stdout carries the arrays, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_array(out: &mut impl Write, title: &str, v: &[i32]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", Spaced(v))?;
    writeln!(out)
}

/// Writes the before and after listing of every sample for every selected strategy.
fn run(args: Args, out: &mut impl Write) -> anyhow::Result<()> {
    let strategies = match args.strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };

    let samples: Vec<Vec<i32>> = if args.values.is_empty() {
        SAMPLES.iter().map(|sample| sample.to_vec()).collect()
    } else {
        vec![args.values]
    };

    for strategy in strategies {
        tracing::info!(%strategy, stable = strategy.is_stable(), "running");
        writeln!(out, "== {strategy} sort")?;

        for sample in &samples {
            let mut items = sample.clone();

            print_array(out, "Unsorted Array", &items)?;
            strategy.sort_len(&mut items, sample.len())?;
            print_array(out, "Sorted Array", &items)?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();

    let stdout = io::stdout();
    run(args, &mut stdout.lock())
}
