#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use range_remap::run_chain;

mod almanac;
mod chart;

use almanac::Almanac;

/// Seed almanac range solver and transition chart renderer.
#[derive(Parser, Debug)]
struct Cli {
    /// The almanac input file to solve.
    input: PathBuf,

    /// Write an SVG chart of the range transitions to FILE.
    #[arg(short, long, value_name = "FILE")]
    chart: Option<PathBuf>,

    /// Measure and print the duration of solving.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,
}

/// Read the given input file to a string.
fn get_input(input_file: &PathBuf) -> Result<String> {
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

fn format_duration(duration: Duration) -> String {
    const ONE_SECOND: Duration = Duration::from_secs(1);
    const ONE_MILLISECOND: Duration = Duration::from_millis(1);
    const ONE_MICROSECOND: Duration = Duration::from_micros(1);
    const DECIMAL_PLACES: usize = 3;

    if duration >= ONE_SECOND {
        format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f32())
    } else {
        let nanos = duration.subsec_nanos();
        if duration >= ONE_MILLISECOND {
            format!("{:.*} milliseconds", DECIMAL_PLACES, f64::from(nanos) / 1e6)
        } else if duration >= ONE_MICROSECOND {
            format!("{:.*} microseconds", DECIMAL_PLACES, f64::from(nanos) / 1e3)
        } else {
            format!("{nanos} nanoseconds")
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let input_str = get_input(&args.input)?;
    let Almanac { seed_ranges, tables } =
        Almanac::parse(&input_str).context("failed to parse almanac")?;

    let solve_start = Instant::now();
    let history = run_chain(seed_ranges, &tables);
    let solve_duration = solve_start.elapsed();

    let lowest = history
        .lowest_start()
        .context("almanac has no seed ranges")?;
    if args.timed {
        println!("Solved in {}", format_duration(solve_duration));
    }
    println!("Lowest location: {lowest}");

    if let Some(chart_file) = &args.chart {
        fs::write(chart_file, chart::render_svg(&history))
            .with_context(|| format!("could not write chart to: {}", chart_file.display()))?;
        println!("Transition chart saved to {}", chart_file.display());
    }

    Ok(())
}
