//! Almanac CLI - reads the almanac and prints the lowest locations for both parts

mod cli;
mod config;
mod error;
mod executor;
mod logging;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, PartReport};
use output::OutputFormatter;
use tracing::info;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    logging::init(args.verbose)?;

    let config = Config::from_args(args)?;
    info!(input = %config.input.display(), threads = config.thread_count, "starting");

    let executor = Executor::new(&config)?;
    let input = executor.read_input()?;
    let instance = executor.prepare(&input)?;

    run_executor(executor, instance, config.quiet)
}

/// Run the executor on a background thread and print reports as they arrive
fn run_executor(
    executor: Executor,
    instance: almanac_solver::SolverInstance,
    quiet: bool,
) -> Result<(), CliError> {
    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(instance, tx));

    let formatter = OutputFormatter::new(quiet);
    let mut reports = Vec::new();
    for report in rx {
        formatter.print_result(&report);
        reports.push(report);
    }

    executor_handle
        .join()
        .map_err(|_| CliError::ExecutorPanicked)??;

    formatter.print_summary(&reports);

    check_reports(&reports)
}

/// Fail the run if any part failed outright; an exhausted scan does not count
fn check_reports(reports: &[PartReport]) -> Result<(), CliError> {
    let failed = reports
        .iter()
        .filter(|r| r.answer.as_ref().is_err_and(|e| !e.is_inconclusive()))
        .count();
    match failed {
        0 => Ok(()),
        n => Err(CliError::PartsFailed(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_solver::{ParseError, SolveError};
    use chrono::TimeDelta;

    fn report(part: u8, answer: Result<u64, SolveError>) -> PartReport {
        PartReport {
            part,
            answer,
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        }
    }

    #[test]
    fn test_exhausted_scan_does_not_fail_run() {
        let reports = [
            report(1, Ok(35)),
            report(2, Err(SolveError::SearchExhausted { bound: 10 })),
        ];
        assert!(check_reports(&reports).is_ok());
    }

    #[test]
    fn test_failed_part_is_summarized_not_repeated() {
        let reports = [
            report(1, Ok(35)),
            report(2, Err(SolveError::InvalidSeedRanges(ParseError::UnpairedSeed(3)))),
        ];
        let err = check_reports(&reports).unwrap_err();
        assert!(matches!(err, CliError::PartsFailed(1)));
        assert_eq!(err.to_string(), "1 part(s) failed");
        assert!(!err.to_string().contains("seed"));
    }
}
