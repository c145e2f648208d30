//! Output formatting for part reports

use crate::executor::PartReport;
use chrono::TimeDelta;

/// Output formatter for part reports
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single report
    pub fn print_result(&self, report: &PartReport) {
        if self.quiet {
            self.print_quiet(report);
        } else {
            self.print_full(report);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, report: &PartReport) {
        match &report.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Part {}: {}", report.part, e),
        }
    }

    /// Print full output with timing
    fn print_full(&self, report: &PartReport) {
        let prefix = format!("Part {}", report.part);
        let timing = format_timing(report);

        match &report.answer {
            Ok(answer) => println!(
                "{}: The lowest location number corresponding to the {} is {} ({})",
                prefix,
                seed_description(report.part),
                answer,
                timing
            ),
            Err(e) if e.is_inconclusive() => println!("{}: {} ({})", prefix, e, timing),
            Err(e) => eprintln!("{}: Error - {}", prefix, e),
        }
    }

    /// Print a summary after all reports
    pub fn print_summary(&self, reports: &[PartReport]) {
        if self.quiet {
            return;
        }

        let solved = reports.iter().filter(|r| r.answer.is_ok()).count();
        let inconclusive = reports
            .iter()
            .filter(|r| r.answer.as_ref().is_err_and(|e| e.is_inconclusive()))
            .count();
        let failed = reports.len() - solved - inconclusive;

        let total_parse_time: TimeDelta = reports.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = reports.iter().map(|r| r.solve_duration).sum();

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} inconclusive, {} failed",
            solved, inconclusive, failed
        );
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// What each part minimizes over
fn seed_description(part: u8) -> &'static str {
    match part {
        1 => "starting seeds",
        _ => "seed ranges",
    }
}

fn format_timing(report: &PartReport) -> String {
    let parse_timing = report
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!("{}solve: {}", parse_timing, format_duration(report.solve_duration))
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
