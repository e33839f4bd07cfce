// src/report.rs
//! Console rendering of the four reign statistics. Formatting is kept apart
//! from computation so tests can assert on the exact lines (ASCII only for
//! stable console output).

use crate::stats;
use crate::types::Monarch;

/// The four statistic lines, in print order.
pub fn statistics_lines(monarchs: &[Monarch], parallel_threshold: usize) -> Vec<String> {
    let count = stats::total_count(monarchs);
    let (monarch, reign) = stats::longest_reign(monarchs, parallel_threshold);
    let (house, house_years) = stats::longest_ruling_house(monarchs, parallel_threshold);
    let first_name =
        stats::most_common_first_name(monarchs).unwrap_or_else(|| stats::NONE_LABEL.to_string());

    vec![
        format!("Number of monarchs: {count}"),
        format!("Longest ruling monarch: {monarch} ({reign} years)"),
        format!("Longest ruling house: {house} ({house_years} years)"),
        format!("Most common first name: {first_name}"),
    ]
}

/// Print the statistics to stdout.
pub fn print_statistics(monarchs: &[Monarch], parallel_threshold: usize) {
    for line in statistics_lines(monarchs, parallel_threshold) {
        println!("{line}");
    }
}
