//! Display utilities and output formatting for the florin CLI.

use florin_lib::prelude::*;

/// Print a per-dataset summary table for a finished run.
pub(crate) fn print_report(report: &RunReport) {
    println!("\nRun complete:");
    println!("{:<12} {:<20} {:>8}  DETAIL", "STATUS", "DATASET", "ROWS");
    println!("{}", "-".repeat(60));

    for outcome in report.outcomes() {
        let detail = match (&outcome.error, outcome.outputs.len()) {
            (Some(error), _) => error.clone(),
            (None, 0) => String::new(),
            (None, _) => outcome
                .outputs
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        };

        println!(
            "{:<12} {:<20} {:>8}  {}",
            outcome.status, outcome.dataset_id, outcome.rows_written, detail
        );
    }

    println!(
        "\nCompleted: {}  Failed: {}",
        report.completed(),
        report.failed()
    );
}
