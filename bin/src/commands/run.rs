//! Run command implementation.
//!
//! This module drives the full pipeline: resolve the requested datasets,
//! fetch and transform each one, and print a per-dataset summary at the end.

use crate::display;
use anyhow::{Context, Result};
use florin_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Execute the run command.
pub(crate) async fn run(
    dataset_ids: &[String],
    output_dir: PathBuf,
    concurrency: usize,
    quiet: bool,
) -> Result<()> {
    // 1. Resolve the requested datasets (or the whole catalog)
    let registry = DatasetRegistry::global();
    let datasets: Vec<&Dataset> = if dataset_ids.is_empty() {
        registry.all().collect()
    } else {
        dataset_ids
            .iter()
            .map(|id| registry.try_get(id).map_err(anyhow::Error::from))
            .collect::<Result<_>>()?
    };

    if !quiet {
        println!(
            "Fetching {} dataset{} into {}",
            datasets.len(),
            if datasets.len() == 1 { "" } else { "s" },
            output_dir.display()
        );
    }

    // 2. Build the pipeline
    let client = FetchClient::with_defaults().context("Failed to build HTTP client")?;
    let config = PipelineConfig {
        output_dir,
        concurrency,
    };
    let pipeline = Pipeline::new(client, config);

    // 3. Run with a progress bar ticking per finished dataset
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(datasets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb
    };

    let report = pipeline
        .run(datasets, |outcome| {
            progress.set_message(outcome.dataset_id.clone());
            progress.inc(1);
            if outcome.is_failed()
                && let Some(error) = &outcome.error
            {
                progress.println(format!("{}: {error}", outcome.dataset_id));
            }
        })
        .await?;

    progress.finish_and_clear();

    // 4. Report summary
    if !quiet {
        display::print_report(&report);
    }

    if !report.all_completed() {
        anyhow::bail!(
            "{} out of {} datasets failed",
            report.failed(),
            report.outcomes().len()
        );
    }

    Ok(())
}
