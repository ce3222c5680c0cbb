//! Info command implementation.
//!
//! This module handles displaying detailed information about a specific
//! dataset, including its source URL and output file names.

use anyhow::Result;
use florin_lib::prelude::*;
use florin_lib::url;

/// Show detailed information about a dataset.
pub(crate) fn show_info(dataset_id: &str) -> Result<()> {
    let registry = DatasetRegistry::global();
    let dataset = registry.try_get(dataset_id)?;

    println!("Dataset:     {}", dataset.id());
    println!("Description: {}", dataset.description());
    println!("Source:      {}", dataset.source().kind());
    println!("URL:         {}", source_url(dataset.source()));

    if let Some(layout) = dataset.source().layout() {
        println!(
            "Columns:     date={} value={} (skipping {} header rows)",
            layout.date_column, layout.value_column, layout.header_rows
        );
    }

    println!("\nOutputs:");
    println!("  {}.csv", dataset.output());
    if let Some(adjusted) = dataset.adjusted_output() {
        println!("  {adjusted}.csv (inflation-adjusted)");
    }

    Ok(())
}

fn source_url(source: &Source) -> String {
    match source {
        Source::Ons {
            series, dataset, ..
        } => url::ons_csv_url(series, dataset),
        Source::LandRegistry { region, .. } => url::land_registry_url(region),
        Source::BoeScrape => url::BOE_BANK_RATE_URL.to_owned(),
    }
}
