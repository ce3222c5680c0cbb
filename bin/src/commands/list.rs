//! List command implementation.
//!
//! This module handles listing available datasets with optional filtering.

use anyhow::Result;
use florin_lib::prelude::*;

/// List available datasets with an optional search pattern.
pub(crate) fn list_datasets(search: Option<&str>) -> Result<()> {
    let registry = DatasetRegistry::global();

    let datasets: Vec<_> = match search {
        Some(pattern) => registry.search(pattern),
        None => registry.all().collect(),
    };

    if datasets.is_empty() {
        println!("No datasets found.");
        return Ok(());
    }

    println!("{:<20} {:<15} {:<40}", "ID", "SOURCE", "DESCRIPTION");
    println!("{}", "-".repeat(75));

    for dataset in &datasets {
        println!(
            "{:<20} {:<15} {:<40}",
            dataset.id(),
            dataset.source().kind(),
            dataset.description()
        );
    }

    println!("\nTotal: {} datasets", datasets.len());
    Ok(())
}
