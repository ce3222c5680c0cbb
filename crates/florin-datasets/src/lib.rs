//! Dataset catalog for the florin economic time-series pipeline.
//!
//! This crate provides access to the catalog of supported datasets with
//! their source endpoints, CSV column layouts, and output file names.
//!
//! # Example
//!
//! ```
//! use florin_datasets::DatasetRegistry;
//!
//! let registry = DatasetRegistry::global();
//!
//! // Lookup by ID
//! if let Some(dataset) = registry.get("london") {
//!     println!("{}: {}", dataset.id(), dataset.description());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/florin-data/florin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::OnceLock;

use florin_types::{Dataset, FlorinError, Result};

/// The dataset metadata JSON embedded at compile time.
const DATASETS_JSON: &str = include_str!("../data/datasets.json");

/// Global dataset registry instance.
static REGISTRY: OnceLock<DatasetRegistry> = OnceLock::new();

/// Registry of all supported datasets.
#[derive(Debug)]
pub struct DatasetRegistry {
    datasets: HashMap<String, Dataset>,
}

impl DatasetRegistry {
    /// Returns the global dataset registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads datasets from the embedded JSON data.
    fn load() -> Self {
        let datasets: HashMap<String, Dataset> =
            serde_json::from_str(DATASETS_JSON).expect("Invalid datasets.json");
        Self { datasets }
    }

    /// Looks up a dataset by ID (case-insensitive).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Dataset> {
        self.datasets.get(&id.to_lowercase())
    }

    /// Looks up a dataset by ID, failing with a typed error when absent.
    ///
    /// # Errors
    ///
    /// Returns [`FlorinError::UnknownDataset`] naming the requested ID.
    pub fn try_get(&self, id: &str) -> Result<&Dataset> {
        self.get(id)
            .ok_or_else(|| FlorinError::UnknownDataset(id.to_string()))
    }

    /// Returns all datasets as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.values()
    }

    /// Returns the total number of datasets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Returns the consumer price index dataset.
    ///
    /// This is the reference series every inflation adjustment rebases
    /// against; the catalog always contains exactly one.
    #[must_use]
    pub fn price_index(&self) -> &Dataset {
        self.datasets
            .values()
            .find(|d| d.is_index())
            .expect("catalog contains a price index dataset")
    }

    /// Returns all datasets that derive an inflation-adjusted variant.
    pub fn adjusted(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.values().filter(|d| d.is_adjusted())
    }

    /// Searches datasets by ID or description pattern (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&Dataset> {
        let pattern = pattern.to_lowercase();
        self.datasets
            .values()
            .filter(|d| {
                d.id().to_lowercase().contains(&pattern)
                    || d.description().to_lowercase().contains(&pattern)
            })
            .collect()
    }

    /// Returns all dataset IDs sorted alphabetically.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.datasets.keys().map(String::as_str).collect();
        ids.sort();
        ids
    }
}
