//! UK economic time-series pipeline: fetch, densify, and inflation-adjust.
//!
//! This is a facade crate that re-exports functionality from the florin
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use florin_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = DatasetRegistry::global();
//!     let client = FetchClient::with_defaults()?;
//!     let pipeline = Pipeline::new(client, PipelineConfig::default());
//!
//!     let report = pipeline.run(registry.all().collect(), |_| {}).await?;
//!     println!("{} datasets completed", report.completed());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/florin-data/florin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use florin_types::*;

// Re-export dataset catalog
pub use florin_datasets::DatasetRegistry;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use florin_fetch::{ClientConfig, Fetch, FetchClient, FetchError, url};

// Re-export parsers
#[cfg(feature = "parse")]
pub use florin_parse::{DateFormatError, ParseError, parse_csv, parse_date, parse_rate_table};

// Re-export transformations
#[cfg(feature = "transform")]
pub use florin_transform::{PreconditionError, adjust_for_inflation, densify};

// Re-export formatters
#[cfg(feature = "format")]
pub use florin_format::{CsvFormatter, FormatError};

// Re-export the pipeline runner
#[cfg(feature = "pipeline")]
pub use florin_pipeline::{DatasetOutcome, Pipeline, PipelineConfig, RunReport, RunStatus};

/// Prelude module for convenient imports.
///
/// ```
/// use florin_lib::prelude::*;
/// ```
pub mod prelude {
    pub use florin_types::{
        CsvLayout, Dataset, DateRange, DateRangeError, FlorinError, Record, Result, Source,
    };

    pub use florin_datasets::DatasetRegistry;

    #[cfg(feature = "fetch")]
    pub use florin_fetch::{ClientConfig, Fetch, FetchClient};

    #[cfg(feature = "transform")]
    pub use florin_transform::{adjust_for_inflation, densify};

    #[cfg(feature = "format")]
    pub use florin_format::CsvFormatter;

    #[cfg(feature = "pipeline")]
    pub use florin_pipeline::{DatasetOutcome, Pipeline, PipelineConfig, RunReport, RunStatus};
}
