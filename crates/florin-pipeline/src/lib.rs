//! Per-dataset orchestration for the florin pipeline.
//!
//! This crate strings the other crates together: fetch, parse, densify,
//! optionally rebase against the consumer price index, and write. A whole
//! run produces a [`RunReport`] with one [`DatasetOutcome`] per dataset;
//! one dataset failing never stops the others.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/florin-data/florin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod report;
mod runner;

pub use report::{DatasetOutcome, RunReport, RunStatus};
pub use runner::{Pipeline, PipelineConfig};
