//! Core types for the florin economic time-series pipeline.
//!
//! This crate provides the fundamental data structures used throughout florin:
//!
//! - [`Record`] - A single day-granular date/value observation
//! - [`DateRange`] - An inclusive calendar-day range with day iteration
//! - [`Dataset`] - Catalog metadata describing one remote series
//! - [`FlorinError`] - The pipeline-wide error taxonomy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/florin-data/florin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dataset;
mod date_range;
mod error;
mod record;

pub use dataset::{CsvLayout, Dataset, Source};
pub use date_range::{DateRange, DayIterator};
pub use error::{DateRangeError, FlorinError, Result};
pub use record::{Record, sort_by_date};
