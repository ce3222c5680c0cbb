//! Delimited output writing for the florin pipeline.
//!
//! - [`CsvFormatter`] - writes `date,value` rows, two fixed decimals, no header

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/florin-data/florin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;

pub use crate::csv::{CsvFormatter, FormatError};
