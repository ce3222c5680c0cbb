//! CSV and HTML table parsing for the florin pipeline.
//!
//! This crate converts heterogeneous raw inputs into uniform
//! [`Record`](florin_types::Record) sequences:
//!
//! - [`parse_csv`] - CSV rows, located by column index
//! - [`parse_rate_table`] - HTML table cells, located by alignment attribute
//! - [`date::parse_date`] - multi-format date text parsing

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/florin-data/florin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
pub mod date;
mod error;
mod html;

pub use crate::csv::parse_csv;
pub use date::{DateFormatError, parse_date};
pub use error::ParseError;
pub use html::parse_rate_table;
