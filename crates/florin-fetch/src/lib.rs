//! HTTP client and source URL construction for the florin pipeline.
//!
//! This crate provides the retrieval half of the pipeline:
//!
//! - [`url::ons_csv_url`] / [`url::land_registry_url`] - Source URL builders
//! - [`FetchClient`] - HTTP client with connection pooling and retries

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/florin-data/florin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod url;

pub use client::{ClientConfig, Fetch, FetchClient, FetchError};
