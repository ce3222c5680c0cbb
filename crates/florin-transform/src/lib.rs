//! Series densification and inflation adjustment for the florin pipeline.
//!
//! Both operations are pure: they consume an owned input sequence and
//! produce a new, independently owned output sequence.
//!
//! - [`densify`] - forward-fill a sparse series to daily granularity
//! - [`adjust_for_inflation`] - rebase a nominal series against an index

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/florin-data/florin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adjust;
mod interpolate;

pub use adjust::{PreconditionError, adjust_for_inflation};
pub use interpolate::densify;
