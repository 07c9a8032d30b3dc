//! Dataset aggregation.
//!
//! This module folds per-pokemon API records into the nested
//! version-group mapping and the deduplicated move table.

pub mod aggregator;

pub use aggregator::Dataset;
