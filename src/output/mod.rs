//! Output serialization.
//!
//! This module writes the aggregated dataset to the two JSON documents.

pub mod writer;

pub use writer::{write_dataset, WrittenFiles};
