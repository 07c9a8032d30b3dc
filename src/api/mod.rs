//! PokeAPI access.
//!
//! This module provides the HTTP client used to fetch pokemon and move
//! records from the remote API.

pub mod client;

pub use client::{ClientConfig, PokeClient};
