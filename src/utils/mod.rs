//! Utility functions and helpers.
//!
//! This module contains utility functions used throughout the application,
//! such as byte-size formatting.

pub mod size;

pub use size::{MAGNITUDE_UNAVAILABLE, convert_magnitude};
