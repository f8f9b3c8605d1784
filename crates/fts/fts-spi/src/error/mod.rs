//! Error types for fuzzy time series operations
//!
//! This module provides the [`FtsError`] enum and [`Result`] type alias
//! shared by partitioners, transformations and models.

mod fts_error;

pub use fts_error::{FtsError, Result};
