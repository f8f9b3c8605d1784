//! Error types for benchmark runs
//!
//! This module provides the [`BenchmarkError`] enum and [`Result`] type alias.
//! Errors raised inside a single task never surface here; they are recorded
//! as a [`TaskFailure`](crate::TaskFailure) instead.

mod benchmark_error;

pub use benchmark_error::{BenchmarkError, Result};
