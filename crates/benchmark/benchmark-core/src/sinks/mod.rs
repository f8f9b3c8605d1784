//! Report persistence.
//!
//! - [`JsonSink`] - the whole table as pretty-printed JSON
//! - [`CsvSink`] - `;`-separated detailed or synthetic tables
//! - [`MemorySink`] - keeps tables in memory

mod csv;
mod json;
mod memory;

pub use self::csv::CsvSink;
pub use self::json::JsonSink;
pub use self::memory::MemorySink;

use std::path::{Path, PathBuf};

use benchmark_api::OutputFormat;
use benchmark_spi::ResultSink;

/// Create a file sink for `format` writing to `path`.
pub fn create_sink(format: OutputFormat, path: impl AsRef<Path>) -> Box<dyn ResultSink> {
    let path: PathBuf = path.as_ref().to_path_buf();
    match format {
        OutputFormat::Json => Box::new(JsonSink::new(path)),
        OutputFormat::Csv => Box::new(CsvSink::new(path)),
    }
}
