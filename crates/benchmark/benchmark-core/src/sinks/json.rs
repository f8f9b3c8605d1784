//! JSON report sink.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use benchmark_spi::{BenchmarkError, ReportTable, Result, ResultSink};
use tracing::info;

/// Writes the whole table, histories and failures included.
///
/// NaN measures are written as `null`.
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ResultSink for JsonSink {
    fn save(&mut self, table: &ReportTable) -> Result<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), table)
            .map_err(|e| BenchmarkError::Serialization(e.to_string()))?;
        info!("{} rows written to {:?}", table.rows.len(), self.path);
        Ok(())
    }
}
