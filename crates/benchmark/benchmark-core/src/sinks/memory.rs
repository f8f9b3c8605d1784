use benchmark_spi::{ReportTable, Result, ResultSink};

/// Keeps every saved table.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub tables: Vec<ReportTable>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently saved table.
    pub fn last(&self) -> Option<&ReportTable> {
        self.tables.last()
    }
}

impl ResultSink for MemorySink {
    fn save(&mut self, table: &ReportTable) -> Result<()> {
        self.tables.push(table.clone());
        Ok(())
    }
}
