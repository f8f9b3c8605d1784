//! Report persistence trait.

use crate::error::Result;
use crate::model::ReportTable;

/// Destination for a finished benchmark report.
pub trait ResultSink {
    fn save(&mut self, table: &ReportTable) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Mock Implementations ==========

    #[derive(Default)]
    struct Counting {
        saved: usize,
        rows: usize,
    }

    impl ResultSink for Counting {
        fn save(&mut self, table: &ReportTable) -> Result<()> {
            self.saved += 1;
            self.rows += table.rows.len();
            Ok(())
        }
    }

    #[test]
    fn test_sink_is_object_safe() {
        let mut sink = Counting::default();
        {
            let dyn_sink: &mut dyn ResultSink = &mut sink;
            let table = ReportTable {
                family: "point".to_string(),
                experiments: 0,
                elapsed_secs: 0.0,
                synthetic: false,
                fields: Vec::new(),
                rows: Vec::new(),
            };
            dyn_sink.save(&table).unwrap();
        }
        assert_eq!(sink.saved, 1);
        assert_eq!(sink.rows, 0);
    }
}
