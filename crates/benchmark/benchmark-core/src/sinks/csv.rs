//! Semicolon-separated report tables.

use std::collections::BTreeSet;
use std::path::PathBuf;

use benchmark_spi::{BenchmarkError, ReportTable, Result, ResultSink, TableRow};
use tracing::info;

const KEY_COLUMNS: [&str; 5] = ["Model", "Order", "Scheme", "Partitions", "Size"];

/// Writes a detailed or synthetic table, following the report's flag.
///
/// Detailed: one row per key and measure, one column per window index.
/// Synthetic: one row per key with `<MEASURE>AVG` and `<MEASURE>STD` columns.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn detailed(table: &ReportTable) -> Vec<Vec<String>> {
        let windows: BTreeSet<usize> = table
            .rows
            .iter()
            .flat_map(|r| r.windows.iter().copied())
            .collect();

        let mut header: Vec<String> = KEY_COLUMNS.iter().map(|c| c.to_string()).collect();
        header.push("Measure".to_string());
        header.extend(windows.iter().map(|w| w.to_string()));

        let mut records = vec![header];
        for row in &table.rows {
            for (field, values) in table.fields.iter().zip(&row.values) {
                let mut record = key_cells(row);
                record.push(field.clone());
                for w in &windows {
                    let cell = row
                        .windows
                        .iter()
                        .position(|x| x == w)
                        .and_then(|i| values.get(i))
                        .map(|v| v.to_string())
                        .unwrap_or_default();
                    record.push(cell);
                }
                records.push(record);
            }
        }
        records
    }

    fn synthetic(table: &ReportTable) -> Vec<Vec<String>> {
        let mut header: Vec<String> = KEY_COLUMNS.iter().map(|c| c.to_string()).collect();
        for field in &table.fields {
            header.push(format!("{}AVG", field));
            header.push(format!("{}STD", field));
        }

        let mut records = vec![header];
        for row in &table.rows {
            let mut record = key_cells(row);
            for summary in row.summary() {
                record.push(summary.mean.to_string());
                record.push(summary.std.to_string());
            }
            records.push(record);
        }
        records
    }
}

fn key_cells(row: &TableRow) -> Vec<String> {
    vec![
        row.model.clone(),
        row.order.to_string(),
        row.scheme.clone(),
        row.partitions.to_string(),
        row.size.to_string(),
    ]
}

impl ResultSink for CsvSink {
    fn save(&mut self, table: &ReportTable) -> Result<()> {
        let records = if table.synthetic {
            Self::synthetic(table)
        } else {
            Self::detailed(table)
        };

        let mut writer = ::csv::WriterBuilder::new()
            .delimiter(b';')
            .from_path(&self.path)
            .map_err(|e| BenchmarkError::Serialization(e.to_string()))?;
        for record in &records {
            writer
                .write_record(record)
                .map_err(|e| BenchmarkError::Serialization(e.to_string()))?;
        }
        writer.flush()?;
        info!("{} rows written to {:?}", records.len() - 1, self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::fixtures;

    fn lines(path: &PathBuf) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_detailed_layout() {
        let path = fixtures::temp_path("detailed.csv");
        CsvSink::new(&path).save(&fixtures::table(false)).unwrap();

        let lines = lines(&path);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Model;Order;Scheme;Partitions;Size;Measure;0;1;2");
        assert_eq!(lines[1], "CFTS;1;Grid;10;7;RMSE;1;3;NaN");
        assert_eq!(lines[2], "CFTS;1;Grid;10;7;SMAPE;10;20;30");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_synthetic_layout() {
        let path = fixtures::temp_path("synthetic.csv");
        CsvSink::new(&path).save(&fixtures::table(true)).unwrap();

        let lines = lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Model;Order;Scheme;Partitions;Size;RMSEAVG;RMSESTD;SMAPEAVG;SMAPESTD;UAVG;USTD;TIMEAVG;TIMESTD"
        );
        let cells: Vec<&str> = lines[1].split(';').collect();
        assert_eq!(cells[..5], ["CFTS", "1", "Grid", "10", "7"]);
        // NaN window skipped: mean of 1 and 3
        assert_eq!(cells[5], "2");
        assert_eq!(cells[6], "1");
        assert_eq!(cells[7], "20");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_window_is_blank() {
        let mut table = fixtures::table(false);
        let mut other = table.rows[0].clone();
        other.key = "HOFTS n = 2 Grid q = 10".to_string();
        other.model = "HOFTS".to_string();
        other.order = 2;
        other.windows = vec![0, 1, 3];
        table.rows.push(other);

        let records = CsvSink::detailed(&table);
        assert_eq!(records[0][6..], ["0", "1", "2", "3"]);
        // first key never ran window 3
        assert_eq!(records[1][9], "");
        // second key never ran window 2
        assert_eq!(records[5][8], "");
    }
}
