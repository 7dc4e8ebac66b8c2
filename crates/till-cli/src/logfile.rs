//! # Order Log File
//!
//! The append-only text log that receives one line per committed order.
//! Write failures are surfaced as `PosError::LogSink`; the checkout core
//! treats them as best-effort and never rolls an order back over them.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use till_core::{Order, OrderLog, PosError, PosResult};

/// File-backed [`OrderLog`] sink.
#[derive(Debug, Clone)]
pub struct FileOrderLog {
    path: PathBuf,
}

impl FileOrderLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the log is appended to
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl OrderLog for FileOrderLog {
    fn record(&mut self, order: &Order) -> PosResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PosError::LogSink(e.to_string()))?;
        writeln!(file, "{}", order.log_line()).map_err(|e| PosError::LogSink(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::{LineItem, PaymentKind, Price, Product};

    fn sample_order(id: u64) -> Order {
        let product = Product::new(101, "Notebook", Price::new(100.0));
        Order::new(
            id,
            "Ana",
            vec![LineItem::from_product(&product, 1)],
            Price::new(100.0),
            PaymentKind::Gcash,
        )
    }

    #[test]
    fn test_records_append_one_line_each() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order_log.txt");
        let mut log = FileOrderLog::new(&path);

        log.record(&sample_order(1)).unwrap();
        log.record(&sample_order(2)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Order ID: 1 has been successfully checked out and paid using GCash."
        );
        assert_eq!(
            lines[1],
            "Order ID: 2 has been successfully checked out and paid using GCash."
        );
    }

    #[test]
    fn test_unwritable_path_reports_log_sink_error() {
        let mut log = FileOrderLog::new("/nonexistent-dir/order_log.txt");
        let err = log.record(&sample_order(1)).unwrap_err();
        assert!(matches!(err, PosError::LogSink(_)));
    }
}
