// ============================================================
// Layer 6 — Training History
// ============================================================
// Records the four monitoring series of a training run — one
// value per completed epoch for each of:
//
//   loss          average training cross-entropy
//   val_loss      average dev-set cross-entropy
//   accuracy      fraction of training samples correct
//   val_accuracy  fraction of dev samples correct
//
// The series names are defined once, here, as constants. The
// trainer records through them and the chart renderer reads
// through them, so the two sides can never drift apart.
//
// A history is created fresh for every run and overwritten on
// retraining — the CSV on disk is truncated, never appended
// across runs.
//
// Example CSV output (<model_dir>/history.csv):
//   epoch,loss,val_loss,accuracy,val_accuracy
//   1,2.412906,1.997033,0.531000,0.641200
//   2,1.721846,1.541293,0.702300,0.713800
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{bail, Context, Result};
use std::{
    collections::BTreeMap,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

/// Canonical names of the four monitoring series.
pub mod series {
    pub const LOSS: &str = "loss";
    pub const VAL_LOSS: &str = "val_loss";
    pub const ACCURACY: &str = "accuracy";
    pub const VAL_ACCURACY: &str = "val_accuracy";

    /// All four, in reporting order.
    pub const CANONICAL: [&str; 4] = [LOSS, VAL_LOSS, ACCURACY, VAL_ACCURACY];
}

/// One row of metrics for a single completed epoch.
#[derive(Debug, Clone, Copy)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,
    /// Average training cross-entropy over the epoch's batches
    pub loss: f64,
    /// Average dev-set cross-entropy after the epoch
    pub val_loss: f64,
    /// Fraction of training samples classified correctly
    pub accuracy: f64,
    /// Fraction of dev samples classified correctly
    pub val_accuracy: f64,
}

impl EpochMetrics {
    pub fn new(
        epoch: usize,
        loss: f64,
        val_loss: f64,
        accuracy: f64,
        val_accuracy: f64,
    ) -> Self {
        Self { epoch, loss, val_loss, accuracy, val_accuracy }
    }

    /// True if this epoch improved on the previous best dev loss.
    pub fn is_improvement(&self, best_val_loss: f64) -> bool {
        self.val_loss < best_val_loss
    }
}

/// The per-run record: metric name → one value per epoch.
#[derive(Debug, Clone, Default)]
pub struct TrainingHistory {
    values: BTreeMap<String, Vec<f64>>,
}

impl TrainingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one epoch's metrics to all four series.
    pub fn push(&mut self, m: &EpochMetrics) {
        self.record(series::LOSS, m.loss);
        self.record(series::VAL_LOSS, m.val_loss);
        self.record(series::ACCURACY, m.accuracy);
        self.record(series::VAL_ACCURACY, m.val_accuracy);
    }

    /// Append a single value to the named series.
    pub fn record(&mut self, name: &str, value: f64) {
        self.values.entry(name.to_string()).or_default().push(value);
    }

    /// The named series, if it has been recorded.
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// The named series, or an error naming what is missing.
    pub fn require(&self, name: &str) -> Result<&[f64]> {
        match self.series(name) {
            Some(s) if !s.is_empty() => Ok(s),
            _ => bail!("Training history is missing the '{name}' series"),
        }
    }

    /// Number of completed epochs on record.
    pub fn epochs(&self) -> usize {
        self.series(series::LOSS).map_or(0, <[f64]>::len)
    }
}

/// Writes epoch metrics to `<dir>/history.csv`, one row per epoch.
pub struct HistoryLogger {
    csv_path: PathBuf,
}

impl HistoryLogger {
    /// Start a fresh log: truncates any previous run's CSV and
    /// writes the header row.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let csv_path = dir.join("history.csv");
        let mut f = fs::File::create(&csv_path).with_context(|| {
            format!("Cannot create history CSV at '{}'", csv_path.display())
        })?;
        writeln!(f, "epoch,{}", series::CANONICAL.join(","))?;

        tracing::debug!("Created history CSV: '{}'", csv_path.display());
        Ok(Self { csv_path })
    }

    /// Append one epoch's metrics as a new CSV row.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;
        writeln!(
            f,
            "{},{:.6},{:.6},{:.6},{:.6}",
            m.epoch, m.loss, m.val_loss, m.accuracy, m.val_accuracy,
        )?;
        Ok(())
    }

    /// Rebuild a TrainingHistory from a previously written CSV.
    pub fn load(dir: impl AsRef<Path>) -> Result<TrainingHistory> {
        let csv_path = dir.as_ref().join("history.csv");
        let text = fs::read_to_string(&csv_path).with_context(|| {
            format!(
                "Cannot read '{}'. Have you run 'train' first?",
                csv_path.display()
            )
        })?;

        let mut lines = text.lines();
        let header = lines.next().unwrap_or_default();
        let expected = format!("epoch,{}", series::CANONICAL.join(","));
        if header != expected {
            bail!(
                "Unexpected history CSV header '{}' in '{}'",
                header,
                csv_path.display()
            );
        }

        let mut history = TrainingHistory::new();
        for (line_no, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 5 {
                bail!("Malformed history row at {}:{}", csv_path.display(), line_no + 2);
            }
            let parse = |i: usize| -> Result<f64> {
                fields[i].parse::<f64>().with_context(|| {
                    format!(
                        "Bad number '{}' at {}:{}",
                        fields[i],
                        csv_path.display(),
                        line_no + 2
                    )
                })
            };
            let epoch: usize = fields[0].parse().with_context(|| {
                format!("Bad epoch at {}:{}", csv_path.display(), line_no + 2)
            })?;
            history.push(&EpochMetrics::new(
                epoch,
                parse(1)?,
                parse(2)?,
                parse(3)?,
                parse(4)?,
            ));
        }
        Ok(history)
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_fills_all_four_series() {
        let mut h = TrainingHistory::new();
        h.push(&EpochMetrics::new(1, 2.0, 2.1, 0.5, 0.45));
        h.push(&EpochMetrics::new(2, 1.5, 1.8, 0.6, 0.55));

        assert_eq!(h.epochs(), 2);
        for name in series::CANONICAL {
            assert_eq!(h.require(name).unwrap().len(), 2);
        }
        assert_eq!(h.series(series::LOSS).unwrap(), &[2.0, 1.5]);
    }

    #[test]
    fn test_require_names_the_missing_series() {
        let h = TrainingHistory::new();
        let err = h.require(series::VAL_ACCURACY).unwrap_err();
        assert!(err.to_string().contains("val_accuracy"));
    }

    #[test]
    fn test_is_improvement() {
        let m = EpochMetrics::new(2, 2.5, 2.3, 0.2, 0.2);
        assert!(m.is_improvement(3.0));
        assert!(!m.is_improvement(2.0));
    }

    #[test]
    fn test_csv_roundtrip() {
        let dir = std::env::temp_dir()
            .join(format!("newswire-history-{}-roundtrip", std::process::id()));
        let logger = HistoryLogger::create(&dir).unwrap();
        logger.log(&EpochMetrics::new(1, 2.0, 2.2, 0.4, 0.35)).unwrap();
        logger.log(&EpochMetrics::new(2, 1.4, 1.9, 0.6, 0.5)).unwrap();

        let back = HistoryLogger::load(&dir).unwrap();
        assert_eq!(back.epochs(), 2);
        assert_eq!(back.series(series::VAL_LOSS).unwrap(), &[2.2, 1.9]);
        assert_eq!(back.series(series::ACCURACY).unwrap(), &[0.4, 0.6]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_create_truncates_previous_run() {
        let dir = std::env::temp_dir()
            .join(format!("newswire-history-{}-truncate", std::process::id()));
        let first = HistoryLogger::create(&dir).unwrap();
        first.log(&EpochMetrics::new(1, 9.0, 9.0, 0.1, 0.1)).unwrap();

        // Retraining starts a new logger on the same directory
        let second = HistoryLogger::create(&dir).unwrap();
        second.log(&EpochMetrics::new(1, 1.0, 1.0, 0.9, 0.9)).unwrap();

        let back = HistoryLogger::load(&dir).unwrap();
        assert_eq!(back.epochs(), 1);
        assert_eq!(back.series(series::LOSS).unwrap(), &[1.0]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_rejects_foreign_header() {
        let dir = std::env::temp_dir()
            .join(format!("newswire-history-{}-header", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("history.csv"), "a,b,c\n1,2,3\n").unwrap();
        assert!(HistoryLogger::load(&dir).is_err());
        fs::remove_dir_all(&dir).ok();
    }
}
