// ============================================================
// Layer 1 — History Chart
// ============================================================
// Renders the training history as two stacked line charts,
// drawn as fixed-width text:
//
//   panel 1: training loss vs validation loss
//   panel 2: training accuracy vs validation accuracy
//
// Presentation only — nothing here is consulted by training or
// evaluation. Rendering fails if any of the four canonical
// series is absent, rather than drawing a half-empty chart.
//
// Marker legend: o = training series, + = validation series,
// * = both in the same cell.

use anyhow::{bail, Result};

use crate::infra::history::{series, TrainingHistory};

/// Rows of plotting area per panel
const PANEL_HEIGHT: usize = 10;
/// Maximum plotting columns; longer runs are compressed
const MAX_WIDTH: usize = 60;

/// Render both panels for a complete training history.
pub fn render_history(history: &TrainingHistory) -> Result<String> {
    let loss = history.require(series::LOSS)?;
    let val_loss = history.require(series::VAL_LOSS)?;
    let acc = history.require(series::ACCURACY)?;
    let val_acc = history.require(series::VAL_ACCURACY)?;

    let epochs = loss.len();
    for (name, s) in [
        (series::VAL_LOSS, val_loss),
        (series::ACCURACY, acc),
        (series::VAL_ACCURACY, val_acc),
    ] {
        if s.len() != epochs {
            bail!(
                "History series '{}' has {} entries but 'loss' has {}",
                name,
                s.len(),
                epochs
            );
        }
    }

    let mut out = String::new();
    out.push_str(&render_panel("Training and validation loss", loss, val_loss));
    out.push('\n');
    out.push_str(&render_panel(
        "Training and validation accuracy",
        acc,
        val_acc,
    ));
    out.push_str("legend: o training   + validation   * both\n");
    Ok(out)
}

/// Render one panel with two series over the same epochs.
fn render_panel(title: &str, train: &[f64], val: &[f64]) -> String {
    let epochs = train.len();
    let width = epochs.min(MAX_WIDTH);

    // Value range over both series, ignoring non-finite entries
    // (an empty dev split records NaN losses).
    let finite: Vec<f64> = train
        .iter()
        .chain(val.iter())
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    let lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if !lo.is_finite() || !hi.is_finite() {
        (0.0, 1.0)
    } else if hi - lo < 1e-12 {
        // Flat series: widen the range so the line sits mid-panel
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    };

    let col_of = |epoch: usize| -> usize {
        if epochs <= 1 {
            0
        } else {
            epoch * (width - 1) / (epochs - 1)
        }
    };
    let row_of = |value: f64| -> usize {
        let t = (value - lo) / (hi - lo);
        let r = (t * (PANEL_HEIGHT - 1) as f64).round() as usize;
        // Row 0 is the top of the panel
        PANEL_HEIGHT - 1 - r.min(PANEL_HEIGHT - 1)
    };

    let mut grid = vec![vec![' '; width]; PANEL_HEIGHT];
    for (epoch, (&t, &v)) in train.iter().zip(val.iter()).enumerate() {
        let col = col_of(epoch);
        if t.is_finite() {
            grid[row_of(t)][col] = 'o';
        }
        if v.is_finite() {
            let cell = &mut grid[row_of(v)][col];
            *cell = if *cell == 'o' { '*' } else { '+' };
        }
    }

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            format!("{hi:>9.4}")
        } else if i == PANEL_HEIGHT - 1 {
            format!("{lo:>9.4}")
        } else {
            " ".repeat(9)
        };
        out.push_str(&label);
        out.push_str(" |");
        out.extend(row.iter());
        out.push('\n');
    }
    out.push_str(&" ".repeat(10));
    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str(&format!("{}epochs 1..{}\n", " ".repeat(11), epochs));
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::history::EpochMetrics;

    fn full_history(epochs: usize) -> TrainingHistory {
        let mut h = TrainingHistory::new();
        for e in 1..=epochs {
            let decay = 1.0 / e as f64;
            h.push(&EpochMetrics::new(e, 2.0 * decay, 2.2 * decay, 1.0 - decay, 0.9 - decay));
        }
        h
    }

    #[test]
    fn test_renders_both_panels() {
        let chart = render_history(&full_history(5)).unwrap();
        assert!(chart.contains("Training and validation loss"));
        assert!(chart.contains("Training and validation accuracy"));
        assert!(chart.contains("legend"));
        assert!(chart.contains('o'));
        assert!(chart.contains('+') || chart.contains('*'));
    }

    #[test]
    fn test_missing_series_fails() {
        let mut partial = TrainingHistory::new();
        partial.record(series::LOSS, 1.0);
        partial.record(series::VAL_LOSS, 1.1);
        partial.record(series::ACCURACY, 0.5);
        // val_accuracy never recorded

        let err = render_history(&partial).unwrap_err();
        assert!(err.to_string().contains("val_accuracy"));
    }

    #[test]
    fn test_empty_history_fails() {
        assert!(render_history(&TrainingHistory::new()).is_err());
    }

    #[test]
    fn test_single_epoch_renders() {
        let chart = render_history(&full_history(1)).unwrap();
        assert!(chart.contains("epochs 1..1"));
    }

    #[test]
    fn test_flat_series_does_not_panic() {
        let mut h = TrainingHistory::new();
        for e in 1..=3 {
            h.push(&EpochMetrics::new(e, 1.0, 1.0, 0.5, 0.5));
        }
        assert!(render_history(&h).is_ok());
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        let mut h = full_history(3);
        h.record(series::LOSS, 0.1); // loss now one entry ahead
        assert!(render_history(&h).is_err());
    }

    #[test]
    fn test_long_run_is_compressed() {
        let chart = render_history(&full_history(200)).unwrap();
        // No rendered line should exceed the axis width plus label
        for line in chart.lines() {
            assert!(line.len() <= MAX_WIDTH + 12);
        }
    }
}
