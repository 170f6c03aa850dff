//! Statistic result types and histogram binning.
//!
//! The numbers themselves come from the dataframe engine; these types
//! carry them to the views.

use serde::Serialize;

/// Tukey fences: `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IqrFences {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrFences {
    #[must_use]
    pub fn new(q1: f64, q3: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            lower: q1 - 1.5 * iqr,
            upper: q3 + 1.5 * iqr,
        }
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.lower && v <= self.upper
    }
}

/// Summary row for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// `None` with fewer than two values
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// One histogram bin, `[start, end)` except the last which is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Sturges' rule bin count.
#[must_use]
pub fn sturges_bins(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        ((n as f64).log2().ceil() as usize + 1).max(1)
    }
}

/// Equal-width histogram over the data range.
#[must_use]
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![Bin {
            start: min - 0.5,
            end: max + 0.5,
            count: values.len(),
        }];
    }
    let width = (max - min) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            start: min + width * i as f64,
            end: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();
    for v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iqr_fences() {
        let f = IqrFences::new(2.0, 4.0);
        assert_eq!(f.lower, -1.0);
        assert_eq!(f.upper, 7.0);
        assert!(f.contains(7.0));
        assert!(f.contains(-1.0));
        assert!(!f.contains(100.0));
    }

    #[test]
    fn test_sturges() {
        assert_eq!(sturges_bins(0), 1);
        assert_eq!(sturges_bins(1), 1);
        assert_eq!(sturges_bins(100), 8);
    }

    #[test]
    fn test_histogram_counts_everything() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let bins = histogram(&values, sturges_bins(values.len()));
        assert_eq!(bins.len(), 8);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert_eq!(bins.last().map(|b| b.end), Some(99.0));

        let flat = histogram(&[3.0, 3.0], 5);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].count, 2);
    }
}
