//! EDA service: Cleans the survey dataset and prepares chart data.
//!
//! Cleaning runs in a fixed order:
//! 1. Drop the `Timestamp` column
//! 2. Drop rows with a missing value
//! 3. Drop duplicate rows, keeping the first
//! 4. IQR outlier filter per numeric column, in column order
//!
//! Step 4 is progressive: each column's quartiles are computed on the rows
//! that survived the previous columns, so the result depends on the order.

use std::collections::HashMap;
use std::sync::Arc;

use polars::prelude::*;
use serde::Serialize;

use crate::domain::stats::{self, Bin, ColumnSummary, IqrFences};
use crate::ports::{DatasetError, DatasetSource};
use crate::WellbeingError;

pub const TIMESTAMP_COLUMN: &str = "Timestamp";
pub const TARGET_COLUMN: &str = "WORK_LIFE_BALANCE_SCORE";

/// Rows shown in the dataset previews.
pub const PREVIEW_ROWS: usize = 5;

/// Chart family a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    #[must_use]
    pub fn of(dtype: &DataType) -> Self {
        if dtype.is_integer() || dtype.is_float() {
            Self::Numeric
        } else {
            Self::Categorical
        }
    }
}

#[must_use]
pub fn kind_of(df: &DataFrame, column: &str) -> Option<ColumnKind> {
    df.column(column).ok().map(|c| ColumnKind::of(c.dtype()))
}

fn columns_of(df: &DataFrame, kind: ColumnKind) -> Vec<&str> {
    df.get_columns()
        .iter()
        .filter(|c| ColumnKind::of(c.dtype()) == kind)
        .map(|c| c.name().as_str())
        .collect()
}

#[must_use]
pub fn numeric_columns(df: &DataFrame) -> Vec<&str> {
    columns_of(df, ColumnKind::Numeric)
}

#[must_use]
pub fn categorical_columns(df: &DataFrame) -> Vec<&str> {
    columns_of(df, ColumnKind::Categorical)
}

/// A column cast to `f64`, nulls kept in place.
fn float_values(df: &DataFrame, column: &str) -> PolarsResult<Float64Chunked> {
    let series = df
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.clone())
}

fn fences(values: &Float64Chunked) -> PolarsResult<Option<IqrFences>> {
    let q1 = values.quantile(0.25, QuantileMethod::Linear)?;
    let q3 = values.quantile(0.75, QuantileMethod::Linear)?;
    Ok(q1.zip(q3).map(|(q1, q3)| IqrFences::new(q1, q3)))
}

fn missing_cells(df: &DataFrame) -> usize {
    df.get_columns().iter().map(|c| c.null_count()).sum()
}

/// Rows removed by the IQR filter on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlierRemoval {
    pub column: String,
    pub removed: usize,
}

/// What cleaning did, step by step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub rows_before: usize,
    pub timestamp_dropped: bool,
    /// Missing cells across the whole frame before dropping
    pub missing_cells: usize,
    pub missing_rows_removed: usize,
    pub duplicates_removed: usize,
    pub outliers: Vec<OutlierRemoval>,
    pub rows_after: usize,
}

impl CleaningReport {
    #[must_use]
    pub fn total_outliers(&self) -> usize {
        self.outliers.iter().map(|o| o.removed).sum()
    }

    /// Rows removed by any step.
    #[must_use]
    pub fn rows_removed(&self) -> usize {
        self.rows_before - self.rows_after
    }
}

/// Clean with the IQR filter applied in frame column order.
///
/// # Errors
/// Propagates dataframe errors.
pub fn clean(df: DataFrame) -> PolarsResult<(DataFrame, CleaningReport)> {
    clean_inner(df, None)
}

/// Clean with the IQR filter applied in an explicit column order.
///
/// Names that are not numeric columns are skipped.
///
/// # Errors
/// Propagates dataframe errors.
pub fn clean_with_order(
    df: DataFrame,
    order: &[&str],
) -> PolarsResult<(DataFrame, CleaningReport)> {
    clean_inner(df, Some(order))
}

fn clean_inner(
    mut df: DataFrame,
    order: Option<&[&str]>,
) -> PolarsResult<(DataFrame, CleaningReport)> {
    let mut report = CleaningReport {
        rows_before: df.height(),
        ..CleaningReport::default()
    };

    if df.get_column_index(TIMESTAMP_COLUMN).is_some() {
        df = df.drop(TIMESTAMP_COLUMN)?;
        report.timestamp_dropped = true;
    }

    report.missing_cells = missing_cells(&df);
    let before = df.height();
    df = df.drop_nulls::<String>(None)?;
    report.missing_rows_removed = before - df.height();

    let before = df.height();
    df = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
    report.duplicates_removed = before - df.height();

    let columns: Vec<String> = match order {
        Some(order) => order
            .iter()
            .filter(|c| kind_of(&df, c) == Some(ColumnKind::Numeric))
            .map(|c| (*c).to_string())
            .collect(),
        None => numeric_columns(&df)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    for column in columns {
        let (kept, removed) = iqr_filter(&df, &column)?;
        df = kept;
        report.outliers.push(OutlierRemoval { column, removed });
    }

    report.rows_after = df.height();
    tracing::info!(
        "Cleaned dataset: {} -> {} rows (missing={}, duplicates={}, outliers={})",
        report.rows_before,
        report.rows_after,
        report.missing_rows_removed,
        report.duplicates_removed,
        report.total_outliers()
    );
    Ok((df, report))
}

/// Keep rows whose value in `column` lies inside the Tukey fences computed
/// on the current rows. Nulls and non-numeric columns are left alone.
///
/// # Errors
/// Propagates dataframe errors.
pub fn iqr_filter(df: &DataFrame, column: &str) -> PolarsResult<(DataFrame, usize)> {
    if kind_of(df, column) != Some(ColumnKind::Numeric) {
        return Ok((df.clone(), 0));
    }
    let values = float_values(df, column)?;
    let Some(fences) = fences(&values)? else {
        return Ok((df.clone(), 0));
    };
    let mask: BooleanChunked = values
        .into_iter()
        .map(|v| v.map_or(true, |v| fences.contains(v)))
        .collect();
    let kept = df.filter(&mask)?;
    let removed = df.height() - kept.height();
    Ok((kept, removed))
}

fn summarize(column: &str, values: &Float64Chunked) -> PolarsResult<Option<ColumnSummary>> {
    let (Some(mean), Some(min), Some(max)) = (values.mean(), values.min(), values.max()) else {
        return Ok(None);
    };
    let quantile = |q| values.quantile(q, QuantileMethod::Linear);
    let (Some(q1), Some(median), Some(q3)) = (quantile(0.25)?, quantile(0.5)?, quantile(0.75)?)
    else {
        return Ok(None);
    };
    Ok(Some(ColumnSummary {
        column: column.to_string(),
        count: values.len() - values.null_count(),
        mean,
        std: values.std(1).filter(|s| s.is_finite()),
        min,
        q1,
        median,
        q3,
        max,
    }))
}

/// Summary statistics for every numeric column.
///
/// # Errors
/// Propagates dataframe errors.
pub fn describe(df: &DataFrame) -> PolarsResult<Vec<ColumnSummary>> {
    let mut summaries = Vec::new();
    for column in numeric_columns(df) {
        if let Some(summary) = summarize(column, &float_values(df, column)?)? {
            summaries.push(summary);
        }
    }
    Ok(summaries)
}

/// Head, shape and column types.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    /// First rows, rendered per cell
    pub head: Vec<Vec<String>>,
    pub shape: (usize, usize),
    pub dtypes: Vec<(String, DataType)>,
}

fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "NaN".to_string(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

impl Overview {
    #[must_use]
    pub fn of(df: &DataFrame) -> Self {
        let head = df.head(Some(PREVIEW_ROWS));
        let rows = (0..head.height())
            .map(|i| {
                head.get_columns()
                    .iter()
                    .map(|c| c.get(i).map(|v| cell_text(&v)).unwrap_or_default())
                    .collect()
            })
            .collect();
        Self {
            head: rows,
            shape: df.shape(),
            dtypes: df
                .get_columns()
                .iter()
                .map(|c| (c.name().to_string(), c.dtype().clone()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<Bin>,
}

/// Equal-width histogram with Sturges' bin count.
#[must_use]
pub fn histogram(df: &DataFrame, column: &str) -> Option<Histogram> {
    if kind_of(df, column)? != ColumnKind::Numeric {
        return None;
    }
    let values: Vec<f64> = float_values(df, column).ok()?.into_iter().flatten().collect();
    Some(Histogram {
        column: column.to_string(),
        bins: stats::histogram(&values, stats::sturges_bins(values.len())),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountPlot {
    pub column: String,
    /// (category, count), most frequent first
    pub counts: Vec<(String, usize)>,
}

/// Category frequencies, descending; ties by label.
#[must_use]
pub fn count_plot(df: &DataFrame, column: &str) -> Option<CountPlot> {
    let labels = df.column(column).ok()?.as_materialized_series().str().ok()?;
    let mut tally: HashMap<&str, usize> = HashMap::new();
    for label in labels.into_iter().flatten() {
        *tally.entry(label).or_default() += 1;
    }
    let mut counts: Vec<(String, usize)> = tally
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Some(CountPlot {
        column: column.to_string(),
        counts,
    })
}

/// Scatter of a feature against the target with its OLS line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionPlot {
    pub x: String,
    pub y: String,
    pub points: Vec<(f64, f64)>,
    /// `(slope, intercept)`; `None` when x has no variance
    pub line: Option<(f64, f64)>,
}

/// Pearson r; `None` when either side has no variance.
fn correlation(x: &Float64Chunked, y: &Float64Chunked) -> Option<f64> {
    cov::pearson_corr(x, y)
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(-1.0, 1.0))
}

/// Least squares line through `slope = r * sy / sx`.
fn ols_line(x: &Float64Chunked, y: &Float64Chunked) -> Option<(f64, f64)> {
    let sx = x.std(1).filter(|s| *s > 0.0)?;
    let sy = y.std(1)?;
    let slope = if sy == 0.0 {
        0.0
    } else {
        correlation(x, y)? * sy / sx
    };
    Some((slope, y.mean()? - slope * x.mean()?))
}

#[must_use]
pub fn regression(df: &DataFrame, feature: &str) -> Option<RegressionPlot> {
    let x = float_values(df, feature).ok()?;
    let y = float_values(df, TARGET_COLUMN).ok()?;
    let points = x
        .into_iter()
        .zip(y.into_iter())
        .filter_map(|(a, b)| Some((a?, b?)))
        .collect();
    Some(RegressionPlot {
        x: feature.to_string(),
        y: TARGET_COLUMN.to_string(),
        line: ols_line(&x, &y),
        points,
    })
}

/// Five-number summary of the target within one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub label: String,
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Most extreme values inside the 1.5 IQR fences
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxGroup {
    fn from_values(label: String, values: Vec<f64>) -> Option<Self> {
        let values = Float64Chunked::from_vec(label.as_str().into(), values);
        let fences = fences(&values).ok()??;
        let (lo, hi) = values
            .into_no_null_iter()
            .filter(|v| fences.contains(*v))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let mut outliers: Vec<f64> = values
            .into_no_null_iter()
            .filter(|v| !fences.contains(*v))
            .collect();
        outliers.sort_by(f64::total_cmp);
        Some(Self {
            label,
            count: values.len(),
            q1: fences.q1,
            median: values.median()?,
            q3: fences.q3,
            whisker_low: lo,
            whisker_high: hi,
            outliers,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlot {
    pub category: String,
    pub target: String,
    /// Groups in order of first appearance
    pub groups: Vec<BoxGroup>,
}

#[must_use]
pub fn box_plot(df: &DataFrame, category: &str) -> Option<BoxPlot> {
    let labels = df.column(category).ok()?.as_materialized_series().str().ok()?;
    let target = float_values(df, TARGET_COLUMN).ok()?;

    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<f64>> = HashMap::new();
    for (label, v) in labels.into_iter().zip(target.into_iter()) {
        let (Some(label), Some(v)) = (label, v) else {
            continue;
        };
        groups
            .entry(label)
            .or_insert_with(|| {
                order.push(label);
                Vec::new()
            })
            .push(v);
    }

    Some(BoxPlot {
        category: category.to_string(),
        target: TARGET_COLUMN.to_string(),
        groups: order
            .into_iter()
            .filter_map(|label| {
                let values = groups.remove(label)?;
                BoxGroup::from_values(label.to_string(), values)
            })
            .collect(),
    })
}

/// Pearson correlation of every numeric column with the target, descending.
/// Undefined correlations sort last.
///
/// # Errors
/// Propagates dataframe errors.
pub fn correlation_ranking(df: &DataFrame) -> PolarsResult<Vec<(String, Option<f64>)>> {
    let target = float_values(df, TARGET_COLUMN)?;
    let mut ranking = Vec::new();
    for column in numeric_columns(df) {
        let values = float_values(df, column)?;
        ranking.push((column.to_string(), correlation(&values, &target)));
    }
    ranking.sort_by(|a, b| match (a.1, b.1) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    Ok(ranking)
}

/// Everything the EDA page shows that does not depend on a selection.
#[derive(Debug, Clone)]
pub struct EdaReport {
    pub raw: Overview,
    pub cleaning: CleaningReport,
    pub cleaned: DataFrame,
    pub summaries: Vec<ColumnSummary>,
    pub target_histogram: Histogram,
    pub correlations: Vec<(String, Option<f64>)>,
}

impl EdaReport {
    /// Numeric columns other than the target, for feature selection.
    #[must_use]
    pub fn feature_columns(&self) -> Vec<&str> {
        numeric_columns(&self.cleaned)
            .into_iter()
            .filter(|c| *c != TARGET_COLUMN)
            .collect()
    }

    #[must_use]
    pub fn categorical_columns(&self) -> Vec<&str> {
        categorical_columns(&self.cleaned)
    }
}

/// Service for running the EDA over a dataset source.
pub struct EdaService<D>
where
    D: DatasetSource,
{
    source: Arc<D>,
}

impl<D> EdaService<D>
where
    D: DatasetSource,
{
    pub fn new(source: Arc<D>) -> Self {
        Self { source }
    }

    /// Load, clean and summarize the dataset.
    ///
    /// # Errors
    /// Returns `WellbeingError::Dataset` if loading fails, the target column
    /// is absent or not numeric, or cleaning leaves no rows.
    pub fn run(&self) -> Result<EdaReport, WellbeingError> {
        let frame = self.source.load()?;
        if kind_of(&frame, TARGET_COLUMN) != Some(ColumnKind::Numeric) {
            return Err(DatasetError::MissingTarget(TARGET_COLUMN.into()).into());
        }

        let raw = Overview::of(&frame);
        let (cleaned, cleaning) = clean(frame).map_err(DatasetError::from)?;
        if cleaned.height() == 0 {
            return Err(DatasetError::Empty.into());
        }

        let target_histogram = histogram(&cleaned, TARGET_COLUMN)
            .ok_or_else(|| DatasetError::MissingTarget(TARGET_COLUMN.into()))?;

        Ok(EdaReport {
            raw,
            cleaning,
            summaries: describe(&cleaned).map_err(DatasetError::from)?,
            correlations: correlation_ranking(&cleaned).map_err(DatasetError::from)?,
            target_histogram,
            cleaned,
        })
    }

    #[must_use]
    pub fn source_name(&self) -> String {
        self.source.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    /// One missing row, one duplicate, one outlier in A.
    fn messy() -> DataFrame {
        df!(
            "Timestamp" => ["t"; 11],
            "A" => [
                Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0),
                Some(7.0), Some(8.0), Some(100.0), Some(1.0), None,
            ],
            "GENDER" => [
                "Male", "Female", "Male", "Female", "Male", "Female",
                "Male", "Female", "Male", "Male", "Female",
            ],
            TARGET_COLUMN => [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 10.0, 12.0]
        )
        .expect("valid frame")
    }

    struct Fixed(DataFrame);

    impl DatasetSource for Fixed {
        fn describe(&self) -> String {
            "fixture".into()
        }

        fn load(&self) -> Result<DataFrame, DatasetError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_clean_steps_are_reported() {
        let (cleaned, report) = clean(messy()).expect("clean");
        assert!(report.timestamp_dropped);
        assert_eq!(report.rows_before, 11);
        assert_eq!(report.missing_cells, 1);
        assert_eq!(report.missing_rows_removed, 1);
        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(
            report.outliers,
            vec![
                OutlierRemoval {
                    column: "A".into(),
                    removed: 1
                },
                OutlierRemoval {
                    column: TARGET_COLUMN.into(),
                    removed: 0
                },
            ]
        );
        assert_eq!(report.rows_after, 8);
        assert_eq!(report.rows_removed(), 3);
        assert_eq!(cleaned.shape(), (8, 3));
        assert!(cleaned.get_column_index(TIMESTAMP_COLUMN).is_none());
    }

    #[test]
    fn test_duplicates_keep_first_occurrence_in_order() {
        let df = df!(
            "a" => [1.0, 2.0, 1.0, 1.0],
            "b" => ["x", "y", "x", "z"]
        )
        .expect("frame");
        let (cleaned, report) = clean_with_order(df, &[]).expect("clean");
        assert_eq!(report.duplicates_removed, 1);
        let b: Vec<&str> = cleaned
            .column("b")
            .expect("b")
            .as_materialized_series()
            .str()
            .expect("str")
            .into_no_null_iter()
            .collect();
        assert_eq!(b, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_clean_twice_equals_clean_once() {
        let (once, _) = clean(messy()).expect("clean");
        let (twice, second) = clean(once.clone()).expect("clean");
        assert!(once.equals(&twice));
        assert_eq!(second.rows_removed(), 0);
        assert!(!second.timestamp_dropped);
    }

    #[test]
    fn test_iqr_filter_is_order_dependent() {
        // A first: fences [0, 0] drop the 100 row, then B's Q3 of 4.75
        // puts 13 past the upper fence. B first keeps every row, and A
        // then drops only the 100 row.
        let df = df!(
            "A" => [0.0, 0.0, 0.0, 0.0, 100.0],
            "B" => [0.0, 1.0, 2.0, 13.0, 10.0]
        )
        .expect("frame");
        let (a_first, a_report) = clean_with_order(df.clone(), &["A", "B"]).expect("clean");
        let (b_first, b_report) = clean_with_order(df, &["B", "A"]).expect("clean");
        assert_eq!(a_report.duplicates_removed, 0);
        assert_eq!(a_first.height(), 3);
        assert_eq!(b_first.height(), 4);
        assert_eq!(
            b_report.outliers,
            vec![
                OutlierRemoval {
                    column: "B".into(),
                    removed: 0
                },
                OutlierRemoval {
                    column: "A".into(),
                    removed: 1
                },
            ]
        );
    }

    #[test]
    fn test_fences_are_inclusive() {
        // Q1 = 2, Q3 = 4, fences [-1, 7]
        let df = df!("x" => [1.0, 2.0, 3.0, 4.0, 7.0]).expect("frame");
        let (kept, removed) = iqr_filter(&df, "x").expect("filter");
        assert_eq!(removed, 0);
        assert_eq!(kept.height(), 5);
        let (_, removed) = iqr_filter(&df, "missing").expect("filter");
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_describe_and_correlation() {
        let (cleaned, _) = clean(messy()).expect("clean");
        let summaries = describe(&cleaned).expect("describe");
        assert_eq!(summaries.len(), 2);
        let a = &summaries[0];
        assert_eq!(a.column, "A");
        assert_eq!(a.count, 8);
        assert_eq!(a.min, 1.0);
        assert_eq!(a.max, 8.0);
        assert_eq!(a.mean, 4.5);
        assert_eq!((a.q1, a.median, a.q3), (2.75, 4.5, 6.25));
        let std = a.std.expect("std");
        assert!((std - 2.449_489_742_783_178).abs() < 1e-9);

        let ranking = correlation_ranking(&cleaned).expect("ranking");
        assert_eq!(ranking.len(), 2);
        for (_, r) in &ranking {
            assert!((r.expect("defined") - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_constant_column_has_undefined_correlation() {
        let df = df!(
            "flat" => [1.0, 1.0, 1.0],
            "up" => [1.0, 2.0, 3.0],
            TARGET_COLUMN => [3.0, 2.0, 1.0]
        )
        .expect("frame");
        let ranking = correlation_ranking(&df).expect("ranking");
        assert_eq!(ranking[0].0, TARGET_COLUMN);
        assert_eq!(ranking[1].0, "up");
        assert!((ranking[1].1.expect("defined") + 1.0).abs() < 1e-12);
        assert_eq!(ranking[2], ("flat".to_string(), None));
    }

    #[test]
    fn test_count_plot_orders_by_frequency() {
        let df = df!("c" => ["b", "a", "b", "c", "a", "b"]).expect("frame");
        let plot = count_plot(&df, "c").expect("plot");
        assert_eq!(
            plot.counts,
            vec![("b".into(), 3), ("a".into(), 2), ("c".into(), 1)]
        );
        assert!(count_plot(&df!("n" => [1.0]).expect("frame"), "n").is_none());
    }

    #[test]
    fn test_box_plot_groups_in_appearance_order() {
        let df = df!(
            "g" => ["y", "x", "y", "y", "y", "y"],
            TARGET_COLUMN => [1.0, 5.0, 2.0, 3.0, 4.0, 100.0]
        )
        .expect("frame");
        let plot = box_plot(&df, "g").expect("plot");
        assert_eq!(plot.groups.len(), 2);
        let y = &plot.groups[0];
        assert_eq!(y.label, "y");
        assert_eq!(y.count, 5);
        assert_eq!((y.q1, y.median, y.q3), (2.0, 3.0, 4.0));
        assert_eq!((y.whisker_low, y.whisker_high), (1.0, 4.0));
        assert_eq!(y.outliers, vec![100.0]);
        assert_eq!(plot.groups[1].label, "x");
    }

    #[test]
    fn test_regression_plot() {
        let df = df!(
            "x" => [0.0, 1.0, 2.0],
            TARGET_COLUMN => [1.0, 3.0, 5.0]
        )
        .expect("frame");
        let plot = regression(&df, "x").expect("plot");
        assert_eq!(plot.points, vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
        let (slope, intercept) = plot.line.expect("line");
        assert!((slope - 2.0).abs() < 1e-12);
        assert!((intercept - 1.0).abs() < 1e-12);

        let flat = df!("x" => [1.0, 1.0], TARGET_COLUMN => [1.0, 2.0]).expect("frame");
        assert_eq!(regression(&flat, "x").expect("plot").line, None);
    }

    #[test]
    fn test_overview_renders_head() {
        let overview = Overview::of(&messy());
        assert_eq!(overview.shape, (11, 4));
        assert_eq!(overview.head.len(), PREVIEW_ROWS);
        assert_eq!(overview.head[0][0], "t");
        assert_eq!(overview.head[0][2], "Male");
        assert_eq!(overview.dtypes[1], ("A".to_string(), DataType::Float64));
    }

    #[test]
    fn test_service_run() {
        let service = EdaService::new(Arc::new(Fixed(messy())));
        let report = service.run().expect("run");
        assert_eq!(report.raw.shape, (11, 4));
        assert_eq!(report.cleaned.shape(), (8, 3));
        assert_eq!(report.feature_columns(), vec!["A"]);
        assert_eq!(report.categorical_columns(), vec!["GENDER"]);
        assert_eq!(
            report
                .target_histogram
                .bins
                .iter()
                .map(|b| b.count)
                .sum::<usize>(),
            8
        );
    }

    #[test]
    fn test_service_requires_numeric_target() {
        let service = EdaService::new(Arc::new(Fixed(df!("a" => [1i64]).expect("frame"))));
        assert!(matches!(
            service.run(),
            Err(WellbeingError::Dataset(DatasetError::MissingTarget(_)))
        ));
    }
}
