//! CSV dataset adapter backed by polars.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;

use crate::ports::{DatasetError, DatasetSource};

/// Text read as a missing cell.
pub const MISSING_MARKERS: [&str; 12] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "#N/A", "<NA>",
];

/// Reads the survey dataset from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    path: PathBuf,
}

impl CsvDataset {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_options() -> CsvReadOptions {
    let null_values = MISSING_MARKERS.iter().map(|m| (*m).into()).collect();
    CsvReadOptions::default()
        .with_has_header(true)
        // Scan every row so one stray value turns the column into text
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default()
                .with_missing_is_null(true)
                .with_null_values(Some(NullValues::AllColumns(null_values))),
        )
}

/// Parse CSV from any in-memory or file reader into a dataframe.
///
/// Short rows are padded with nulls so the missing-value step removes them.
///
/// # Errors
/// Returns `DatasetError::Polars` for malformed input.
pub fn read_frame<R: MmapBytesReader>(reader: R) -> Result<DataFrame, DatasetError> {
    Ok(read_options().into_reader_with_file_handle(reader).finish()?)
}

impl DatasetSource for CsvDataset {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<DataFrame, DatasetError> {
        let file = File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DatasetError::NotFound(self.describe())
            } else {
                DatasetError::Io(e)
            }
        })?;
        let df = read_frame(file)?;
        let (rows, cols) = df.shape();
        tracing::info!("Loaded dataset {:?}: {rows} rows x {cols} columns", self.path);
        Ok(df)
    }
}
