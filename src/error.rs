use thiserror::Error;

// ---------------------------------------------------------------------------
// SeriesError – every way loading a series can fail
// ---------------------------------------------------------------------------

/// Errors raised while resolving arguments and loading a series.
/// None of them is recovered from: the run aborts on the first one.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// Malformed command line value, e.g. a `--measures` range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested parameter is not a header column.
    #[error("column '{0}' not found in header")]
    NotFound(String),

    /// A measure or value field is missing or not a number.
    /// `row` counts data rows from 1, the header excluded.
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("cannot open input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SeriesError>;
