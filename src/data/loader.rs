use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SeriesError};

use super::filter::MeasureRange;
use super::model::{Header, Series, SeriesOrder};

/// Field delimiter of the measurement files.
pub const DELIMITER: u8 = b';';

/// Index of the measure (x axis) column.
pub const MEASURE_COLUMN: usize = 0;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the `parameter` series of a measurement file.
///
/// The file handle lives only for the duration of this call, so it is
/// closed on success as well as on every error path.
pub fn load_file(
    path: &Path,
    parameter: &str,
    range: &MeasureRange,
    order: SeriesOrder,
) -> Result<Series> {
    let file = File::open(path)?;
    log::info!("reading {}", path.display());
    load_series(file, parameter, range, order)
}

/// Stream `;`-delimited rows from `input` and collect `(measure, parameter)`
/// pairs whose measure lies in `range`.
///
/// * the first row is the header
/// * column 0 is the measure, whatever the requested parameter
/// * any missing or non-numeric field aborts with [`SeriesError::Parse`],
///   including on rows the range would drop
pub fn load_series<R: Read>(
    input: R,
    parameter: &str,
    range: &MeasureRange,
    order: SeriesOrder,
) -> Result<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let header = Header::new(reader.headers()?.iter().map(str::to_string).collect());
    let y_idx = resolve_column(&header, parameter)?;
    let x_name = header.measure_name().unwrap_or_default();
    log::debug!(
        "plotting column {y_idx} '{parameter}' against '{x_name}', range {range}, {} columns",
        header.columns.len()
    );

    let mut series = Series::new();
    let mut rows = 0usize;
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;
        rows = row;

        let x = parse_field(record.get(MEASURE_COLUMN), row, x_name)?;
        let y = parse_field(record.get(y_idx), row, parameter)?;

        if range.contains(x) {
            series.push(x, y);
        }
    }
    log::info!("read {rows} rows, {} within range {range}", series.len());

    Ok(series.ordered(order))
}

/// Resolve `parameter` to its column index.
///
/// Index 0 is a valid answer (the measure column itself); only a name
/// missing from the header is an error.
pub fn resolve_column(header: &Header, parameter: &str) -> Result<usize> {
    header
        .position(parameter)
        .ok_or_else(|| SeriesError::NotFound(parameter.to_string()))
}

fn parse_field(field: Option<&str>, row: usize, column: &str) -> Result<f64> {
    let raw = field.unwrap_or("");
    raw.trim().parse::<f64>().map_err(|_| SeriesError::Parse {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "measure;measure;value\n0;0;10\n1;1;20\n2;2;30\n3;3;40\n";

    fn load(input: &str, parameter: &str, range: MeasureRange) -> Result<Series> {
        load_series(input.as_bytes(), parameter, &range, SeriesOrder::Input)
    }

    #[test]
    fn test_load_value_column() {
        let s = load(SAMPLE, "value", MeasureRange::default()).unwrap();
        assert_eq!(s.xs(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(s.ys(), &[10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_load_measure_column_at_index_zero() {
        let s = load(SAMPLE, "measure", MeasureRange::default()).unwrap();
        assert_eq!(s.xs(), s.ys());
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_range_filter_half_open() {
        let s = load(SAMPLE, "value", MeasureRange::new(Some(1.0), Some(3.0))).unwrap();
        assert_eq!(s.xs(), &[1.0, 2.0]);
        assert_eq!(s.ys(), &[20.0, 30.0]);
    }

    #[test]
    fn test_range_filter_retains_exactly_matching_measures() {
        let range = MeasureRange::new(Some(0.5), None);
        let all = load(SAMPLE, "value", MeasureRange::default()).unwrap();
        let kept = load(SAMPLE, "value", range).unwrap();
        assert!(kept.xs().iter().all(|&m| range.contains(m)));
        let dropped = all.xs().iter().filter(|&&m| !range.contains(m)).count();
        assert_eq!(dropped + kept.len(), all.len());
    }

    #[test]
    fn test_unknown_parameter_not_found() {
        let err = load(SAMPLE, "pressure", MeasureRange::default()).unwrap_err();
        assert!(matches!(err, SeriesError::NotFound(ref p) if p == "pressure"));
    }

    #[test]
    fn test_empty_input_not_found() {
        let err = load("", "measure", MeasureRange::default()).unwrap_err();
        assert!(matches!(err, SeriesError::NotFound(_)));
    }

    #[test]
    fn test_header_only_is_empty_series() {
        let s = load("measure;value\n", "value", MeasureRange::default()).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_non_numeric_value_is_parse_error() {
        let input = "measure;value\n0;1\n1;oops\n";
        let err = load(input, "value", MeasureRange::default()).unwrap_err();
        match err {
            SeriesError::Parse { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "value");
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_parse_error_outside_range_still_fatal() {
        let input = "measure;value\n0;bad\n5;1\n";
        let err = load(input, "value", MeasureRange::new(Some(3.0), None)).unwrap_err();
        assert!(matches!(err, SeriesError::Parse { row: 1, .. }));
    }

    #[test]
    fn test_non_numeric_measure_is_parse_error() {
        let input = "time;value\nnoon;1\n";
        let err = load(input, "value", MeasureRange::default()).unwrap_err();
        assert!(matches!(err, SeriesError::Parse { ref column, .. } if column == "time"));
    }

    #[test]
    fn test_short_row_is_parse_error() {
        let input = "measure;a;b\n0;1;2\n1;1\n";
        let err = load(input, "b", MeasureRange::default()).unwrap_err();
        assert!(matches!(err, SeriesError::Parse { row: 2, .. }));
    }

    #[test]
    fn test_whitespace_around_numbers() {
        let s = load("measure;value\n 1 ; 2.5\n", "value", MeasureRange::default()).unwrap();
        assert_eq!(s.xs(), &[1.0]);
        assert_eq!(s.ys(), &[2.5]);
    }

    #[test]
    fn test_sorted_unique_order() {
        let input = "measure;value\n2;1\n1;2\n2;3\n";
        let s = load_series(
            input.as_bytes(),
            "value",
            &MeasureRange::default(),
            SeriesOrder::SortedUnique,
        )
        .unwrap();
        assert_eq!(s.xs(), &[1.0, 2.0]);
        assert_eq!(s.ys(), &[2.0, 3.0]);
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let a = load(SAMPLE, "value", MeasureRange::new(Some(1.0), None)).unwrap();
        let b = load(SAMPLE, "value", MeasureRange::new(Some(1.0), None)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_load_file_roundtrip_and_missing() {
        let path = std::env::temp_dir().join(format!("series_plot_loader_{}.csv", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let s = load_file(&path, "value", &MeasureRange::default(), SeriesOrder::Input).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(s.len(), 4);

        let err = load_file(&path, "value", &MeasureRange::default(), SeriesOrder::Input)
            .unwrap_err();
        assert!(matches!(err, SeriesError::Io(_)));
    }
}
