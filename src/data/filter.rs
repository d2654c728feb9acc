use std::fmt;
use std::str::FromStr;

use crate::error::SeriesError;

// ---------------------------------------------------------------------------
// MeasureRange – optional bounds on the measure column
// ---------------------------------------------------------------------------

/// Range of accepted measures: `start <= m < end`, each bound optional.
/// The default range has no bounds and accepts everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeasureRange {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl MeasureRange {
    pub fn new(start: Option<f64>, end: Option<f64>) -> Self {
        MeasureRange { start, end }
    }

    /// Whether a measure passes the filter.
    ///
    /// * lower bound inclusive, upper bound exclusive
    /// * a missing bound never rejects
    /// * NaN is rejected by any set bound
    pub fn contains(&self, measure: f64) -> bool {
        self.start.map_or(true, |s| measure >= s) && self.end.map_or(true, |e| measure < e)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Parse `"<start>-<end>"`, where either side may be empty.
///
/// `"10-50"`, `"10-"`, `"-50"` and `"-"` are accepted. The separator is a
/// plain `-`, so negative bounds cannot be written.
impl FromStr for MeasureRange {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let [start, end] = parts.as_slice() else {
            return Err(SeriesError::InvalidArgument(format!(
                "measures range '{s}' must have the form START-END"
            )));
        };
        Ok(MeasureRange::new(parse_bound(start, s)?, parse_bound(end, s)?))
    }
}

fn parse_bound(tok: &str, whole: &str) -> Result<Option<f64>, SeriesError> {
    let tok = tok.trim();
    if tok.is_empty() {
        return Ok(None);
    }
    tok.parse::<f64>().map(Some).map_err(|_| {
        SeriesError::InvalidArgument(format!(
            "measures range '{whole}': bound '{tok}' is not a number"
        ))
    })
}

impl fmt::Display for MeasureRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(s) => write!(f, "[{s}, ")?,
            None => write!(f, "(-inf, ")?,
        }
        match self.end {
            Some(e) => write!(f, "{e})"),
            None => write!(f, "+inf)"),
        }
    }
}
