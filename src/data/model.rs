use std::fmt;

// ---------------------------------------------------------------------------
// Header – column names of the first row
// ---------------------------------------------------------------------------

/// Column names in file order. Column 0 is always the measure (x axis).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub columns: Vec<String>,
}

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Header { columns }
    }

    /// Index of the first column named `name`, if any.
    /// `Some(0)` is a regular hit on the measure column.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Name of the measure column, when the header is not empty.
    pub fn measure_name(&self) -> Option<&str> {
        self.columns.first().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// SeriesOrder – what happens to retained points before plotting
// ---------------------------------------------------------------------------

/// Ordering policy applied to the retained points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesOrder {
    /// Keep input order; duplicate measures stay distinct points.
    #[default]
    Input,
    /// Sort ascending by measure; a later duplicate overwrites an earlier one.
    SortedUnique,
}

// ---------------------------------------------------------------------------
// Series – paired (measure, value) sequences
// ---------------------------------------------------------------------------

/// Two equally long sequences: `xs` holds measures, `ys` the parameter values.
///
/// The fields are private so that every mutation goes through [`Series::push`]
/// and the lengths can never drift apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Series {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Drop the first `skip` points. Fewer points than `skip` gives an empty series.
    pub fn trimmed(&self, skip: usize) -> Series {
        let start = skip.min(self.len());
        Series {
            xs: self.xs[start..].to_vec(),
            ys: self.ys[start..].to_vec(),
        }
    }

    /// Apply an ordering policy, consuming the series.
    pub fn ordered(self, order: SeriesOrder) -> Series {
        match order {
            SeriesOrder::Input => self,
            SeriesOrder::SortedUnique => self.sorted_unique(),
        }
    }

    /// Sort by measure and collapse equal measures, keeping the last value seen.
    fn sorted_unique(self) -> Series {
        let mut pairs: Vec<(f64, f64)> = self.points().collect();
        // Stable sort: equal measures keep input order, so the last one wins below.
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut out = Series::with_capacity(pairs.len());
        for (x, y) in pairs {
            match out.xs.last() {
                Some(&last) if last == x => {
                    if let Some(slot) = out.ys.last_mut() {
                        *slot = y;
                    }
                }
                _ => out.push(x, y),
            }
        }
        out
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} points", self.len())?;
        if let (Some(first), Some(last)) = (self.xs.first(), self.xs.last()) {
            write!(f, " (measure {first} .. {last})")?;
        }
        Ok(())
    }
}
