//! The in-memory historical dataset both components read from.

use crate::types::raw_record::RawRecord;
use crate::types::selection_window::{SelectionWindow, YearBounds};

/// Daily records in source (file) order, plus the years the dataset is valid for.
///
/// Row order matters: record ties are broken in favour of the earliest row.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherTable {
    records: Vec<RawRecord>,
    bounds: YearBounds,
}

impl WeatherTable {
    /// Wraps `records`, deriving the year bounds from the lowest and highest year present.
    ///
    /// An empty table gets the degenerate bounds `0..=0`.
    pub fn new(records: Vec<RawRecord>) -> Self {
        let bounds = records
            .iter()
            .map(|r| r.year)
            .fold(None, |acc: Option<YearBounds>, year| match acc {
                None => Some(YearBounds::new(year, year)),
                Some(b) => Some(YearBounds::new(b.min_year.min(year), b.max_year.max(year))),
            })
            .unwrap_or(YearBounds::new(0, 0));
        Self { records, bounds }
    }

    /// Overrides the derived year bounds, e.g. with the documented coverage of the dataset.
    pub fn with_bounds(mut self, bounds: YearBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose year falls inside `window`, in source order. The window is used as given.
    pub fn rows_in(&self, window: SelectionWindow) -> impl Iterator<Item = &RawRecord> + '_ {
        self.records.iter().filter(move |r| window.contains(r.year))
    }
}

impl From<Vec<RawRecord>> for WeatherTable {
    fn from(records: Vec<RawRecord>) -> Self {
        WeatherTable::new(records)
    }
}
