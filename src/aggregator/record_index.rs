//! One-pass index of all-time extremes per calendar day.

use crate::types::raw_record::RawRecord;
use ordered_float::OrderedFloat;
use std::collections::HashMap;

/// An extremal observation and the year it was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extreme {
    pub value: OrderedFloat<f64>,
    pub year: i32,
}

/// Record high (from `tmax`) and record low (from `tmin`) for one calendar day.
///
/// Either side is `None` when every historical value for that day is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayRecord {
    pub high: Option<Extreme>,
    pub low: Option<Extreme>,
}

impl DayRecord {
    fn observe(&mut self, record: &RawRecord) {
        // Strict comparisons: the first row holding an extreme keeps it.
        if let Some(value) = observed(record.tmax) {
            if self.high.map_or(true, |best| value > best.value) {
                self.high = Some(Extreme {
                    value,
                    year: record.year,
                });
            }
        }
        if let Some(value) = observed(record.tmin) {
            if self.low.map_or(true, |best| value < best.value) {
                self.low = Some(Extreme {
                    value,
                    year: record.year,
                });
            }
        }
    }
}

/// Missing and NaN cells never take part in a comparison.
fn observed(value: Option<f64>) -> Option<OrderedFloat<f64>> {
    value.filter(|v| !v.is_nan()).map(OrderedFloat)
}

/// Maps `(month, day)` to the all-time [`DayRecord`] for that calendar day.
///
/// Built once from the full table in source order, so ties resolve to the earliest row.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    days: HashMap<(u32, u32), DayRecord>,
}

impl RecordIndex {
    pub fn build<'a>(records: impl IntoIterator<Item = &'a RawRecord>) -> Self {
        let mut days: HashMap<(u32, u32), DayRecord> = HashMap::new();
        for record in records {
            days.entry((record.month, record.day))
                .or_default()
                .observe(record);
        }
        Self { days }
    }

    /// The record for a calendar day, or `None` if the day never occurs in the data.
    pub fn get(&self, month: u32, day: u32) -> Option<&DayRecord> {
        self.days.get(&(month, day))
    }

    /// Number of distinct calendar days seen.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
