use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One line of the record book: the all-time extremes of a calendar day,
/// repeated for every queried year that contains that day.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RecordBookRow {
    pub queried_year: i32,
    pub month: u32,
    pub day: u32,
    pub date: NaiveDate,
    pub interval_start: NaiveDateTime,
    pub interval_end: NaiveDateTime,
    pub record_high_value: f64, // highest Tmax °C ever seen on this month/day
    pub record_high_year: i32,
    pub record_low_value: f64, // lowest Tmin °C ever seen on this month/day
    pub record_low_year: i32,
}

impl RecordBookRow {
    /// Spread between the record low and the record high, in °C.
    pub fn record_range(&self) -> f64 {
        self.record_high_value - self.record_low_value
    }
}
