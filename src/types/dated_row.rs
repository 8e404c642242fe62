use crate::error::WeatherRecordsError;
use crate::types::calendar::{half_day_interval, reconstruct_date};
use crate::types::raw_record::RawRecord;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A raw record placed on the time axis.
///
/// `interval_start`/`interval_end` bracket the day so bar-style plots can draw one
/// full-width bar per date.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DatedRow {
    pub record: RawRecord,
    pub date: NaiveDate,
    pub interval_start: NaiveDateTime,
    pub interval_end: NaiveDateTime,
}

impl TryFrom<RawRecord> for DatedRow {
    type Error = WeatherRecordsError;

    fn try_from(record: RawRecord) -> Result<Self, Self::Error> {
        let date = reconstruct_date(record.year, record.month, record.day)?;
        let (interval_start, interval_end) = half_day_interval(date);
        Ok(DatedRow {
            record,
            date,
            interval_start,
            interval_end,
        })
    }
}
