use crate::error::WeatherRecordsError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Builds a calendar date from separate year/month/day fields.
///
/// No clamping or rollover: `2019-02-30` is rejected, not turned into March 2nd.
pub(crate) fn reconstruct_date(
    year: i32,
    month: u32,
    day: u32,
) -> Result<NaiveDate, WeatherRecordsError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(WeatherRecordsError::InvalidCalendarDate { year, month, day })
}

/// The one-day interval centred on `date`: midnight minus and plus twelve hours.
///
/// Always a fixed 24h span, so `date` sits exactly in the middle.
pub(crate) fn half_day_interval(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let midnight = date.and_time(NaiveTime::MIN);
    let half_day = Duration::hours(12);
    (midnight - half_day, midnight + half_day)
}
