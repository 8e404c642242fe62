use crate::types::raw_record::RawRecord;
use chrono::{Datelike, NaiveDate};

/// Every day of `year` in calendar order, with a flat 10 °C mean and no other observations.
pub(crate) fn full_year(year: i32) -> Vec<RawRecord> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .expect("valid new year's day")
        .iter_days()
        .take_while(|d| d.year() == year)
        .map(|d| RawRecord {
            tmean: Some(10.0),
            ..RawRecord::empty(year, d.month(), d.day())
        })
        .collect()
}

/// Every day of `year` with `tmax`/`tmin` given by the closures.
pub(crate) fn full_year_with(
    year: i32,
    tmax: impl Fn(u32, u32) -> Option<f64>,
    tmin: impl Fn(u32, u32) -> Option<f64>,
) -> Vec<RawRecord> {
    full_year(year)
        .into_iter()
        .map(|r| {
            let (m, d) = (r.month, r.day);
            r.with_temperatures(tmax(m, d), tmin(m, d))
        })
        .collect()
}
