//! Builds the record book: all-time highs and lows for every calendar day in a window.

pub mod record_index;

use crate::error::{Extremum, WeatherRecordsError};
use crate::types::calendar::{half_day_interval, reconstruct_date};
use crate::types::record_book_row::RecordBookRow;
use crate::types::selection_window::SelectionWindow;
use crate::types::weather_table::WeatherTable;
use log::debug;
use record_index::{Extreme, RecordIndex};
use std::collections::BTreeMap;

/// Computes the record book for `window` over the whole of `table`.
///
/// For every queried year (ascending), every month (1 to 12) and every day that
/// occurs for that year and month in the table (in source order), one
/// [`RecordBookRow`] is emitted holding the highest `tmax` and lowest `tmin` ever
/// recorded on that calendar day, in *any* year of the dataset. Record values are
/// therefore identical for all queried years sharing a month/day.
///
/// The window is truncated to the table's bounds first. Years without rows simply
/// contribute nothing; a window with no rows at all yields an empty vector.
///
/// Ties are resolved in favour of the first row of `table` holding the extremal value.
///
/// # Errors
///
/// * [`WeatherRecordsError::InvalidCalendarDate`] if a row in the window has a month/day
///   that does not exist in its year.
/// * [`WeatherRecordsError::NoValidExtremum`] if every historical `tmax` (or `tmin`) for a
///   calendar day in the window is missing.
///
/// # Example
///
/// ```
/// use weather_records::{aggregate, RawRecord, SelectionWindow, WeatherTable};
///
/// let table = WeatherTable::new(vec![
///     RawRecord::empty(2018, 6, 1).with_temperatures(None, Some(9.0)),
///     RawRecord::empty(2019, 6, 1).with_temperatures(Some(30.0), Some(11.0)),
///     RawRecord::empty(2020, 6, 1).with_temperatures(Some(25.0), Some(8.5)),
/// ]);
/// let book = aggregate(&table, SelectionWindow::single_year(2020))?;
/// assert_eq!(book.len(), 1);
/// assert_eq!((book[0].record_high_value, book[0].record_high_year), (30.0, 2019));
/// assert_eq!((book[0].record_low_value, book[0].record_low_year), (8.5, 2020));
/// # Ok::<(), weather_records::WeatherRecordsError>(())
/// ```
pub fn aggregate(
    table: &WeatherTable,
    window: SelectionWindow,
) -> Result<Vec<RecordBookRow>, WeatherRecordsError> {
    let index = RecordIndex::build(table.records());
    aggregate_with_index(&index, table, window)
}

/// Same as [`aggregate`], reusing an index already built from `table`.
///
/// An index built from any other table silently yields wrong records, so reuse is only
/// offered publicly through [`crate::WeatherReport::for_windows`].
pub(crate) fn aggregate_with_index(
    index: &RecordIndex,
    table: &WeatherTable,
    window: SelectionWindow,
) -> Result<Vec<RecordBookRow>, WeatherRecordsError> {
    let window = window.normalize(table.bounds());

    // (year, month) ordering gives years ascending, then months ascending.
    let mut days_by_month: BTreeMap<(i32, u32), Vec<u32>> = BTreeMap::new();
    for record in table.rows_in(window).filter(|r| (1..=12).contains(&r.month)) {
        days_by_month
            .entry((record.year, record.month))
            .or_default()
            .push(record.day);
    }

    let mut rows = Vec::new();
    for ((queried_year, month), days) in days_by_month {
        for day in days {
            rows.push(record_row(index, queried_year, month, day)?);
        }
    }
    debug!(
        "Built {} record book rows for window {} from {} calendar days",
        rows.len(),
        window,
        index.len()
    );
    Ok(rows)
}

fn record_row(
    index: &RecordIndex,
    queried_year: i32,
    month: u32,
    day: u32,
) -> Result<RecordBookRow, WeatherRecordsError> {
    let date = reconstruct_date(queried_year, month, day)?;
    let (interval_start, interval_end) = half_day_interval(date);
    let record = index.get(month, day).copied().unwrap_or_default();
    let missing = |kind| WeatherRecordsError::NoValidExtremum { month, day, kind };
    let high: Extreme = record.high.ok_or_else(|| missing(Extremum::High))?;
    let low: Extreme = record.low.ok_or_else(|| missing(Extremum::Low))?;

    Ok(RecordBookRow {
        queried_year,
        month,
        day,
        date,
        interval_start,
        interval_end,
        record_high_value: high.value.into_inner(),
        record_high_year: high.year,
        record_low_value: low.value.into_inner(),
        record_low_year: low.year,
    })
}
