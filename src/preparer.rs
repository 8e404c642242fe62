//! Turns the raw table into a dated, windowed time series ready for plotting.

use crate::error::WeatherRecordsError;
use crate::types::dated_row::DatedRow;
use crate::types::selection_window::SelectionWindow;
use crate::types::weather_table::WeatherTable;
use log::debug;

/// Selects the rows of `table` that fall inside `window` and puts each one on the time axis.
///
/// The window is first truncated to the table's year bounds (see
/// [`SelectionWindow::normalize`]). Surviving rows keep their source order and are
/// not deduplicated.
///
/// # Errors
///
/// * [`WeatherRecordsError::InvalidCalendarDate`] on the first row whose year/month/day do
///   not form a real date. The whole call fails; a partially dated series is never returned.
/// * [`WeatherRecordsError::EmptyWindow`] if no row falls inside the window.
///
/// # Example
///
/// ```
/// use weather_records::{prepare, RawRecord, SelectionWindow, WeatherTable};
///
/// let table = WeatherTable::new(vec![
///     RawRecord::empty(2019, 12, 31),
///     RawRecord::empty(2020, 1, 1),
/// ]);
/// let rows = prepare(&table, SelectionWindow::single_year(2020))?;
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].date.to_string(), "2020-01-01");
/// # Ok::<(), weather_records::WeatherRecordsError>(())
/// ```
pub fn prepare(
    table: &WeatherTable,
    window: SelectionWindow,
) -> Result<Vec<DatedRow>, WeatherRecordsError> {
    let window = window.normalize(table.bounds());

    let rows = table
        .rows_in(window)
        .cloned()
        .map(DatedRow::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(WeatherRecordsError::EmptyWindow {
            start_year: window.start_year(),
            end_year: window.end_year(),
        });
    }
    debug!("Prepared {} dated rows for window {}", rows.len(), window);
    Ok(rows)
}
