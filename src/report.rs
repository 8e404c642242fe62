//! Bundles the prepared series and the record book for one selection window.

use crate::aggregator::aggregate_with_index;
use crate::aggregator::record_index::RecordIndex;
use crate::error::WeatherRecordsError;
use crate::frames::IntoWeatherFrame;
use crate::preparer::prepare;
use crate::types::dated_row::DatedRow;
use crate::types::record_book_row::RecordBookRow;
use crate::types::selection_window::SelectionWindow;
use crate::types::weather_table::WeatherTable;
use bon::bon;
use log::info;
use polars::prelude::DataFrame;

/// Everything a plot of one window needs: the observations inside the window and the
/// all-time records for the same days.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// The window after truncation to the dataset bounds.
    pub window: SelectionWindow,
    pub observations: Vec<DatedRow>,
    pub records: Vec<RecordBookRow>,
}

#[bon]
impl WeatherReport {
    /// Runs [`prepare`] and [`crate::aggregate`] over the same table and window.
    ///
    /// # Example
    ///
    /// ```
    /// use weather_records::{RawRecord, SelectionWindow, WeatherReport, WeatherTable};
    ///
    /// let table = WeatherTable::new(vec![
    ///     RawRecord::empty(2019, 6, 1).with_temperatures(Some(30.0), Some(11.0)),
    ///     RawRecord::empty(2020, 6, 1).with_temperatures(Some(25.0), Some(8.5)),
    /// ]);
    /// let report = WeatherReport::builder()
    ///     .table(&table)
    ///     .window(SelectionWindow::single_year(2020))
    ///     .build()?;
    /// assert_eq!(report.observations.len(), 1);
    /// assert_eq!(report.records[0].record_high_year, 2019);
    /// # Ok::<(), weather_records::WeatherRecordsError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Any error of [`prepare`] or [`crate::aggregate`].
    #[builder]
    pub fn new(table: &WeatherTable, window: SelectionWindow) -> Result<Self, WeatherRecordsError> {
        Self::with_index(table, window, &RecordIndex::build(table.records()))
    }

    /// One report per window, sharing a single record index built from `table`.
    pub fn for_windows(
        table: &WeatherTable,
        windows: impl IntoIterator<Item = SelectionWindow>,
    ) -> Result<Vec<Self>, WeatherRecordsError> {
        let index = RecordIndex::build(table.records());
        windows
            .into_iter()
            .map(|window| Self::with_index(table, window, &index))
            .collect()
    }

    // `index` must have been built from `table`.
    fn with_index(
        table: &WeatherTable,
        window: SelectionWindow,
        index: &RecordIndex,
    ) -> Result<Self, WeatherRecordsError> {
        let window = window.normalize(table.bounds());
        let observations = prepare(table, window)?;
        let records = aggregate_with_index(index, table, window)?;
        info!(
            "Report for {}: {} observations, {} record book rows",
            window,
            observations.len(),
            records.len()
        );
        Ok(Self {
            window,
            observations,
            records,
        })
    }

    /// The observations and record book as Polars frames, in that order.
    pub fn to_data_frames(&self) -> Result<(DataFrame, DataFrame), WeatherRecordsError> {
        Ok((
            self.observations.to_data_frame()?,
            self.records.to_data_frame()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::full_year_with;
    use crate::types::selection_window::YearBounds;

    fn table() -> WeatherTable {
        let mut records = Vec::new();
        for year in 2017..=2020 {
            let warmth = f64::from(year - 2017);
            records.extend(full_year_with(
                year,
                |m, _| Some(15.0 + warmth + f64::from(m)),
                |m, _| Some(warmth + f64::from(m)),
            ));
        }
        WeatherTable::new(records).with_bounds(YearBounds::new(1815, 2020))
    }

    #[test]
    fn test_report_combines_both_views() -> Result<(), Box<dyn std::error::Error>> {
        let table = table();
        let report = WeatherReport::builder()
            .table(&table)
            .window(SelectionWindow::new(2019, 5)?)
            .build()?;

        assert_eq!(report.window, SelectionWindow::new(2019, 2)?);
        assert_eq!(report.observations.len(), 365 + 366);
        assert_eq!(report.records.len(), report.observations.len());
        for (observation, record) in report.observations.iter().zip(&report.records) {
            assert_eq!(observation.date, record.date);
            assert_eq!(observation.interval_start, record.interval_start);
        }
        Ok(())
    }

    #[test]
    fn test_for_windows_matches_individual_reports() -> Result<(), Box<dyn std::error::Error>> {
        let table = table();
        let windows = [
            SelectionWindow::single_year(2017),
            SelectionWindow::single_year(2020),
            SelectionWindow::new(2018, 2)?,
        ];
        let reports = WeatherReport::for_windows(&table, windows)?;
        assert_eq!(reports.len(), 3);
        for (report, window) in reports.iter().zip(windows) {
            let single = WeatherReport::builder()
                .table(&table)
                .window(window)
                .build()?;
            assert_eq!(report, &single);
        }
        Ok(())
    }

    #[test]
    fn test_report_propagates_empty_window() {
        let table = table();
        let result = WeatherReport::builder()
            .table(&table)
            .window(SelectionWindow::single_year(1900))
            .build();
        assert!(matches!(
            result,
            Err(WeatherRecordsError::EmptyWindow { .. })
        ));
    }

    #[test]
    fn test_report_frames() -> Result<(), Box<dyn std::error::Error>> {
        let table = table();
        let report = WeatherReport::builder()
            .table(&table)
            .window(SelectionWindow::single_year(2018))
            .build()?;
        let (observations, records) = report.to_data_frames()?;
        assert_eq!(observations.height(), 365);
        assert_eq!(records.height(), 365);
        assert_eq!(records.column("record_high_year")?.i32()?.get(0), Some(2020));
        assert_eq!(records.column("record_low_year")?.i32()?.get(0), Some(2017));
        Ok(())
    }
}
