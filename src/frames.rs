//! Columnar export of the prepared series and the record book for plotting collaborators.

use crate::types::dated_row::DatedRow;
use crate::types::record_book_row::RecordBookRow;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::{Column, DataFrame, PolarsResult};

/// Converts rows into a Polars [`DataFrame`].
///
/// Every frame starts with `date` (Date) and the `interval_start` / `interval_end`
/// pair (millisecond Datetime). Missing observations become nulls.
pub trait IntoWeatherFrame {
    fn to_data_frame(&self) -> PolarsResult<DataFrame>;
}

fn time_columns<T>(
    rows: &[T],
    fields: impl Fn(&T) -> (NaiveDate, NaiveDateTime, NaiveDateTime),
) -> [Column; 3] {
    let (dates, (starts, ends)): (Vec<NaiveDate>, (Vec<NaiveDateTime>, Vec<NaiveDateTime>)) = rows
        .iter()
        .map(|row| {
            let (date, start, end) = fields(row);
            (date, (start, end))
        })
        .unzip();
    [
        Column::new("date".into(), dates),
        Column::new("interval_start".into(), starts),
        Column::new("interval_end".into(), ends),
    ]
}

impl IntoWeatherFrame for [DatedRow] {
    /// Columns: `date`, `interval_start`, `interval_end`, `year`, `month`, `day`,
    /// `tmax`, `tmin`, `tmean`, `rainfall`, `sunshine_hours`.
    fn to_data_frame(&self) -> PolarsResult<DataFrame> {
        let mut columns = Vec::from(time_columns(self, |r| {
            (r.date, r.interval_start, r.interval_end)
        }));

        let years: Vec<i32> = self.iter().map(|r| r.record.year).collect();
        let months: Vec<u32> = self.iter().map(|r| r.record.month).collect();
        let days: Vec<u32> = self.iter().map(|r| r.record.day).collect();
        columns.push(Column::new("year".into(), years));
        columns.push(Column::new("month".into(), months));
        columns.push(Column::new("day".into(), days));

        let observations: [(&str, fn(&DatedRow) -> Option<f64>); 5] = [
            ("tmax", |r| r.record.tmax),
            ("tmin", |r| r.record.tmin),
            ("tmean", |r| r.record.tmean),
            ("rainfall", |r| r.record.rainfall),
            ("sunshine_hours", |r| r.record.sunshine_hours),
        ];
        for (name, field) in observations {
            let values: Vec<Option<f64>> = self.iter().map(field).collect();
            columns.push(Column::new(name.into(), values));
        }

        DataFrame::new(columns)
    }
}

impl IntoWeatherFrame for [RecordBookRow] {
    /// Columns: `date`, `interval_start`, `interval_end`, `year`, `month`, `day`,
    /// `record_high`, `record_high_year`, `record_low`, `record_low_year`.
    fn to_data_frame(&self) -> PolarsResult<DataFrame> {
        let mut columns = Vec::from(time_columns(self, |r| {
            (r.date, r.interval_start, r.interval_end)
        }));

        let years: Vec<i32> = self.iter().map(|r| r.queried_year).collect();
        let months: Vec<u32> = self.iter().map(|r| r.month).collect();
        let days: Vec<u32> = self.iter().map(|r| r.day).collect();
        let highs: Vec<f64> = self.iter().map(|r| r.record_high_value).collect();
        let high_years: Vec<i32> = self.iter().map(|r| r.record_high_year).collect();
        let lows: Vec<f64> = self.iter().map(|r| r.record_low_value).collect();
        let low_years: Vec<i32> = self.iter().map(|r| r.record_low_year).collect();

        columns.extend([
            Column::new("year".into(), years),
            Column::new("month".into(), months),
            Column::new("day".into(), days),
            Column::new("record_high".into(), highs),
            Column::new("record_high_year".into(), high_years),
            Column::new("record_low".into(), lows),
            Column::new("record_low_year".into(), low_years),
        ]);

        DataFrame::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::preparer::prepare;
    use crate::test_support::full_year_with;
    use crate::types::raw_record::RawRecord;
    use crate::types::selection_window::SelectionWindow;
    use crate::types::weather_table::WeatherTable;
    use polars::prelude::{DataType, TimeUnit};

    fn table() -> WeatherTable {
        let mut records = full_year_with(2019, |m, _| Some(10.0 + f64::from(m)), |m, _| Some(f64::from(m)));
        records[0].rainfall = Some(1.2);
        records.push(RawRecord::empty(2020, 1, 1).with_temperatures(Some(2.0), Some(-5.0)));
        WeatherTable::new(records)
    }

    #[test]
    fn test_dated_rows_frame_schema() -> Result<(), Box<dyn std::error::Error>> {
        let rows = prepare(&table(), SelectionWindow::single_year(2019))?;
        let df = rows.to_data_frame()?;

        assert_eq!(df.shape(), (365, 11));
        assert_eq!(df.column("date")?.dtype(), &DataType::Date);
        assert_eq!(
            df.column("interval_start")?.dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        assert_eq!(df.column("tmax")?.dtype(), &DataType::Float64);

        let rainfall = df.column("rainfall")?.f64()?;
        assert_eq!(rainfall.get(0), Some(1.2));
        assert_eq!(rainfall.get(1), None);
        assert_eq!(rainfall.null_count(), 364);
        Ok(())
    }

    #[test]
    fn test_record_book_frame_schema() -> Result<(), Box<dyn std::error::Error>> {
        let book = aggregate(&table(), SelectionWindow::single_year(2020))?;
        let df = book.to_data_frame()?;

        assert_eq!(df.shape(), (1, 10));
        assert_eq!(df.column("record_high")?.f64()?.get(0), Some(11.0));
        assert_eq!(df.column("record_high_year")?.i32()?.get(0), Some(2019));
        assert_eq!(df.column("record_low")?.f64()?.get(0), Some(-5.0));
        assert_eq!(df.column("record_low_year")?.i32()?.get(0), Some(2020));
        Ok(())
    }

    #[test]
    fn test_empty_record_book_frame() -> Result<(), Box<dyn std::error::Error>> {
        let book: Vec<RecordBookRow> = Vec::new();
        assert_eq!(book.to_data_frame()?.height(), 0);
        Ok(())
    }
}
