//! Reshape a daily historical weather series for plotting and build its record book:
//! the highest and lowest temperature ever recorded on each calendar day.
//!
//! ```no_run
//! use weather_records::{DatasetConfig, SelectionWindow, WeatherDataLoader, WeatherReport, YearBounds};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DatasetConfig::builder()
//!     .path("daily-data-to-dec-2020.csv")
//!     .year_bounds(YearBounds::new(1815, 2020))
//!     .build();
//! let table = WeatherDataLoader::new(config).load().await?;
//!
//! let report = WeatherReport::builder()
//!     .table(&table)
//!     .window(SelectionWindow::new(2019, 2)?)
//!     .build()?;
//! let (observations, records) = report.to_data_frames()?;
//! println!("{observations}\n{records}");
//! # Ok(())
//! # }
//! ```

mod aggregator;
mod config;
mod error;
mod frames;
mod loader;
mod preparer;
mod report;
mod types;

#[cfg(test)]
mod test_support;

pub use aggregator::record_index::{DayRecord, Extreme, RecordIndex};
pub use aggregator::aggregate;
pub use config::DatasetConfig;
pub use error::{Extremum, WeatherRecordsError};
pub use frames::IntoWeatherFrame;
pub use loader::columns::ColumnNames;
pub use loader::data_loader::{parse_csv, WeatherDataLoader};
pub use loader::error::LoadError;
pub use preparer::prepare;
pub use report::WeatherReport;

pub use types::dated_row::DatedRow;
pub use types::raw_record::RawRecord;
pub use types::record_book_row::RecordBookRow;
pub use types::selection_window::{SelectionWindow, YearBounds};
pub use types::weather_table::WeatherTable;
