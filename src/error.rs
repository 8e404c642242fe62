use crate::loader::error::LoadError;
use crate::types::selection_window::YearBounds;
use polars::error::PolarsError;
use std::fmt;
use thiserror::Error;

/// Which side of a record lookup came up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extremum {
    /// Highest maximum temperature.
    High,
    /// Lowest minimum temperature.
    Low,
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extremum::High => write!(f, "record high (tmax)"),
            Extremum::Low => write!(f, "record low (tmin)"),
        }
    }
}

#[derive(Debug, Error)]
pub enum WeatherRecordsError {
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    #[error("No {kind} available for {month:02}-{day:02}: every historical value is missing")]
    NoValidExtremum { month: u32, day: u32, kind: Extremum },

    #[error("Selection window {start_year}..={end_year} contains no rows")]
    EmptyWindow { start_year: i32, end_year: i32 },

    #[error("A selection window must span at least one year, got {num_years}")]
    InvalidWindow { num_years: u32 },

    #[error("Invalid start year: {year} - this must be within {bounds}")]
    StartYearOutOfRange { year: i32, bounds: YearBounds },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed building output frame")]
    Frame(#[from] PolarsError),
}
