//! Year bounds of a dataset and the caller's selection window over it.

use crate::error::WeatherRecordsError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive range of years a dataset is considered valid for.
///
/// The Radcliffe Meteorological Station series, for example, runs from 1815 to 2020.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearBounds {
    pub min_year: i32,
    pub max_year: i32,
}

impl YearBounds {
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }

    /// Checks that a requested start year lies within the bounds.
    ///
    /// The core never calls this itself; it is offered to the layer that turns user
    /// input into a [`SelectionWindow`], which should reject out-of-range start years
    /// before any processing happens.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherRecordsError::StartYearOutOfRange`] when `year` falls outside the bounds.
    pub fn check_start_year(&self, year: i32) -> Result<(), WeatherRecordsError> {
        if self.contains(year) {
            Ok(())
        } else {
            Err(WeatherRecordsError::StartYearOutOfRange {
                year,
                bounds: *self,
            })
        }
    }
}

impl fmt::Display for YearBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}..={:04}", self.min_year, self.max_year)
    }
}

/// A run of consecutive years to report on.
///
/// Windows are created from raw user input and are *not* clamped to the dataset on
/// construction; [`SelectionWindow::normalize`] does that against a table's
/// [`YearBounds`] right before the data is touched.
///
/// # Examples
///
/// ```
/// use weather_records::{SelectionWindow, YearBounds};
///
/// let window = SelectionWindow::new(2019, 5)?;
/// let normalized = window.normalize(YearBounds::new(1815, 2020));
/// assert_eq!(normalized.num_years(), 2);
/// assert_eq!(normalized.end_year(), 2020);
/// # Ok::<(), weather_records::WeatherRecordsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionWindow {
    start_year: i32,
    num_years: u32,
}

impl SelectionWindow {
    /// Creates a window of `num_years` years starting at `start_year`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherRecordsError::InvalidWindow`] if `num_years` is zero.
    pub fn new(start_year: i32, num_years: u32) -> Result<Self, WeatherRecordsError> {
        if num_years == 0 {
            return Err(WeatherRecordsError::InvalidWindow { num_years });
        }
        Ok(Self {
            start_year,
            num_years,
        })
    }

    /// A window covering exactly one year.
    pub fn single_year(year: i32) -> Self {
        Self {
            start_year: year,
            num_years: 1,
        }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn num_years(&self) -> u32 {
        self.num_years
    }

    /// Last year covered by the window (inclusive).
    pub fn end_year(&self) -> i32 {
        self.start_year
            .saturating_add(i32::try_from(self.num_years.saturating_sub(1)).unwrap_or(i32::MAX))
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years().contains(&year)
    }

    /// Truncates the window so it does not run past `bounds.max_year`.
    ///
    /// Overflowing the end of the dataset is not an error: the year count is reduced so
    /// the window ends on the last available year. A window that starts after
    /// `max_year` is left untouched, it simply selects nothing.
    pub fn normalize(self, bounds: YearBounds) -> Self {
        if self.start_year > bounds.max_year || self.end_year() <= bounds.max_year {
            return self;
        }
        let num_years = (bounds.max_year - self.start_year + 1) as u32;
        warn!(
            "The requested start year ({}) plus the number of years ({}) exceeds the latest \
             available data ({}). Truncating to {} year(s).",
            self.start_year, self.num_years, bounds.max_year, num_years
        );
        Self {
            start_year: self.start_year,
            num_years,
        }
    }
}

impl fmt::Display for SelectionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}..={:04}", self.start_year, self.end_year())
    }
}
