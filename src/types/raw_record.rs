use serde::{Deserialize, Serialize};

/// One day of the historical dataset, as handed over by the ingestion layer.
///
/// Numeric observations that were absent or unparsable in the source are `None`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub tmax: Option<f64>,           // Tmax °C
    pub tmin: Option<f64>,           // Tmin °C
    pub tmean: Option<f64>,          // Daily Tmean °C
    pub rainfall: Option<f64>,       // Rainfall mm raw incl traces
    pub sunshine_hours: Option<f64>, // Sunshine duration h
}

impl RawRecord {
    /// A record with only its date fields set and every observation missing.
    pub fn empty(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            tmax: None,
            tmin: None,
            tmean: None,
            rainfall: None,
            sunshine_hours: None,
        }
    }

    /// Sets the daily maximum and minimum, in field order.
    pub fn with_temperatures(mut self, tmax: Option<f64>, tmin: Option<f64>) -> Self {
        self.tmax = tmax;
        self.tmin = tmin;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_temperatures_follows_field_order() {
        let record = RawRecord::empty(2019, 7, 25).with_temperatures(Some(35.1), None);
        assert_eq!(record.tmax, Some(35.1));
        assert_eq!(record.tmin, None);
        assert_eq!(record.tmean, None);
    }
}
