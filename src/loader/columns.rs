use serde::{Deserialize, Serialize};

/// Header names of the source CSV, one per [`crate::RawRecord`] field.
///
/// Defaults match the Radcliffe Meteorological Station daily series published by the
/// School of Geography and the Environment, University of Oxford.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub year: String,
    pub month: String,
    pub day: String,
    pub tmax: String,
    pub tmin: String,
    pub tmean: String,
    pub rainfall: String,
    pub sunshine_hours: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            year: "YYYY".to_string(),
            month: "MM".to_string(),
            day: "DD".to_string(),
            tmax: "Tmax °C".to_string(),
            tmin: "Tmin °C".to_string(),
            tmean: "Daily Tmean °C".to_string(),
            rainfall: "Rainfall mm raw incl traces".to_string(),
            sunshine_hours: "Sunshine duration h".to_string(),
        }
    }
}

impl ColumnNames {
    pub(crate) fn date_columns(&self) -> [&str; 3] {
        [self.year.as_str(), self.month.as_str(), self.day.as_str()]
    }

    pub(crate) fn value_columns(&self) -> [&str; 5] {
        [
            self.tmax.as_str(),
            self.tmin.as_str(),
            self.tmean.as_str(),
            self.rainfall.as_str(),
            self.sunshine_hours.as_str(),
        ]
    }
}
