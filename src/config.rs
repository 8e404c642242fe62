//! Where the dataset lives and how to read it.

use crate::loader::columns::ColumnNames;
use crate::loader::error::LoadError;
use crate::types::selection_window::YearBounds;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration of the ingestion boundary.
///
/// Nothing in the core refers to file names; every path comes through here.
///
/// # Examples
///
/// ```
/// use weather_records::{DatasetConfig, YearBounds};
///
/// let config = DatasetConfig::builder()
///     .path("daily-data-to-dec-2020.csv")
///     .year_bounds(YearBounds::new(1815, 2020))
///     .build();
/// assert_eq!(config.columns.year, "YYYY");
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// CSV file to load. A `.gz` extension means gzip-compressed.
    #[builder(into)]
    pub path: PathBuf,
    #[builder(default)]
    #[serde(default)]
    pub columns: ColumnNames,
    /// Years the dataset is valid for. Derived from the loaded rows when absent.
    #[serde(default)]
    pub year_bounds: Option<YearBounds>,
}

impl DatasetConfig {
    /// Reads a configuration from a JSON file.
    ///
    /// Only `path` is required; `columns` fall back to the Radcliffe headers.
    ///
    /// ```json
    /// { "path": "daily-data-to-dec-2020.csv", "year_bounds": { "min_year": 1815, "max_year": 2020 } }
    /// ```
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file cannot be read, [`LoadError::Config`] if it is not a
    /// valid configuration.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
        serde_json::from_slice(&bytes).map_err(|e| LoadError::Config(path.to_path_buf(), e))
    }

    pub(crate) fn is_gzip(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    }
}
