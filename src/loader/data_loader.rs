use crate::config::DatasetConfig;
use crate::loader::columns::ColumnNames;
use crate::loader::error::LoadError;
use crate::types::raw_record::RawRecord;
use crate::types::weather_table::WeatherTable;
use async_compression::tokio::bufread::GzipDecoder;
use log::{info, warn};
use polars::prelude::*;
use std::io::Cursor;
use tokio::io::{AsyncReadExt, BufReader};
use tokio::{fs, task};

const COL_YEAR: &str = "year";
const COL_MONTH: &str = "month";
const COL_DAY: &str = "day";
const COL_TMAX: &str = "tmax";
const COL_TMIN: &str = "tmin";
const COL_TMEAN: &str = "tmean";
const COL_RAINFALL: &str = "rainfall";
const COL_SUNSHINE: &str = "sunshine_hours";

const DATE_FIELDS: [&str; 3] = [COL_YEAR, COL_MONTH, COL_DAY];
const VALUE_FIELDS: [&str; 5] = [COL_TMAX, COL_TMIN, COL_TMEAN, COL_RAINFALL, COL_SUNSHINE];

/// Reads the historical dataset described by a [`DatasetConfig`] into a [`WeatherTable`].
pub struct WeatherDataLoader {
    config: DatasetConfig,
}

impl WeatherDataLoader {
    pub fn new(config: DatasetConfig) -> WeatherDataLoader {
        WeatherDataLoader { config }
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Loads the configured file, decompressing it first if it is gzipped.
    pub async fn load(&self) -> Result<WeatherTable, LoadError> {
        let bytes = self.read_source().await?;
        self.load_from_bytes(bytes).await
    }

    /// Parses CSV bytes that were obtained elsewhere, applying the configured columns and bounds.
    /// Parsing runs on a blocking task.
    pub async fn load_from_bytes(&self, bytes: Vec<u8>) -> Result<WeatherTable, LoadError> {
        let columns = self.config.columns.clone();
        let records = task::spawn_blocking(move || parse_csv(bytes, &columns)).await??;

        let table = WeatherTable::new(records);
        let table = match self.config.year_bounds {
            Some(bounds) => {
                if table.bounds().max_year > bounds.max_year {
                    warn!(
                        "Dataset contains rows after the configured bounds {}; they are only used as history",
                        bounds
                    );
                }
                table.with_bounds(bounds)
            }
            None => table,
        };
        info!(
            "Loaded {} daily records covering {}",
            table.len(),
            table.bounds()
        );
        Ok(table)
    }

    async fn read_source(&self) -> Result<Vec<u8>, LoadError> {
        let path = &self.config.path;
        if !self.config.is_gzip() {
            info!("Reading dataset from {:?}", path);
            return fs::read(path)
                .await
                .map_err(|e| LoadError::Io(path.clone(), e));
        }

        info!("Reading gzip-compressed dataset from {:?}", path);
        let file = fs::File::open(path)
            .await
            .map_err(|e| LoadError::Io(path.clone(), e))?;
        let mut decoder = GzipDecoder::new(BufReader::new(file));
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .await
            .map_err(|e| LoadError::Decompress(path.clone(), e))?;
        Ok(decompressed)
    }
}

/// Parses CSV bytes (with a header row) into records, in file order.
///
/// Every cell is read as text and trimmed first. Observation columns are then cast to
/// floats non-strictly, so blanks and markers such as `---` become missing values instead
/// of failing the load. `NaN` cells are missing too. Year, month and day must be present
/// integers on every row.
pub fn parse_csv(bytes: Vec<u8>, columns: &ColumnNames) -> Result<Vec<RawRecord>, LoadError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(LoadError::Csv)?;

    let sources = columns.date_columns().into_iter().chain(columns.value_columns());
    for name in sources.clone() {
        df.column(name)
            .map_err(|e| LoadError::MissingColumn(name.to_string(), e))?;
    }

    let targets = DATE_FIELDS.iter().map(|f| (f, DataType::Int64)).chain(
        VALUE_FIELDS.iter().map(|f| (f, DataType::Float64)),
    );
    let exprs: Vec<Expr> = sources
        .zip(targets)
        .map(|(source, (target, dtype))| {
            col(source)
                .str()
                .strip_chars(lit(NULL))
                .cast(dtype)
                .alias(*target)
        })
        .collect();

    let typed = df.lazy().select(exprs).collect().map_err(LoadError::Csv)?;

    let int_column = |name: &str| typed.column(name).and_then(|c| c.i64()).map_err(LoadError::Csv);
    let float_column = |name: &str| typed.column(name).and_then(|c| c.f64()).map_err(LoadError::Csv);

    let year = int_column(COL_YEAR)?;
    let month = int_column(COL_MONTH)?;
    let day = int_column(COL_DAY)?;
    let tmax = float_column(COL_TMAX)?;
    let tmin = float_column(COL_TMIN)?;
    let tmean = float_column(COL_TMEAN)?;
    let rainfall = float_column(COL_RAINFALL)?;
    let sunshine = float_column(COL_SUNSHINE)?;

    (0..typed.height())
        .map(|idx| {
            Ok(RawRecord {
                year: date_field(year, idx, &columns.year)?,
                month: date_field(month, idx, &columns.month)?,
                day: date_field(day, idx, &columns.day)?,
                tmax: observation(tmax, idx),
                tmin: observation(tmin, idx),
                tmean: observation(tmean, idx),
                rainfall: observation(rainfall, idx),
                sunshine_hours: observation(sunshine, idx),
            })
        })
        .collect()
}

fn observation(values: &Float64Chunked, idx: usize) -> Option<f64> {
    values.get(idx).filter(|v| !v.is_nan())
}

fn date_field<T: TryFrom<i64>>(
    values: &Int64Chunked,
    idx: usize,
    column: &str,
) -> Result<T, LoadError> {
    values
        .get(idx)
        .and_then(|v| T::try_from(v).ok())
        .ok_or_else(|| LoadError::MissingDateField {
            row: idx + 1,
            column: column.to_string(),
        })
}
