//! Loading daily weather observations from CSV.
//!
//! The dataset is a headed CSV file with one row per `(location, date)`
//! pair. The loader reads the columns it needs by name and ignores any
//! others, so exports carrying extra measurements load unchanged:
//!
//! ```text
//! date,lat,lon,afternoon_temp,precip,wind_max_speed,humidity_afternoon,cloud_cover_afternoon
//! 2026-05-14,44.31667,23.8,295.15,0.0,2.5,55.0,20.0
//! ```
//!
//! `afternoon_temp` is in Kelvin. `date` is `YYYY-MM-DD`, optionally followed
//! by a time part (`2026-05-14T12:00:00` or `2026-05-14 12:00:00`), which is
//! discarded.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use fairday_core::{MemoryObservationStore, WeatherObservation};
use geo::Coord;
use serde::Deserialize;
use thiserror::Error;

/// Date format of the `date` column once any time part is removed.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while loading a weather dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset {path}: {source}")]
    Open {
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A row could not be read or is missing a required column.
    #[error("failed to read dataset row at line {line}: {source}")]
    ReadRow {
        /// One-based line number of the row, or 0 when unknown.
        line: u64,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// The `date` column did not hold a calendar date.
    #[error("invalid date '{value}' at line {line}")]
    ParseDate {
        /// One-based line number of the row.
        line: u64,
        /// Rejected value.
        value: String,
    },
}

/// One CSV row as it appears on disk.
#[derive(Debug, Deserialize)]
struct DatasetRow {
    date: String,
    lat: f64,
    lon: f64,
    afternoon_temp: f64,
    precip: f64,
    wind_max_speed: f64,
    humidity_afternoon: f64,
    cloud_cover_afternoon: f64,
}

impl DatasetRow {
    fn into_observation(self, line: u64) -> Result<WeatherObservation, DatasetError> {
        let date = parse_date(&self.date).ok_or(DatasetError::ParseDate {
            line,
            value: self.date,
        })?;
        Ok(WeatherObservation {
            date,
            location: Coord {
                x: self.lon,
                y: self.lat,
            },
            afternoon_temp_kelvin: self.afternoon_temp,
            precip: self.precip,
            wind_max_speed: self.wind_max_speed,
            humidity_afternoon: self.humidity_afternoon,
            cloud_cover_afternoon: self.cloud_cover_afternoon,
        })
    }
}

/// Parse the date part of a `date` cell.
///
/// Anything after the first `T` or space is ignored.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use fairday_data::dataset::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 5, 14);
/// assert_eq!(parse_date("2026-05-14"), expected);
/// assert_eq!(parse_date("2026-05-14T12:00:00"), expected);
/// assert_eq!(parse_date("14/05/2026"), None);
/// ```
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let day = value.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}

/// Load every observation in the CSV file at `path`.
///
/// Rows keep their file order, which is the tie-break order used when
/// ranking equal scores.
///
/// # Errors
/// Returns [`DatasetError::Open`] when the file cannot be opened, and the
/// errors of [`read_observations`] for malformed content.
pub fn load_observations(path: &Utf8Path) -> Result<MemoryObservationStore, DatasetError> {
    let file = fairday_fs::open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let store = read_observations(file)?;
    log::debug!("loaded {} observations from {path}", store.len());
    Ok(store)
}

/// Read observations from any CSV source with a header row.
///
/// # Errors
/// Returns [`DatasetError::ReadRow`] for unreadable rows, missing columns or
/// non-numeric measurements, and [`DatasetError::ParseDate`] for dates that
/// are not `YYYY-MM-DD`.
pub fn read_observations<R: io::Read>(source: R) -> Result<MemoryObservationStore, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);
    let headers = reader
        .headers()
        .map_err(|source| DatasetError::ReadRow { line: 1, source })?
        .clone();

    let mut store = MemoryObservationStore::new();
    for record in reader.records() {
        let record = record.map_err(|source| DatasetError::ReadRow {
            line: error_line(&source),
            source,
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: DatasetRow = record
            .deserialize(Some(&headers))
            .map_err(|source| DatasetError::ReadRow { line, source })?;
        store.push(row.into_observation(line)?);
    }
    Ok(store)
}

fn error_line(error: &csv::Error) -> u64 {
    error.position().map_or(0, csv::Position::line)
}
