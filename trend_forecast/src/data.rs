//! Daily trend observations and their date-ordered series

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Minimum number of observations a prediction needs
pub const MIN_HISTORY: usize = 7;

/// One day of aggregated observation for a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar day of the observation
    pub date: NaiveDate,
    /// Mention volume, non-negative
    pub volume: f64,
    /// Sentiment score in `[0, 1]`
    pub sentiment: f64,
}

impl TrendPoint {
    /// Create a point without validation
    pub fn new(date: NaiveDate, volume: f64, sentiment: f64) -> Self {
        Self {
            date,
            volume,
            sentiment,
        }
    }

    /// Check volume and sentiment ranges
    pub fn validate(&self) -> Result<()> {
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(ForecastError::ValidationError(format!(
                "Volume on {} must be a non-negative number, got {}",
                self.date, self.volume
            )));
        }

        if !(0.0..=1.0).contains(&self.sentiment) {
            return Err(ForecastError::ValidationError(format!(
                "Sentiment on {} must be between 0 and 1, got {}",
                self.date, self.sentiment
            )));
        }

        Ok(())
    }
}

/// Date-ordered copy of a topic's observations.
///
/// Built from a borrowed slice, so sorting never touches the caller's data.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Copy and stably sort `points` by date; equal dates keep input order
    pub fn from_points(points: &[TrendPoint]) -> Self {
        let mut points = points.to_vec();
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// Like [`TrendSeries::from_points`], failing when fewer than `required` points are given
    pub fn with_min_len(points: &[TrendPoint], required: usize) -> Result<Self> {
        if points.len() < required {
            return Err(ForecastError::InsufficientData {
                required,
                actual: points.len(),
            });
        }

        Ok(Self::from_points(points))
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Volumes in date order
    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volume).collect()
    }

    /// Sentiments in date order
    pub fn sentiments(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.sentiment).collect()
    }

    /// Date of the most recent observation
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Keep only the `max_len` most recent observations
    pub fn most_recent(&self, max_len: usize) -> Self {
        let start = self.points.len().saturating_sub(max_len);
        Self {
            points: self.points[start..].to_vec(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    volume: f64,
    sentiment: f64,
}

/// Read `date,volume,sentiment` rows with a header line
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<TrendPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for (line, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|e| {
            ForecastError::DataError(format!(
                "Invalid date '{}' on row {}: {}",
                row.date,
                line + 1,
                e
            ))
        })?;
        points.push(TrendPoint::new(date, row.volume, row.sentiment));
    }

    Ok(points)
}

/// Load observations from a CSV file
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<TrendPoint>> {
    let file = File::open(path)?;
    read_csv(file)
}
