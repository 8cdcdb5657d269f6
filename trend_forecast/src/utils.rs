//! Date helpers for the forecast horizon

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

/// Calendar days `last_date + 1 ..= last_date + horizon`
pub fn future_dates(last_date: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    (1..=horizon)
        .map(|offset| {
            last_date
                .checked_add_signed(Duration::days(offset as i64))
                .ok_or_else(|| {
                    ForecastError::ValidationError(format!(
                        "Forecast date {} days after {} is out of range",
                        offset, last_date
                    ))
                })
        })
        .collect()
}

/// Fractional days between midnight UTC of `date` and `now`.
///
/// Negative when `date` lies in the future.
pub fn age_in_days(date: NaiveDate, now: DateTime<Utc>) -> f64 {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    (now - midnight).num_milliseconds() as f64 / 86_400_000.0
}
