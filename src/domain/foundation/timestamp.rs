//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> TimeDelta {
        self.0.signed_duration_since(other.0)
    }

    /// Adds whole days, returning `None` when the result is out of range.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        let delta = TimeDelta::try_days(days)?;
        self.0.checked_add_signed(delta).map(Self)
    }

    /// Adds calendar months, keeping the day of month where it exists.
    ///
    /// Jan 31 plus one month lands on the last day of February.
    pub fn checked_add_months(&self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Self)
    }

    /// Adds a fractional number of hours at millisecond precision.
    pub fn checked_add_hours(&self, hours: f64) -> Option<Self> {
        if !hours.is_finite() {
            return None;
        }
        let millis = (hours * 3_600_000.0).round();
        if millis.abs() > i64::MAX as f64 {
            return None;
        }
        let delta = TimeDelta::try_milliseconds(millis as i64)?;
        self.0.checked_add_signed(delta).map(Self)
    }

    /// Returns the same time of day on the given month/day of `year_offset`
    /// years from this timestamp's year.
    pub fn on_calendar_day(&self, year_offset: i32, month: u32, day: u32) -> Option<Self> {
        let year = self.0.year().checked_add(year_offset)?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self(date.and_time(self.0.time()).and_utc()))
    }

    /// Returns the point `fraction` of the way from this timestamp to `end`.
    pub fn interpolate(&self, end: &Timestamp, fraction: f64) -> Self {
        let span = end.duration_since(self).num_milliseconds() as f64;
        let offset = (span * fraction).round() as i64;
        match TimeDelta::try_milliseconds(offset).and_then(|d| self.0.checked_add_signed(d)) {
            Some(dt) => Self(dt),
            None => *self,
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
