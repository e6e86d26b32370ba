//! Date values carried by plan documents.

use std::{fmt, str::FromStr};

use jiff::{
    civil::{Date, DateTime, Time},
    tz::TimeZone,
    SignedDuration, Timestamp,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlanError, Result};

/// A date-valued field of a plan.
///
/// Plans normally carry plain `YYYY-MM-DD` dates, but civil ISO datetimes and
/// RFC 3339 timestamps are accepted as well. Timestamps are converted to
/// their UTC civil datetime. A value with a midnight time of day is written
/// back as a plain date, so a parsed value always re-parses to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanDate(DateTime);

impl PlanDate {
    /// Parse a date-valued string.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DateParse` when the string is neither a date, a
    /// civil datetime, nor a timestamp.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if let Ok(timestamp) = trimmed.parse::<Timestamp>() {
            return Ok(Self(timestamp.to_zoned(TimeZone::UTC).datetime()));
        }
        match trimmed.parse::<DateTime>() {
            Ok(datetime) => Ok(Self(datetime)),
            Err(source) => match trimmed.parse::<Date>() {
                Ok(date) => Ok(Self::from_date(date)),
                Err(_) => Err(PlanError::DateParse {
                    input: input.to_string(),
                    source,
                }),
            },
        }
    }

    /// Create a plan date at midnight of the given day.
    pub fn from_date(date: Date) -> Self {
        Self(date.to_datetime(Time::midnight()))
    }

    /// The calendar day of this value.
    pub fn date(&self) -> Date {
        self.0.date()
    }

    /// Elapsed time from `earlier` until `self`; negative if `earlier` is
    /// actually later.
    pub fn duration_since(&self, earlier: &PlanDate) -> SignedDuration {
        self.0.duration_since(earlier.0)
    }
}

impl From<Date> for PlanDate {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for PlanDate {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PlanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.time() == Time::midnight() {
            write!(f, "{}", self.0.date())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for PlanDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlanDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PlanDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}
