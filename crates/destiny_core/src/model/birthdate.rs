//! Birthdate input model and validation.
//!
//! # Responsibility
//! - Parse the strict `YYYY-MM-DD` input string.
//! - Reject impossible, too-early and future dates before any arithmetic.
//!
//! # Invariants
//! - A constructed `BirthDate` is always a real calendar date with
//!   `year >= MIN_BIRTH_YEAR`.
//! - Input is never trimmed or normalized; the pattern is matched as given.

use crate::config::MIN_BIRTH_YEAR;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

// ASCII digits only; `\d` would also admit other Unicode digit classes.
static BIRTHDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid birthdate regex"));

/// Input-side validation failure. Always caused by the caller's date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input string is empty.
    Empty,
    /// Input does not match `YYYY-MM-DD`.
    MalformedFormat(String),
    /// A date component cannot be read as an integer.
    InvalidComponent { field: &'static str, value: String },
    /// Components do not form a calendar date (e.g. `1900-02-29`).
    ImpossibleDate { year: i32, month: u32, day: u32 },
    /// Year precedes the supported range.
    YearTooEarly { year: i32, min: i32 },
    /// Date lies after the calculation day.
    FutureDate { date: BirthDate, today: NaiveDate },
}

impl ValidationError {
    /// Stable reason code for logs. Never includes the input itself.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::MalformedFormat(_) => "malformed_format",
            Self::InvalidComponent { .. } => "invalid_component",
            Self::ImpossibleDate { .. } => "impossible_date",
            Self::YearTooEarly { .. } => "year_too_early",
            Self::FutureDate { .. } => "future_date",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "birthdate is required"),
            Self::MalformedFormat(input) => {
                write!(f, "birthdate `{input}` must use the YYYY-MM-DD format")
            }
            Self::InvalidComponent { field, value } => {
                write!(f, "birthdate {field} `{value}` is not a number")
            }
            Self::ImpossibleDate { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a calendar date")
            }
            Self::YearTooEarly { year, min } => write!(
                f,
                "birth year {year} is before {min}; only dates from {min} onward are supported"
            ),
            Self::FutureDate { date, today } => write!(
                f,
                "birthdate {date} is after today ({})",
                today.format("%Y-%m-%d")
            ),
        }
    }
}

impl Error for ValidationError {}

/// Validated birthdate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "BirthDateParts", into = "BirthDateParts")]
pub struct BirthDate {
    date: NaiveDate,
}

/// Wire shape of a birthdate: `{"year": .., "month": .., "day": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Parses `input` against the local calendar date.
    ///
    /// # Errors
    /// - Any `ValidationError` variant; see [`BirthDate::parse_on`].
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::parse_on(input, Local::now().date_naive())
    }

    /// Parses `input`, treating `today` as the latest acceptable date.
    ///
    /// Checks run in order: empty, pattern, integer parse, calendar round
    /// trip, minimum year, future date.
    pub fn parse_on(input: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !BIRTHDATE_RE.is_match(input) {
            return Err(ValidationError::MalformedFormat(input.to_string()));
        }

        let year = parse_component::<i32>(&input[0..4], "year")?;
        let month = parse_component::<u32>(&input[5..7], "month")?;
        let day = parse_component::<u32>(&input[8..10], "day")?;

        let date = Self::from_parts(year, month, day)?;
        if date.date > today {
            return Err(ValidationError::FutureDate { date, today });
        }
        Ok(date)
    }

    /// Builds a birthdate from components without a future-date check.
    ///
    /// # Errors
    /// - `ImpossibleDate` when the triple is not on the calendar.
    /// - `YearTooEarly` when `year < MIN_BIRTH_YEAR`.
    pub fn from_parts(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ValidationError::ImpossibleDate { year, month, day })?;
        if year < MIN_BIRTH_YEAR {
            return Err(ValidationError::YearTooEarly {
                year,
                min: MIN_BIRTH_YEAR,
            });
        }
        Ok(Self { date })
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Calendar date backing this birthdate.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.date
    }

    /// Echoes the birthdate as `YYYY-MM-DD`.
    pub fn to_iso_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

impl TryFrom<BirthDateParts> for BirthDate {
    type Error = ValidationError;

    fn try_from(value: BirthDateParts) -> Result<Self, Self::Error> {
        Self::from_parts(value.year, value.month, value.day)
    }
}

impl From<BirthDate> for BirthDateParts {
    fn from(value: BirthDate) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
        }
    }
}

fn parse_component<T: std::str::FromStr>(
    raw: &str,
    field: &'static str,
) -> Result<T, ValidationError> {
    raw.parse::<T>()
        .map_err(|_| ValidationError::InvalidComponent {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{BirthDate, ValidationError};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn parses_valid_date() {
        let date = BirthDate::parse_on("1992-09-14", today()).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1992, 9, 14));
        assert_eq!(date.to_iso_string(), "1992-09-14");
    }

    #[test]
    fn rejects_loose_formats() {
        for input in ["1992-9-14", "92-09-14", "1992/09/14", " 1992-09-14", "1992-09-14\n"] {
            let err = BirthDate::parse_on(input, today()).unwrap_err();
            assert!(
                matches!(err, ValidationError::MalformedFormat(_)),
                "{input:?} gave {err:?}"
            );
        }
        assert_eq!(
            BirthDate::parse_on("", today()).unwrap_err(),
            ValidationError::Empty
        );
    }

    #[test]
    fn rejects_non_ascii_digits() {
        let err = BirthDate::parse_on("١٩٩٢-09-14", today()).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedFormat(_)));
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        for input in ["1990-02-30", "1990-13-01", "1990-00-10", "1990-04-31"] {
            let err = BirthDate::parse_on(input, today()).unwrap_err();
            assert!(matches!(err, ValidationError::ImpossibleDate { .. }));
        }
    }

    #[test]
    fn leap_day_follows_gregorian_rules() {
        assert!(BirthDate::parse_on("2000-02-29", today()).is_ok());
        assert_eq!(
            BirthDate::parse_on("1900-02-29", today()).unwrap_err(),
            ValidationError::ImpossibleDate {
                year: 1900,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn rejects_years_before_1900() {
        assert_eq!(
            BirthDate::parse_on("1899-12-31", today()).unwrap_err(),
            ValidationError::YearTooEarly {
                year: 1899,
                min: 1900
            }
        );
        assert!(BirthDate::parse_on("1900-01-01", today()).is_ok());
    }

    #[test]
    fn today_is_accepted_and_tomorrow_is_not() {
        assert!(BirthDate::parse_on("2024-06-01", today()).is_ok());
        let err = BirthDate::parse_on("2024-06-02", today()).unwrap_err();
        assert!(matches!(err, ValidationError::FutureDate { .. }));
        assert_eq!(err.to_string(), "birthdate 2024-06-02 is after today (2024-06-01)");
    }

    #[test]
    fn serde_shape_validates_on_read() {
        let date = BirthDate::parse_on("1992-09-14", today()).unwrap();
        let json = serde_json::to_value(date).unwrap();
        assert_eq!(json, serde_json::json!({"year": 1992, "month": 9, "day": 14}));

        let err = serde_json::from_value::<BirthDate>(
            serde_json::json!({"year": 1900, "month": 2, "day": 29}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a calendar date"), "{err}");
    }
}
