//! Matrix result aggregate.
//!
//! # Responsibility
//! - Hold the birthdate echo, digit sums and 22 point values of one chart.
//! - Validate a point set against a reduction mode.
//!
//! # Invariants
//! - `MatrixResult` is immutable once built; a new calculation yields a new value.
//! - Deserialized results are validated against `REDUCTION_MODE` before use.
//! - `digit_sums` always matches the birthdate it is stored with.

use crate::config::REDUCTION_MODE;
use crate::model::birthdate::BirthDate;
use crate::model::position::Position;
use crate::reduce::{sum_digits, ReductionMode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Intermediate digit sums of the birthdate components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitSums {
    pub year_digits_sum: u32,
    pub month_digits_sum: u32,
    pub day_digits_sum: u32,
    /// Raw total of the three sums; not reduced.
    pub full_sum_original: u32,
}

impl DigitSums {
    /// Derives the digit sums for `birthdate`.
    pub fn from_birthdate(birthdate: &BirthDate) -> Self {
        // `BirthDate` guarantees a year >= 1900, so the cast is lossless.
        let year_digits_sum = sum_digits(birthdate.year() as u64);
        let month_digits_sum = sum_digits(u64::from(birthdate.month()));
        let day_digits_sum = sum_digits(u64::from(birthdate.day()));
        Self {
            year_digits_sum,
            month_digits_sum,
            day_digits_sum,
            full_sum_original: year_digits_sum + month_digits_sum + day_digits_sum,
        }
    }
}

/// The 22 point values, serialized under their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixPoints {
    #[serde(rename = "P_Core")]
    pub p_core: u8,
    #[serde(rename = "A1")]
    pub a1: u8,
    #[serde(rename = "A2")]
    pub a2: u8,
    #[serde(rename = "A3")]
    pub a3: u8,
    #[serde(rename = "A4")]
    pub a4: u8,
    #[serde(rename = "KarmaTail")]
    pub karma_tail: u8,
    #[serde(rename = "L1")]
    pub l1: u8,
    #[serde(rename = "L2")]
    pub l2: u8,
    #[serde(rename = "L3")]
    pub l3: u8,
    #[serde(rename = "L4")]
    pub l4: u8,
    #[serde(rename = "M1")]
    pub m1: u8,
    #[serde(rename = "M2")]
    pub m2: u8,
    #[serde(rename = "M3")]
    pub m3: u8,
    #[serde(rename = "M4")]
    pub m4: u8,
    #[serde(rename = "V1")]
    pub v1: u8,
    #[serde(rename = "V2")]
    pub v2: u8,
    #[serde(rename = "V3")]
    pub v3: u8,
    #[serde(rename = "V4")]
    pub v4: u8,
    #[serde(rename = "H1")]
    pub h1: u8,
    #[serde(rename = "H2")]
    pub h2: u8,
    #[serde(rename = "H3")]
    pub h3: u8,
    #[serde(rename = "H4")]
    pub h4: u8,
}

impl MatrixPoints {
    /// Builds a point set from values in `Position::ALL` order.
    pub fn from_values(values: [u8; 22]) -> Self {
        let [p_core, a1, a2, a3, a4, karma_tail, l1, l2, l3, l4, m1, m2, m3, m4, v1, v2, v3, v4, h1, h2, h3, h4] =
            values;
        Self {
            p_core,
            a1,
            a2,
            a3,
            a4,
            karma_tail,
            l1,
            l2,
            l3,
            l4,
            m1,
            m2,
            m3,
            m4,
            v1,
            v2,
            v3,
            v4,
            h1,
            h2,
            h3,
            h4,
        }
    }

    /// Returns the value at `position`.
    pub fn get(&self, position: Position) -> u8 {
        match position {
            Position::PCore => self.p_core,
            Position::A1 => self.a1,
            Position::A2 => self.a2,
            Position::A3 => self.a3,
            Position::A4 => self.a4,
            Position::KarmaTail => self.karma_tail,
            Position::L1 => self.l1,
            Position::L2 => self.l2,
            Position::L3 => self.l3,
            Position::L4 => self.l4,
            Position::M1 => self.m1,
            Position::M2 => self.m2,
            Position::M3 => self.m3,
            Position::M4 => self.m4,
            Position::V1 => self.v1,
            Position::V2 => self.v2,
            Position::V3 => self.v3,
            Position::V4 => self.v4,
            Position::H1 => self.h1,
            Position::H2 => self.h2,
            Position::H3 => self.h3,
            Position::H4 => self.h4,
        }
    }

    /// Iterates `(position, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        Position::ALL
            .into_iter()
            .map(move |position| (position, self.get(position)))
    }
}

/// Point set failed its range or consistency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixValidationError {
    PointOutOfRange {
        position: Position,
        value: u8,
        mode: ReductionMode,
    },
    DigitSumMismatch {
        field: &'static str,
        expected: u32,
        actual: u32,
    },
}

impl Display for MatrixValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PointOutOfRange {
                position,
                value,
                mode,
            } => write!(
                f,
                "point {position} has value {value}, outside the {mode} range"
            ),
            Self::DigitSumMismatch {
                field,
                expected,
                actual,
            } => write!(f, "{field} is {actual}, expected {expected} for this birthdate"),
        }
    }
}

impl Error for MatrixValidationError {}

/// One calculated destiny matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MatrixResultParts")]
pub struct MatrixResult {
    birthdate: BirthDate,
    digit_sums: DigitSums,
    points: MatrixPoints,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatrixResultParts {
    birthdate: BirthDate,
    digit_sums: DigitSums,
    points: MatrixPoints,
}

impl TryFrom<MatrixResultParts> for MatrixResult {
    type Error = MatrixValidationError;

    fn try_from(value: MatrixResultParts) -> Result<Self, Self::Error> {
        let result = Self::new(value.birthdate, value.digit_sums, value.points);
        result.validate(REDUCTION_MODE)?;
        Ok(result)
    }
}

impl MatrixResult {
    pub(crate) fn new(birthdate: BirthDate, digit_sums: DigitSums, points: MatrixPoints) -> Self {
        Self {
            birthdate,
            digit_sums,
            points,
        }
    }

    pub fn birthdate(&self) -> &BirthDate {
        &self.birthdate
    }

    pub fn digit_sums(&self) -> &DigitSums {
        &self.digit_sums
    }

    pub fn points(&self) -> &MatrixPoints {
        &self.points
    }

    /// Shorthand for `points().get(position)`.
    pub fn value(&self, position: Position) -> u8 {
        self.points.get(position)
    }

    /// Checks every point against `mode` and the digit sums against the
    /// birthdate.
    ///
    /// The birthdate itself needs no check: `BirthDate` cannot hold an
    /// invalid date.
    pub fn validate(&self, mode: ReductionMode) -> Result<(), MatrixValidationError> {
        for (position, value) in self.points.iter() {
            if !mode.accepts(u64::from(value)) {
                return Err(MatrixValidationError::PointOutOfRange {
                    position,
                    value,
                    mode,
                });
            }
        }

        let expected = DigitSums::from_birthdate(&self.birthdate);
        let pairs = [
            (
                "yearDigitsSum",
                expected.year_digits_sum,
                self.digit_sums.year_digits_sum,
            ),
            (
                "monthDigitsSum",
                expected.month_digits_sum,
                self.digit_sums.month_digits_sum,
            ),
            (
                "dayDigitsSum",
                expected.day_digits_sum,
                self.digit_sums.day_digits_sum,
            ),
            (
                "fullSumOriginal",
                expected.full_sum_original,
                self.digit_sums.full_sum_original,
            ),
        ];
        for (field, expected, actual) in pairs {
            if expected != actual {
                return Err(MatrixValidationError::DigitSumMismatch {
                    field,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}
