//! Matrix builder.
//!
//! # Responsibility
//! - Turn a birthdate string into a validated `MatrixResult`.
//! - Keep input rejection and algorithm defects as distinct error kinds.
//!
//! # Invariants
//! - Date validation completes before any arithmetic runs.
//! - Points are derived in dependency order, each sum passed through `reduce`.
//! - A1 reduces the raw day, A3 reduces the year digit sum. The asymmetry is
//!   part of the algorithm and must not be "fixed".
//! - The builder is a pure function of `(input, today)`; no shared state.

use crate::config::REDUCTION_MODE;
use crate::model::birthdate::{BirthDate, ValidationError};
use crate::model::matrix::{DigitSums, MatrixPoints, MatrixResult, MatrixValidationError};
use crate::model::position::Position;
use crate::reduce::{reduce, ReductionError};
use chrono::{Local, NaiveDate};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Where in the build a defect was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationStage {
    /// Deriving the named point.
    Point(Position),
    /// Range check over the finished point set.
    PostValidation,
}

impl Display for CalculationStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point(position) => write!(f, "point {position}"),
            Self::PostValidation => write!(f, "post-build validation"),
        }
    }
}

/// Underlying defect of a failed calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationCause {
    Reduction(ReductionError),
    Invalid(MatrixValidationError),
}

/// Algorithm defect raised after the input was already accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationError {
    pub stage: CalculationStage,
    pub cause: CalculationCause,
}

impl Display for CalculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            CalculationCause::Reduction(err) => {
                write!(f, "calculation failed at {}: {err}", self.stage)
            }
            CalculationCause::Invalid(err) => {
                write!(f, "calculation failed at {}: {err}", self.stage)
            }
        }
    }
}

impl Error for CalculationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            CalculationCause::Reduction(err) => Some(err),
            CalculationCause::Invalid(err) => Some(err),
        }
    }
}

/// Top-level builder error.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Bad input; safe to show to the user.
    Validation(ValidationError),
    /// Implementation defect; the chart must not be displayed.
    Calculation(CalculationError),
}

impl MatrixError {
    /// Returns whether this error is a defect rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Calculation(_))
    }
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid birthdate: {err}"),
            Self::Calculation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Calculation(err) => Some(err),
        }
    }
}

impl From<ValidationError> for MatrixError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CalculationError> for MatrixError {
    fn from(value: CalculationError) -> Self {
        Self::Calculation(value)
    }
}

/// Builds the matrix for `input`, using the local date as "today".
///
/// # Errors
/// - `MatrixError::Validation` for malformed, impossible, pre-1900 or future dates.
/// - `MatrixError::Calculation` when a derived point fails its range check.
pub fn build_matrix(input: &str) -> Result<MatrixResult, MatrixError> {
    build_matrix_on(input, Local::now().date_naive())
}

/// Builds the matrix for `input` with an explicit calculation day.
pub fn build_matrix_on(input: &str, today: NaiveDate) -> Result<MatrixResult, MatrixError> {
    let birthdate = BirthDate::parse_on(input, today).map_err(|err| {
        debug!(
            "event=matrix_build module=builder status=rejected reason={}",
            err.code()
        );
        MatrixError::Validation(err)
    })?;

    let result = derive_matrix(&birthdate).map_err(|err| {
        error!(
            "event=matrix_build module=builder status=error stage=\"{}\" error=\"{}\"",
            err.stage, err
        );
        MatrixError::Calculation(err)
    })?;

    debug!(
        "event=matrix_build module=builder status=ok mode={}",
        REDUCTION_MODE
    );
    Ok(result)
}

/// Derives and validates all points for an accepted birthdate.
fn derive_matrix(birthdate: &BirthDate) -> Result<MatrixResult, CalculationError> {
    let sums = DigitSums::from_birthdate(birthdate);
    let day = i64::from(birthdate.day());
    let month = i64::from(birthdate.month());
    let full_sum = i64::from(sums.full_sum_original);

    let a1 = point(Position::A1, day)?;
    let a2 = point(Position::A2, month)?;
    let a3 = point(Position::A3, i64::from(sums.year_digits_sum))?;
    let a4 = point(Position::A4, add(&[a1, a2, a3]))?;

    let p_core = point(Position::PCore, full_sum)?;
    let karma_tail = point(Position::KarmaTail, day + full_sum)?;

    let l1 = point(Position::L1, add(&[a1, p_core]))?;
    let l2 = point(Position::L2, add(&[a2, p_core]))?;
    let l3 = point(Position::L3, add(&[a3, p_core]))?;
    let l4 = point(Position::L4, add(&[a4, p_core]))?;

    let m1 = point(Position::M1, add(&[a1, a2]))?;
    let m2 = point(Position::M2, add(&[a2, a4]))?;
    let m3 = point(Position::M3, add(&[a4, a3]))?;
    let m4 = point(Position::M4, add(&[a3, a1]))?;

    let v1 = point(Position::V1, add(&[a1, l1]))?;
    let v2 = point(Position::V2, add(&[l1, p_core]))?;
    let v3 = point(Position::V3, add(&[p_core, l4]))?;
    let v4 = point(Position::V4, add(&[l4, a4]))?;

    let h1 = point(Position::H1, add(&[a2, l2]))?;
    let h2 = point(Position::H2, add(&[l2, p_core]))?;
    let h3 = point(Position::H3, add(&[p_core, l3]))?;
    let h4 = point(Position::H4, add(&[l3, a3]))?;

    let points = MatrixPoints {
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
    };

    let result = MatrixResult::new(*birthdate, sums, points);
    result
        .validate(REDUCTION_MODE)
        .map_err(|err| CalculationError {
            stage: CalculationStage::PostValidation,
            cause: CalculationCause::Invalid(err),
        })?;
    Ok(result)
}

fn point(position: Position, sum: i64) -> Result<u8, CalculationError> {
    reduce(sum).map_err(|err| CalculationError {
        stage: CalculationStage::Point(position),
        cause: CalculationCause::Reduction(err),
    })
}

fn add(values: &[u8]) -> i64 {
    values.iter().map(|value| i64::from(*value)).sum()
}

#[cfg(test)]
mod tests {
    use super::{build_matrix_on, CalculationCause, CalculationError, CalculationStage, MatrixError};
    use crate::model::birthdate::ValidationError;
    use crate::model::position::Position;
    use crate::reduce::ReductionError;
    use chrono::NaiveDate;
    use std::error::Error;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn worked_example_reproduces_each_link() {
        let result = build_matrix_on("1992-09-14", today()).unwrap();
        let sums = result.digit_sums();
        assert_eq!(sums.day_digits_sum, 5);
        assert_eq!(sums.month_digits_sum, 9);
        assert_eq!(sums.year_digits_sum, 21);
        assert_eq!(sums.full_sum_original, 35);

        let points = result.points();
        assert_eq!(points.a1, 14);
        assert_eq!(points.a2, 9);
        assert_eq!(points.a3, 21);
        assert_eq!(points.a4, 8);
        assert_eq!(points.p_core, 8);
        assert_eq!(points.karma_tail, 13);
    }

    #[test]
    fn validation_errors_stay_input_side() {
        let err = build_matrix_on("1992-02-30", today()).unwrap_err();
        assert!(!err.is_defect());
        assert!(matches!(
            err,
            MatrixError::Validation(ValidationError::ImpossibleDate { .. })
        ));
        assert!(err.to_string().starts_with("invalid birthdate:"));
    }

    #[test]
    fn calculation_error_names_stage_and_chains_source() {
        let err = MatrixError::from(CalculationError {
            stage: CalculationStage::Point(Position::V3),
            cause: CalculationCause::Reduction(ReductionError::Divergence {
                input: 99,
                last: 18,
                iterations: 10,
            }),
        });
        assert!(err.is_defect());
        assert!(err.to_string().contains("at point V3"), "{err}");
        let source = err.source().expect("calculation error source");
        assert!(source.source().is_some());
    }
}
