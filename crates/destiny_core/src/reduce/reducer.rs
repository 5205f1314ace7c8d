//! Digit-sum reduction.
//!
//! # Responsibility
//! - Fold any integer into the valid set of a `ReductionMode`.
//! - Provide the plain digit-sum helper used for intermediate sums.
//!
//! # Invariants
//! - Reduction is total: it either returns a value accepted by the mode or a
//!   `ReductionError`; it never coerces an out-of-range value.
//! - Non-positive input reduces to `1`.
//! - At most `MAX_REDUCTION_ITERATIONS` folds are applied.

use crate::config::{MAX_REDUCTION_ITERATIONS, REDUCTION_MODE};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Target range of a reduction.
///
/// The two modes produce different values for the same input and are not
/// interchangeable inside one matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionMode {
    /// Values `1..=22` are kept as-is; only larger values are folded.
    Extended,
    /// Classical numerology: `1..=9` plus master numbers `11` and `22`.
    Classical,
}

impl ReductionMode {
    /// Returns whether `value` is a legal reduced value in this mode.
    pub fn accepts(self, value: u64) -> bool {
        match self {
            Self::Extended => (1..=22).contains(&value),
            Self::Classical => matches!(value, 1..=9 | 11 | 22),
        }
    }

    /// Stable lowercase name, used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Extended => "extended",
            Self::Classical => "classical",
        }
    }
}

impl Display for ReductionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one reduction with its fold count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduction {
    /// Magnitude the fold started from (`floor(abs(n))`, or `1` for `n <= 0`).
    pub input: u64,
    /// Reduced value, always accepted by the mode that produced it.
    pub value: u8,
    /// Number of digit-sum folds applied.
    pub iterations: u32,
}

/// Reduction failure.
///
/// `InvalidInput` is a caller error. `Divergence` and `InvariantViolation`
/// indicate a defect in the reduction itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ReductionError {
    /// Input is not a finite number.
    InvalidInput(f64),
    /// Folding did not reach the valid set within the iteration cap.
    Divergence {
        input: u64,
        last: u64,
        iterations: u32,
    },
    /// Folding stopped on a value outside the mode's valid set.
    InvariantViolation {
        input: u64,
        result: u64,
        mode: ReductionMode,
    },
}

impl ReductionError {
    /// Returns whether this error points at an implementation defect rather
    /// than bad input.
    pub fn is_defect(&self) -> bool {
        !matches!(self, Self::InvalidInput(_))
    }
}

impl Display for ReductionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(value) => write!(f, "reduction input is not a finite number: {value}"),
            Self::Divergence {
                input,
                last,
                iterations,
            } => write!(
                f,
                "reduction of {input} did not converge after {iterations} folds (last value {last})"
            ),
            Self::InvariantViolation {
                input,
                result,
                mode,
            } => write!(
                f,
                "reduction of {input} ended at {result}, outside the {mode} range"
            ),
        }
    }
}

impl Error for ReductionError {}

/// Sums the base-10 digits of `n`.
pub fn sum_digits(n: u64) -> u32 {
    let mut rest = n;
    let mut sum = 0_u32;
    while rest > 0 {
        sum += (rest % 10) as u32;
        rest /= 10;
    }
    sum
}

/// Sums the base-10 digits of `floor(abs(x))`.
///
/// # Errors
/// - `ReductionError::InvalidInput` when `x` is NaN or infinite.
pub fn sum_digits_f64(x: f64) -> Result<u32, ReductionError> {
    if !x.is_finite() {
        return Err(ReductionError::InvalidInput(x));
    }
    Ok(sum_digits(x.abs().floor() as u64))
}

/// Reduces `n` with the configured [`REDUCTION_MODE`].
///
/// # Errors
/// - Defect-class `ReductionError` variants only; integer input is always valid.
pub fn reduce(n: i64) -> Result<u8, ReductionError> {
    reduce_with(REDUCTION_MODE, n)
}

/// Reduces `n` with an explicit mode.
pub fn reduce_with(mode: ReductionMode, n: i64) -> Result<u8, ReductionError> {
    reduce_traced(mode, n).map(|reduction| reduction.value)
}

/// Reduces `n` and reports how many folds were needed.
pub fn reduce_traced(mode: ReductionMode, n: i64) -> Result<Reduction, ReductionError> {
    if n <= 0 {
        return Ok(Reduction {
            input: 1,
            value: 1,
            iterations: 0,
        });
    }
    fold(mode, n.unsigned_abs())
}

/// Reduces a floating-point value with the configured mode.
///
/// The value is floored after taking its magnitude, so `0 < x < 1` has no
/// valid reduction and surfaces as `InvariantViolation`.
///
/// # Errors
/// - `ReductionError::InvalidInput` when `x` is NaN or infinite.
pub fn reduce_f64(x: f64) -> Result<u8, ReductionError> {
    if !x.is_finite() {
        return Err(ReductionError::InvalidInput(x));
    }
    if x <= 0.0 {
        return Ok(1);
    }
    // `as` saturates for magnitudes beyond u64::MAX.
    fold(REDUCTION_MODE, x.abs().floor() as u64).map(|reduction| reduction.value)
}

fn fold(mode: ReductionMode, input: u64) -> Result<Reduction, ReductionError> {
    let mut result = input;
    let mut iterations = 0_u32;

    // Folding only shrinks values of two or more digits.
    while !mode.accepts(result) && result >= 10 {
        if iterations == MAX_REDUCTION_ITERATIONS {
            return Err(ReductionError::Divergence {
                input,
                last: result,
                iterations,
            });
        }
        result = u64::from(sum_digits(result));
        iterations += 1;
    }

    if !mode.accepts(result) {
        return Err(ReductionError::InvariantViolation {
            input,
            result,
            mode,
        });
    }

    Ok(Reduction {
        input,
        value: result as u8,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        reduce, reduce_f64, reduce_traced, reduce_with, sum_digits, sum_digits_f64,
        ReductionError, ReductionMode,
    };

    #[test]
    fn sum_digits_adds_decimal_digits() {
        assert_eq!(sum_digits(0), 0);
        assert_eq!(sum_digits(7), 7);
        assert_eq!(sum_digits(1992), 21);
        assert_eq!(sum_digits(u64::MAX), 87);
    }

    #[test]
    fn sum_digits_f64_floors_magnitude_and_rejects_non_finite() {
        assert_eq!(sum_digits_f64(-19.9).unwrap(), 10);
        assert!(matches!(
            sum_digits_f64(f64::NAN),
            Err(ReductionError::InvalidInput(_))
        ));
        assert!(matches!(
            sum_digits_f64(f64::NEG_INFINITY),
            Err(ReductionError::InvalidInput(_))
        ));
    }

    #[test]
    fn extended_keeps_values_up_to_twenty_two() {
        for n in 1..=22 {
            assert_eq!(reduce(n).unwrap() as i64, n);
        }
        assert_eq!(reduce(23).unwrap(), 5);
        assert_eq!(reduce(49).unwrap(), 13);
        assert_eq!(reduce(99).unwrap(), 18);
    }

    #[test]
    fn non_positive_input_falls_back_to_one() {
        assert_eq!(reduce(0).unwrap(), 1);
        assert_eq!(reduce(-40).unwrap(), 1);
        assert_eq!(reduce_f64(-3.5).unwrap(), 1);
    }

    #[test]
    fn multi_fold_inputs_report_iterations() {
        // 9_999_999_999 -> 90 -> 9
        let reduction = reduce_traced(ReductionMode::Extended, 9_999_999_999).unwrap();
        assert_eq!(reduction.value, 9);
        assert_eq!(reduction.iterations, 2);
    }

    #[test]
    fn classical_folds_into_single_digits_and_masters() {
        assert_eq!(reduce_with(ReductionMode::Classical, 10).unwrap(), 1);
        assert_eq!(reduce_with(ReductionMode::Classical, 11).unwrap(), 11);
        assert_eq!(reduce_with(ReductionMode::Classical, 14).unwrap(), 5);
        assert_eq!(reduce_with(ReductionMode::Classical, 22).unwrap(), 22);
        assert_eq!(reduce_with(ReductionMode::Classical, 29).unwrap(), 11);
        assert_eq!(reduce_with(ReductionMode::Classical, 1992).unwrap(), 3);
    }

    #[test]
    fn fractional_input_below_one_violates_range() {
        let err = reduce_f64(0.5).unwrap_err();
        assert!(matches!(
            err,
            ReductionError::InvariantViolation { result: 0, .. }
        ));
        assert!(err.is_defect());
    }

    #[test]
    fn f64_input_is_floored() {
        assert_eq!(reduce_f64(14.9).unwrap(), 14);
        assert_eq!(reduce_f64(44.0).unwrap(), 8);
        assert!(!reduce_f64(f64::INFINITY).unwrap_err().is_defect());
    }

    #[test]
    fn mode_accepts_matches_valid_sets() {
        assert!(ReductionMode::Extended.accepts(17));
        assert!(!ReductionMode::Extended.accepts(0));
        assert!(!ReductionMode::Extended.accepts(23));
        assert!(ReductionMode::Classical.accepts(11));
        assert!(!ReductionMode::Classical.accepts(10));
        assert!(!ReductionMode::Classical.accepts(13));
    }
}
