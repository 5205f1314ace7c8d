//! Calculation constants.
//!
//! # Responsibility
//! - Pin the one reduction mode every point derivation and validation uses.
//! - Name the numeric limits shared by the builder and the analysis views.
//!
//! # Invariants
//! - `REDUCTION_MODE` is the only mode the builder ever applies; switching it
//!   is a compile-time decision, never a runtime parameter.

use crate::reduce::ReductionMode;

/// Reduction mode applied to every matrix point.
///
/// `Extended` keeps `1..=22` intact so two-digit days and months survive as
/// distinct energies (see DESIGN.md for the day-vs-digit-sum decision).
pub const REDUCTION_MODE: ReductionMode = ReductionMode::Extended;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Upper bound on digit-sum folds before reduction is declared divergent.
pub const MAX_REDUCTION_ITERATIONS: u32 = 10;

/// Number of named points in one matrix.
pub const MATRIX_POINT_COUNT: usize = 22;

/// Minimum repeat count for a value to be reported as dominant.
pub const DOMINANT_MIN_FREQUENCY: u32 = 3;
