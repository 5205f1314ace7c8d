//! Numeric reduction primitives.
//!
//! # Responsibility
//! - Fold sums into the active reduction mode's valid set.
//!
//! # See also
//! - `crate::config::REDUCTION_MODE`

pub mod reducer;

pub use reducer::{
    reduce, reduce_f64, reduce_traced, reduce_with, sum_digits, sum_digits_f64, Reduction,
    ReductionError, ReductionMode,
};
