//! Matrix calculation entry points.
//!
//! # Responsibility
//! - Expose the synchronous, side-effect-free builder used by every consumer.
//!
//! # Invariants
//! - Calls are independent; concurrent callers need no coordination.

pub mod builder;

pub use builder::{
    build_matrix, build_matrix_on, CalculationCause, CalculationError, CalculationStage,
    MatrixError,
};
