//! Destiny matrix domain model.
//!
//! # Responsibility
//! - Define the validated input (`BirthDate`) and the immutable output
//!   (`MatrixResult`) of one calculation.
//!
//! # Invariants
//! - Every value type here is constructed only through validating paths.

pub mod birthdate;
pub mod matrix;
pub mod position;
