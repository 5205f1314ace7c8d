//! Derived views over a finished matrix.
//!
//! # Responsibility
//! - Detect special energies, group named lines and assemble report input.
//!
//! # Invariants
//! - Every function here is pure over `&MatrixResult`; nothing is cached.

pub mod advice;
pub mod lines;
pub mod payload;
pub mod special;
