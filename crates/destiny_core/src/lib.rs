//! Destiny matrix calculation core.
//! Turns a birthdate into the 22 reduced points of a destiny matrix chart and
//! the derived views presentation layers read.

pub mod analysis;
pub mod calc;
pub mod config;
pub mod logging;
pub mod model;
pub mod reduce;
pub mod tables;

pub use analysis::advice::{suggested_actions, Priority, Suggestion};
pub use analysis::lines::{major_lines, LineKind, MajorLine, MajorLines};
pub use analysis::payload::AnalysisPayload;
pub use analysis::special::{identify_special_energies, DominantEnergy, EnergyMark, SpecialEnergies};
pub use calc::{
    build_matrix, build_matrix_on, CalculationCause, CalculationError, CalculationStage,
    MatrixError,
};
pub use config::REDUCTION_MODE;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::birthdate::{BirthDate, ValidationError};
pub use model::matrix::{DigitSums, MatrixPoints, MatrixResult, MatrixValidationError};
pub use model::position::Position;
pub use reduce::{reduce, sum_digits, ReductionError, ReductionMode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
