//! Named matrix positions.
//!
//! # Invariants
//! - There are exactly 22 positions; `Position::ALL` lists them in canonical
//!   order (core, corners, karma tail, then L/M/V/H groups).
//! - `as_str()` is the wire name and round-trips through `FromStr`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the 22 points of a destiny matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Center of the chart.
    #[serde(rename = "P_Core")]
    PCore,
    A1,
    A2,
    A3,
    A4,
    KarmaTail,
    L1,
    L2,
    L3,
    L4,
    M1,
    M2,
    M3,
    M4,
    V1,
    V2,
    V3,
    V4,
    H1,
    H2,
    H3,
    H4,
}

impl Position {
    /// All positions in canonical order.
    pub const ALL: [Position; 22] = [
        Self::PCore,
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::KarmaTail,
        Self::L1,
        Self::L2,
        Self::L3,
        Self::L4,
        Self::M1,
        Self::M2,
        Self::M3,
        Self::M4,
        Self::V1,
        Self::V2,
        Self::V3,
        Self::V4,
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
    ];

    /// Wire name of this position.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PCore => "P_Core",
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A3 => "A3",
            Self::A4 => "A4",
            Self::KarmaTail => "KarmaTail",
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::L4 => "L4",
            Self::M1 => "M1",
            Self::M2 => "M2",
            Self::M3 => "M3",
            Self::M4 => "M4",
            Self::V1 => "V1",
            Self::V2 => "V2",
            Self::V3 => "V3",
            Self::V4 => "V4",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::H4 => "H4",
        }
    }

    /// Short human-readable meaning of the position on the chart.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::PCore => "core self, comfort zone",
            Self::A1 => "personal essence and individuality (birth day)",
            Self::A2 => "masculine energy and relationships (birth month)",
            Self::A3 => "feminine energy and relationships (birth year)",
            Self::A4 => "spiritual task, ancestral line",
            Self::KarmaTail => "past-life and ancestral karma",
            Self::L1 => "inner potential (A1-P_Core)",
            Self::L2 => "emotion and intuition (A2-P_Core)",
            Self::L3 => "expression and communication (A3-P_Core)",
            Self::L4 => "realization and completion (A4-P_Core)",
            Self::M1 => "early relationship energy (A1-A2)",
            Self::M2 => "change and challenge (A2-A4)",
            Self::M3 => "achievement and results (A4-A3)",
            Self::M4 => "new beginnings (A3-A1)",
            Self::V1 => "rising energy (A1-L1)",
            Self::V2 => "inner balance (L1-P_Core)",
            Self::V3 => "outer expression (P_Core-L4)",
            Self::V4 => "completion energy (L4-A4)",
            Self::H1 => "left flow (A2-L2)",
            Self::H2 => "inner harmony (L2-P_Core)",
            Self::H3 => "outer harmony (P_Core-L3)",
            Self::H4 => "right flow (L3-A3)",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a matrix position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl Display for UnknownPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown matrix position: `{}`", self.0)
    }
}

impl Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == value)
            .ok_or_else(|| UnknownPosition(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, UnknownPosition};
    use std::collections::BTreeSet;

    #[test]
    fn all_positions_are_distinct() {
        let names = Position::ALL
            .iter()
            .map(|position| position.as_str())
            .collect::<BTreeSet<_>>();
        assert_eq!(names.len(), 22);
    }

    #[test]
    fn discriminants_match_canonical_index() {
        for (index, position) in Position::ALL.into_iter().enumerate() {
            assert_eq!(position as usize, index);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>().unwrap(), position);
        }
        assert_eq!(
            "p_core".parse::<Position>().unwrap_err(),
            UnknownPosition("p_core".to_string())
        );
    }

    #[test]
    fn core_serializes_with_wire_name() {
        assert_eq!(
            serde_json::to_value(Position::PCore).unwrap(),
            serde_json::json!("P_Core")
        );
    }
}
