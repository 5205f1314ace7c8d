//! Special-energy detection.
//!
//! # Responsibility
//! - Flag master and karma numbers by position.
//! - Count value frequencies and report dominant values.
//!
//! # Invariants
//! - Pure function of one `MatrixResult`; repeated calls are identical.
//! - Histogram counts always add up to `MATRIX_POINT_COUNT`.
//! - Dominant entries are ordered by descending frequency, then ascending value.

use crate::config::{DOMINANT_MIN_FREQUENCY, MATRIX_POINT_COUNT};
use crate::model::matrix::MatrixResult;
use crate::model::position::Position;
use serde::Serialize;
use std::collections::BTreeMap;

/// Values treated as master numbers.
pub const MASTER_NUMBERS: [u8; 2] = [11, 22];
/// Values treated as karma numbers.
pub const KARMA_NUMBERS: [u8; 4] = [13, 14, 16, 19];

/// A flagged value at a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyMark {
    pub number: u8,
    pub position: Position,
    pub meaning: &'static str,
}

/// A value that appears at least `DOMINANT_MIN_FREQUENCY` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DominantEnergy {
    pub number: u8,
    pub frequency: u32,
    /// `round(frequency / 22 * 100)`.
    pub percentage: u32,
}

/// Derived view over master numbers, karma numbers and value frequencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialEnergies {
    pub master_numbers: Vec<EnergyMark>,
    pub karma_numbers: Vec<EnergyMark>,
    pub repeating_numbers: BTreeMap<u8, u32>,
    pub dominant_energies: Vec<DominantEnergy>,
}

impl SpecialEnergies {
    pub fn has_master_numbers(&self) -> bool {
        !self.master_numbers.is_empty()
    }

    /// Returns whether the karma tail itself carries a karma number.
    pub fn karma_tail_is_karmic(&self) -> bool {
        self.karma_numbers
            .iter()
            .any(|mark| mark.position == Position::KarmaTail)
    }
}

pub fn is_master_number(value: u8) -> bool {
    MASTER_NUMBERS.contains(&value)
}

pub fn is_karma_number(value: u8) -> bool {
    KARMA_NUMBERS.contains(&value)
}

/// Scans all 22 points of `result`.
pub fn identify_special_energies(result: &MatrixResult) -> SpecialEnergies {
    let mut master_numbers = Vec::new();
    let mut karma_numbers = Vec::new();
    let mut repeating_numbers = BTreeMap::<u8, u32>::new();

    for (position, number) in result.points().iter() {
        // Position meanings already describe the karma tail as ancestral karma.
        if is_master_number(number) {
            master_numbers.push(EnergyMark {
                number,
                position,
                meaning: position.meaning(),
            });
        }
        if is_karma_number(number) {
            karma_numbers.push(EnergyMark {
                number,
                position,
                meaning: position.meaning(),
            });
        }
        *repeating_numbers.entry(number).or_insert(0) += 1;
    }

    let mut dominant_energies = repeating_numbers
        .iter()
        .filter(|(_, count)| **count >= DOMINANT_MIN_FREQUENCY)
        .map(|(number, count)| DominantEnergy {
            number: *number,
            frequency: *count,
            percentage: rounded_percentage(*count),
        })
        .collect::<Vec<_>>();
    dominant_energies.sort_by(|left, right| right.frequency.cmp(&left.frequency));

    SpecialEnergies {
        master_numbers,
        karma_numbers,
        repeating_numbers,
        dominant_energies,
    }
}

// Half-up rounding of count / total * 100 in integer arithmetic.
fn rounded_percentage(count: u32) -> u32 {
    let total = MATRIX_POINT_COUNT as u32;
    (count * 200 + total) / (2 * total)
}

#[cfg(test)]
mod tests {
    use super::{is_karma_number, is_master_number, rounded_percentage};

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(rounded_percentage(0), 0);
        assert_eq!(rounded_percentage(3), 14); // 13.63
        assert_eq!(rounded_percentage(4), 18); // 18.18
        assert_eq!(rounded_percentage(11), 50);
        assert_eq!(rounded_percentage(22), 100);
    }

    #[test]
    fn classifies_special_values() {
        assert!(is_master_number(11));
        assert!(is_master_number(22));
        assert!(!is_master_number(2));
        for value in [13, 14, 16, 19] {
            assert!(is_karma_number(value));
        }
        assert!(!is_karma_number(15));
    }
}
