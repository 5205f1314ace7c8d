//! Suggested actions derived from special energies.
//!
//! # Invariants
//! - At least one suggestion is always returned.
//! - Order is fixed: master numbers, karma numbers, dominant energy, then
//!   the general fallback (only when nothing else applies).

use crate::analysis::special::{identify_special_energies, SpecialEnergies};
use crate::model::matrix::MatrixResult;
use crate::tables::narrative;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub category: &'static str,
    pub action: String,
    pub priority: Priority,
}

pub fn suggested_actions(result: &MatrixResult) -> Vec<Suggestion> {
    suggestions_for(result, &identify_special_energies(result))
}

/// Same as [`suggested_actions`] with precomputed energies.
pub fn suggestions_for(result: &MatrixResult, energies: &SpecialEnergies) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if energies.has_master_numbers() {
        let numbers = join_numbers(energies.master_numbers.iter().map(|mark| mark.number));
        suggestions.push(Suggestion {
            category: "Master numbers",
            action: format!(
                "Your matrix holds master numbers ({numbers}). Recognize the heightened \
                 intuition and potential they carry and put it to work through meditation, \
                 creative work or leadership. Keep pressure and anxiety in check."
            ),
            priority: Priority::High,
        });
    }

    if !energies.karma_numbers.is_empty() {
        let numbers = join_numbers(energies.karma_numbers.iter().map(|mark| mark.number));
        let mut action = format!(
            "Karma numbers ({numbers}) appear in your matrix. They point to unresolved tasks \
             carried over from the past and call for conscious effort in those areas."
        );
        if energies.karma_tail_is_karmic() {
            let karma_tail = result.points().karma_tail;
            action.push_str(&format!(
                " Your karma tail ({karma_tail}) is itself karmic: {}. Reflect deeply so old \
                 patterns do not repeat.",
                narrative::karma(karma_tail)
            ));
        }
        suggestions.push(Suggestion {
            category: "Karmic tasks",
            action,
            priority: Priority::High,
        });
    }

    if let Some(dominant) = energies.dominant_energies.first() {
        suggestions.push(Suggestion {
            category: "Dominant energy",
            action: format!(
                "The number {} appears {} times in your matrix ({}%), {}. Strengthen its \
                 positive side and consciously manage its shadow.",
                dominant.number,
                dominant.frequency,
                dominant.percentage,
                narrative::dominant_meaning(dominant.number)
            ),
            priority: Priority::Medium,
        });
    }

    if suggestions.is_empty() {
        suggestions.push(Suggestion {
            category: "General guidance",
            action: "Use your matrix to understand yourself more deeply and work on bringing \
                     the positive side of each number into your life."
                .to_string(),
            priority: Priority::Low,
        });
    }

    suggestions
}

fn join_numbers(numbers: impl Iterator<Item = u8>) -> String {
    numbers
        .map(|number| number.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{suggested_actions, Priority};
    use crate::model::birthdate::BirthDate;
    use crate::model::matrix::{DigitSums, MatrixPoints, MatrixResult};

    fn result_with(values: [u8; 22]) -> MatrixResult {
        let birthdate = BirthDate::from_parts(2001, 3, 4).unwrap();
        MatrixResult::new(
            birthdate,
            DigitSums::from_birthdate(&birthdate),
            MatrixPoints::from_values(values),
        )
    }

    #[test]
    fn plain_chart_gets_general_guidance_only() {
        let suggestions = suggested_actions(&result_with([
            1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 12, 15,
        ]));
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].category, "General guidance");
        assert_eq!(suggestions[0].priority, Priority::Low);
    }

    #[test]
    fn dominant_advice_uses_top_value() {
        let mut values = [3; 22];
        values[5] = 14;
        let suggestions = suggested_actions(&result_with(values));
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].category, "Karmic tasks");
        assert!(suggestions[0].action.contains("karma tail (14)"));
        assert_eq!(suggestions[1].priority, Priority::Medium);
        assert!(suggestions[1].action.contains("appears 21 times"));
        assert!(suggestions[1].action.contains("(95%)"));
    }
}
