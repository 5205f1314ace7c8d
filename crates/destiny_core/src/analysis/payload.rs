//! Serializable hand-off for report generators.
//!
//! # Responsibility
//! - Bundle a result with every derived view a narrative report needs.
//!
//! # Invariants
//! - Built only from a validated `MatrixResult`; holds no extra state.

use crate::analysis::advice::{suggestions_for, Suggestion};
use crate::analysis::lines::{major_lines, MajorLines};
use crate::analysis::special::{identify_special_energies, SpecialEnergies};
use crate::model::matrix::{DigitSums, MatrixPoints, MatrixResult};
use crate::model::position::Position;
use crate::tables::narrative;
use serde::Serialize;
use std::collections::BTreeMap;

/// Positions whose meanings are echoed in the payload.
const PRIMARY_POSITIONS: [Position; 6] = [
    Position::PCore,
    Position::A1,
    Position::A2,
    Position::A3,
    Position::A4,
    Position::KarmaTail,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub birthdate: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterMission {
    pub number: u8,
    pub mission: &'static str,
}

/// Narrative texts selected by point values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub life_path: &'static str,
    pub personality: &'static str,
    pub talent_fields: &'static str,
    pub financial_potential: &'static str,
    /// Present only when the karma tail holds a karma number.
    pub karma_tail: Option<&'static str>,
    /// One entry per distinct master number in the chart.
    pub master_missions: Vec<MasterMission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisPayload {
    pub user_info: UserInfo,
    pub matrix_positions: MatrixPoints,
    pub special_energies: SpecialEnergies,
    pub major_lines: MajorLines,
    pub position_meanings: BTreeMap<Position, &'static str>,
    pub calculation_details: DigitSums,
    pub suggestions: Vec<Suggestion>,
    pub narrative: Narrative,
}

impl AnalysisPayload {
    pub fn from_result(result: &MatrixResult) -> Self {
        let birthdate = result.birthdate();
        let energies = identify_special_energies(result);
        let suggestions = suggestions_for(result, &energies);
        let narrative = narrative_for(result, &energies);

        Self {
            user_info: UserInfo {
                birthdate: birthdate.to_iso_string(),
                year: birthdate.year(),
                month: birthdate.month(),
                day: birthdate.day(),
            },
            matrix_positions: *result.points(),
            special_energies: energies,
            major_lines: major_lines(result),
            position_meanings: PRIMARY_POSITIONS
                .into_iter()
                .map(|position| (position, position.meaning()))
                .collect(),
            calculation_details: *result.digit_sums(),
            suggestions,
            narrative,
        }
    }
}

fn narrative_for(result: &MatrixResult, energies: &SpecialEnergies) -> Narrative {
    let core = result.points().p_core;

    let mut master_missions: Vec<MasterMission> = Vec::new();
    for mark in &energies.master_numbers {
        if master_missions.iter().all(|entry| entry.number != mark.number) {
            master_missions.push(MasterMission {
                number: mark.number,
                mission: narrative::master_mission(mark.number),
            });
        }
    }

    Narrative {
        life_path: narrative::life_path(core),
        personality: narrative::personality(core),
        talent_fields: narrative::talent_fields(core),
        financial_potential: narrative::financial_potential(core),
        karma_tail: energies
            .karma_tail_is_karmic()
            .then(|| narrative::karma(result.points().karma_tail)),
        master_missions,
    }
}
