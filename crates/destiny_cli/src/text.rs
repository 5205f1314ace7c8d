//! Plain-text rendering of an analysis payload.

use destiny_core::{AnalysisPayload, Position};
use std::fmt::Write;

const POINT_GROUPS: [(&str, &[Position]); 5] = [
    (
        "Core",
        &[
            Position::PCore,
            Position::A1,
            Position::A2,
            Position::A3,
            Position::A4,
            Position::KarmaTail,
        ],
    ),
    ("Inner", &[Position::L1, Position::L2, Position::L3, Position::L4]),
    ("Middle", &[Position::M1, Position::M2, Position::M3, Position::M4]),
    ("Vertical", &[Position::V1, Position::V2, Position::V3, Position::V4]),
    ("Horizontal", &[Position::H1, Position::H2, Position::H3, Position::H4]),
];

pub fn render(payload: &AnalysisPayload) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, payload);
    out
}

fn write_report(out: &mut String, payload: &AnalysisPayload) -> std::fmt::Result {
    let sums = &payload.calculation_details;
    writeln!(out, "Destiny matrix for {}", payload.user_info.birthdate)?;
    writeln!(
        out,
        "Digit sums: year={} month={} day={} total={}",
        sums.year_digits_sum, sums.month_digits_sum, sums.day_digits_sum, sums.full_sum_original
    )?;

    writeln!(out, "\nPoints")?;
    for (group, positions) in POINT_GROUPS {
        let cells = positions
            .iter()
            .map(|position| format!("{position}={}", payload.matrix_positions.get(*position)))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "  {group:<10} {cells}")?;
    }

    writeln!(out, "\nMajor lines")?;
    for line in payload.major_lines.iter() {
        let values = line
            .values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join("-");
        writeln!(out, "  {}: {values}", line.name)?;
    }

    let energies = &payload.special_energies;
    if !energies.master_numbers.is_empty() || !energies.karma_numbers.is_empty() {
        writeln!(out, "\nSpecial energies")?;
        for mark in &energies.master_numbers {
            writeln!(out, "  master {} at {} ({})", mark.number, mark.position, mark.meaning)?;
        }
        for mark in &energies.karma_numbers {
            writeln!(out, "  karma {} at {} ({})", mark.number, mark.position, mark.meaning)?;
        }
    }
    for dominant in &energies.dominant_energies {
        writeln!(
            out,
            "  dominant {} x{} ({}%)",
            dominant.number, dominant.frequency, dominant.percentage
        )?;
    }

    writeln!(out, "\nLife path: {}", payload.narrative.life_path)?;
    writeln!(out, "Personality: {}", payload.narrative.personality)?;

    writeln!(out, "\nSuggestions")?;
    for suggestion in &payload.suggestions {
        writeln!(out, "  [{:?}] {}: {}", suggestion.priority, suggestion.category, suggestion.action)?;
    }
    Ok(())
}
