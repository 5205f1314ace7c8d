//! Named lines through the chart.
//!
//! A line is a fixed sequence of positions; its values are read from a
//! `MatrixResult`, nothing is computed.

use crate::model::matrix::MatrixResult;
use crate::model::position::Position;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    SkyEarth,
    MaleFemale,
    Relationship,
    Talent,
    Spiritual,
}

struct LineSpec {
    kind: LineKind,
    name: &'static str,
    meaning: &'static str,
    positions: &'static [Position],
}

const LINE_TABLE: [LineSpec; 5] = [
    LineSpec {
        kind: LineKind::SkyEarth,
        name: "Sky-Earth line (destiny line)",
        meaning: "personal destiny and the path of spiritual growth",
        positions: &[
            Position::A1,
            Position::V1,
            Position::L1,
            Position::V2,
            Position::PCore,
            Position::V3,
            Position::L4,
            Position::V4,
            Position::A4,
        ],
    },
    LineSpec {
        kind: LineKind::MaleFemale,
        name: "Male-Female line (relationship line)",
        meaning: "relationship dynamics and communication patterns",
        positions: &[
            Position::A2,
            Position::H1,
            Position::L2,
            Position::H2,
            Position::PCore,
            Position::H3,
            Position::L3,
            Position::H4,
            Position::A3,
        ],
    },
    LineSpec {
        kind: LineKind::Relationship,
        name: "Core relationship line",
        meaning: "core relationships and partnership",
        positions: &[
            Position::A2,
            Position::L2,
            Position::PCore,
            Position::L3,
            Position::A3,
        ],
    },
    LineSpec {
        kind: LineKind::Talent,
        name: "Talent line",
        meaning: "innate talents and strengths",
        positions: &[Position::A1, Position::L1, Position::PCore],
    },
    LineSpec {
        kind: LineKind::Spiritual,
        name: "Spiritual line",
        meaning: "spiritual tasks and karma",
        positions: &[
            Position::A4,
            Position::L4,
            Position::PCore,
            Position::KarmaTail,
        ],
    },
];

/// One line with its values dereferenced from a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorLine {
    pub kind: LineKind,
    pub name: &'static str,
    pub positions: &'static [Position],
    pub values: Vec<u8>,
    pub meaning: &'static str,
}

/// The five major lines, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MajorLines {
    lines: Vec<MajorLine>,
}

impl MajorLines {
    pub fn iter(&self) -> impl Iterator<Item = &MajorLine> {
        self.lines.iter()
    }

    pub fn get(&self, kind: LineKind) -> Option<&MajorLine> {
        self.lines.iter().find(|line| line.kind == kind)
    }
}

pub fn major_lines(result: &MatrixResult) -> MajorLines {
    let lines = LINE_TABLE
        .iter()
        .map(|spec| MajorLine {
            kind: spec.kind,
            name: spec.name,
            positions: spec.positions,
            values: spec
                .positions
                .iter()
                .map(|position| result.value(*position))
                .collect(),
            meaning: spec.meaning,
        })
        .collect();
    MajorLines { lines }
}
