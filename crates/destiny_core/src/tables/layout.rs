//! Chart layout for renderers.
//!
//! # Invariants
//! - One entry per position, in `Position::ALL` order.
//! - Coordinates are on a `CANVAS_WIDTH x CANVAS_HEIGHT` canvas, origin top-left.

use crate::model::position::Position;
use serde::Serialize;

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 500;

/// Visual role of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Main,
    Core,
    Karma,
    Inner,
    Middle,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointLayout {
    pub position: Position,
    pub x: u32,
    pub y: u32,
    pub kind: PointKind,
    pub label: &'static str,
    pub importance: Importance,
}

const fn entry(
    position: Position,
    x: u32,
    y: u32,
    kind: PointKind,
    label: &'static str,
    importance: Importance,
) -> PointLayout {
    PointLayout {
        position,
        x,
        y,
        kind,
        label,
        importance,
    }
}

use Importance::{Critical, High, Low, Medium};
use PointKind::{Core, Inner, Karma, Line, Main, Middle};

pub const LAYOUT: [PointLayout; 22] = [
    entry(Position::PCore, 300, 250, Core, "core", Critical),
    entry(Position::A1, 300, 50, Main, "birth day", High),
    entry(Position::A2, 50, 250, Main, "birth month", High),
    entry(Position::A3, 550, 250, Main, "birth year", High),
    entry(Position::A4, 300, 450, Main, "spiritual task", High),
    entry(Position::KarmaTail, 400, 380, Karma, "karma", High),
    entry(Position::L1, 300, 150, Inner, "L1", Medium),
    entry(Position::L2, 150, 250, Inner, "L2", Medium),
    entry(Position::L3, 450, 250, Inner, "L3", Medium),
    entry(Position::L4, 300, 350, Inner, "L4", Medium),
    entry(Position::M1, 175, 125, Middle, "M1", Low),
    entry(Position::M2, 175, 375, Middle, "M2", Low),
    entry(Position::M3, 425, 375, Middle, "M3", Low),
    entry(Position::M4, 425, 125, Middle, "M4", Low),
    entry(Position::V1, 300, 100, Line, "V1", Low),
    entry(Position::V2, 300, 200, Line, "V2", Low),
    entry(Position::V3, 300, 300, Line, "V3", Low),
    entry(Position::V4, 300, 400, Line, "V4", Low),
    entry(Position::H1, 100, 250, Line, "H1", Low),
    entry(Position::H2, 200, 250, Line, "H2", Low),
    entry(Position::H3, 400, 250, Line, "H3", Low),
    entry(Position::H4, 500, 250, Line, "H4", Low),
];

/// Layout entry for `position`.
pub fn layout_for(position: Position) -> &'static PointLayout {
    // Variants are declared in `Position::ALL` order, which LAYOUT mirrors.
    &LAYOUT[position as usize]
}
