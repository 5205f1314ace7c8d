//! Narrative lookup tables keyed by point value.
//!
//! Plain data for report generators. Every lookup falls back to a generic
//! text when the value has no dedicated entry.

type Table = &'static [(u8, &'static str)];

const LIFE_PATH: Table = &[
    (1, "opening new paths through leadership and innovation"),
    (2, "building a peaceful world through harmony and cooperation"),
    (3, "spreading joy through creativity and expression"),
    (4, "laying solid foundations through stability and structure"),
    (5, "seeking new experience through freedom and change"),
    (6, "healing and harmony through love and service"),
    (7, "discovering truth through wisdom and inquiry"),
    (8, "practical success through achievement and authority"),
    (9, "serving humanity through completion and service"),
    (11, "acting as a spiritual messenger through inspiration and intuition"),
    (22, "changing the world through realization and building"),
];
const LIFE_PATH_FALLBACK: &str = "self-realization through balance and harmony";

const PERSONALITY: Table = &[
    (1, "a pioneering spirit with strong independence and leadership"),
    (2, "a peaceful nature that values harmonious relationships and cooperation"),
    (3, "a bright, expressive temperament that lifts the people around you"),
    (4, "a realist who prefers stable, systematic approaches"),
    (5, "an adventurer who seeks freedom and dynamic change"),
    (6, "a healer who expresses love through care and service"),
    (7, "a wise seeker who enjoys deep inquiry and reflection"),
    (8, "an achiever who reaches goals through strong will and drive"),
    (9, "a tolerant sage who understands others"),
    (11, "an inspired messenger with high intuition and spiritual sensitivity"),
    (22, "a master builder able to turn large visions into reality"),
];
const PERSONALITY_FALLBACK: &str = "a balanced energy";

const KARMA: Table = &[
    (13, "overcoming stagnation and seeking change through steady effort"),
    (14, "tempering excess and greed for a balanced life"),
    (16, "setting aside spiritual pride for humble learning"),
    (19, "avoiding misuse of independence and cooperating with others"),
];
const KARMA_FALLBACK: &str = "overcoming past patterns and pursuing new growth";

const MASTER_MISSION: Table = &[
    (11, "a mission to inspire others as an intuitive spiritual messenger"),
    (22, "a master builder's mission to realize spiritual ideals in the material world"),
];
const MASTER_MISSION_FALLBACK: &str = "a special spiritual mission";

const TALENT_FIELDS: Table = &[
    (1, "leadership, entrepreneurship and innovation"),
    (2, "counseling, mediation and team-centered work"),
    (3, "art, creation and communication"),
    (4, "management, administration and systematic work"),
    (5, "travel, media and fields with varied experience"),
    (6, "therapy, education and service"),
    (7, "research, analysis and spiritual guidance"),
    (8, "business, finance and executive roles"),
    (9, "art, counseling and humanitarian work"),
];
const TALENT_FIELDS_FALLBACK: &str = "many different fields";

const FINANCIAL_POTENTIAL: Table = &[
    (1, "strong prospects in independent business and leadership roles"),
    (2, "stable finances built through cooperation and partnership"),
    (3, "financial opportunities in creative and expressive fields"),
    (4, "steady wealth through systematic saving and long-term investment"),
    (5, "growth through several income sources and changing opportunities"),
    (6, "reliable income in service and care-related fields"),
    (7, "high returns in specialized fields built on expertise and research"),
    (8, "major financial achievement through business and investment"),
    (9, "stable income from humanitarian work and mastered skills"),
];
const FINANCIAL_POTENTIAL_FALLBACK: &str = "balanced financial management";

const DOMINANT_MEANING: Table = &[
    (1, "strong leadership and independence shape the whole life"),
    (2, "a strong need and ability for cooperation and harmony"),
    (3, "a natural gift for creative expression and communication"),
    (4, "a strong drive toward structure and stability"),
    (5, "a constant pursuit of change and freedom"),
    (6, "an emphasis on healing through care and love"),
    (7, "a strong desire for deep inquiry and spiritual growth"),
    (8, "a powerful drive for achievement and success"),
    (9, "a high awareness of completion and service"),
];
const DOMINANT_MEANING_FALLBACK: &str = "a distinctive energy pattern";

fn lookup(table: Table, value: u8, fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, text)| *text)
        .unwrap_or(fallback)
}

/// Life direction suggested by the core value.
pub fn life_path(value: u8) -> &'static str {
    lookup(LIFE_PATH, value, LIFE_PATH_FALLBACK)
}

pub fn personality(value: u8) -> &'static str {
    lookup(PERSONALITY, value, PERSONALITY_FALLBACK)
}

/// Challenge described by a karma number.
pub fn karma(value: u8) -> &'static str {
    lookup(KARMA, value, KARMA_FALLBACK)
}

pub fn master_mission(value: u8) -> &'static str {
    lookup(MASTER_MISSION, value, MASTER_MISSION_FALLBACK)
}

pub fn talent_fields(value: u8) -> &'static str {
    lookup(TALENT_FIELDS, value, TALENT_FIELDS_FALLBACK)
}

pub fn financial_potential(value: u8) -> &'static str {
    lookup(FINANCIAL_POTENTIAL, value, FINANCIAL_POTENTIAL_FALLBACK)
}

pub fn dominant_meaning(value: u8) -> &'static str {
    lookup(DOMINANT_MEANING, value, DOMINANT_MEANING_FALLBACK)
}
