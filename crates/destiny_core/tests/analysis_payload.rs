use chrono::NaiveDate;
use destiny_core::tables::layout::{layout_for, LAYOUT};
use destiny_core::{build_matrix_on, suggested_actions, AnalysisPayload, Position, Priority};

fn payload_for(input: &str) -> AnalysisPayload {
    let result = build_matrix_on(input, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap();
    AnalysisPayload::from_result(&result)
}

#[test]
fn payload_serializes_expected_wire_fields() {
    let json = serde_json::to_value(payload_for("1992-09-14")).unwrap();

    assert_eq!(json["user_info"]["birthdate"], "1992-09-14");
    assert_eq!(json["user_info"]["day"], 14);
    assert_eq!(json["matrix_positions"]["P_Core"], 8);
    assert_eq!(json["matrix_positions"]["KarmaTail"], 13);
    assert_eq!(json["calculation_details"]["yearDigitsSum"], 21);
    assert_eq!(json["calculation_details"]["fullSumOriginal"], 35);

    let energies = &json["special_energies"];
    assert_eq!(energies["masterNumbers"].as_array().unwrap().len(), 3);
    assert_eq!(energies["masterNumbers"][0]["position"], "L1");
    assert_eq!(energies["repeatingNumbers"]["8"], 4);
    assert_eq!(energies["dominantEnergies"][0]["percentage"], 18);

    assert_eq!(json["major_lines"][0]["kind"], "skyEarth");
    assert_eq!(json["major_lines"][4]["values"], serde_json::json!([8, 16, 8, 13]));
    assert_eq!(
        json["position_meanings"]["KarmaTail"],
        "past-life and ancestral karma"
    );
    assert_eq!(json["position_meanings"].as_object().unwrap().len(), 6);
}

#[test]
fn narrative_follows_core_and_karma_tail() {
    let payload = payload_for("1992-09-14");
    let narrative = &payload.narrative;
    assert_eq!(
        narrative.life_path,
        "practical success through achievement and authority"
    );
    assert_eq!(
        narrative.karma_tail,
        Some("overcoming stagnation and seeking change through steady effort")
    );
    let missions = narrative
        .master_missions
        .iter()
        .map(|mission| mission.number)
        .collect::<Vec<_>>();
    assert_eq!(missions, vec![22, 11]);
}

#[test]
fn suggestions_cover_masters_karma_and_dominant() {
    let payload = payload_for("1992-09-14");
    let categories = payload
        .suggestions
        .iter()
        .map(|suggestion| suggestion.category)
        .collect::<Vec<_>>();
    assert_eq!(
        categories,
        vec!["Master numbers", "Karmic tasks", "Dominant energy"]
    );
    assert_eq!(payload.suggestions[0].priority, Priority::High);
    assert!(payload.suggestions[0].action.contains("(22, 11, 11)"));
    assert!(payload.suggestions[1].action.contains("karma tail (13)"));
    assert!(payload.suggestions[2].action.contains("number 8 appears 4 times"));
}

#[test]
fn suggested_actions_match_payload() {
    let result =
        build_matrix_on("1992-09-14", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap();
    assert_eq!(
        suggested_actions(&result),
        AnalysisPayload::from_result(&result).suggestions
    );
}

#[test]
fn layout_covers_every_position() {
    assert_eq!(LAYOUT.len(), Position::ALL.len());
    for position in Position::ALL {
        assert_eq!(layout_for(position).position, position);
    }
    let a1 = layout_for(Position::A1);
    assert_eq!((a1.x, a1.y, a1.label), (300, 50, "birth day"));
}
