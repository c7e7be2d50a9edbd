use std::collections::BTreeMap;

use solace_core::models::result::{AssessmentResult, CardKind, RecommendationCard};
use solace_core::models::session::AssessmentSessionRecord;
use uuid::Uuid;

fn sample_result() -> AssessmentResult {
    AssessmentResult {
        assessment_type: "adhd".to_string(),
        score: 13,
        severity: "Moderate".to_string(),
        result_text: "Moderate difficulty.".to_string(),
        add_ons: vec![RecommendationCard {
            kind: CardKind::Strategy,
            title: "Try a two-container workflow".to_string(),
            content: "Keep exactly two lists.".to_string(),
        }],
        max_score: 27,
        flags: BTreeMap::new(),
    }
}

#[test]
fn navigation_state_uses_camel_case_keys() {
    let state = sample_result().navigation_state().unwrap();
    assert_eq!(state["assessmentType"], "adhd");
    assert_eq!(state["resultText"], "Moderate difficulty.");
    assert_eq!(state["maxScore"], 27);
    assert_eq!(state["addOns"][0]["type"], "strategy");
    assert!(state.get("assessment_type").is_none());
}

#[test]
fn navigation_state_with_no_flags_adds_no_extra_keys() {
    let state = sample_result().navigation_state().unwrap();
    let obj = state.as_object().unwrap();
    assert_eq!(obj.len(), 6);
    assert!(obj.get("flags").is_none());
}

#[test]
fn navigation_state_flattens_flags_to_top_level() {
    let mut result = sample_result();
    result.flags.insert("hasWithdrawalRisk".to_string(), true);
    let state = result.navigation_state().unwrap();
    assert_eq!(state["hasWithdrawalRisk"], true);
}

#[test]
fn card_kind_serializes_snake_case() {
    let json = serde_json::to_string(&CardKind::Safety).unwrap();
    assert_eq!(json, "\"safety\"");
}

#[test]
fn session_record_drops_unanswered_entries() {
    let result = sample_result();
    let record = AssessmentSessionRecord::from_result(
        Uuid::new_v4(),
        &result,
        &[2, -1, 2, -1, 1],
        serde_json::json!({}),
        jiff::Timestamp::UNIX_EPOCH,
    );

    assert_eq!(record.assessment_type, "adhd");
    assert_eq!(record.score, 13);
    assert_eq!(record.answers.len(), 3);
    assert_eq!(record.answers.get(&0), Some(&2));
    assert_eq!(record.answers.get(&2), Some(&2));
    assert_eq!(record.answers.get(&4), Some(&1));
    assert!(!record.answers.contains_key(&1));
    assert_eq!(record.recommendations.len(), 1);
}
