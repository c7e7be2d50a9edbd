use solace_assessments::engine::AssessmentEngine;
use solace_assessments::error::AssessmentError;
use solace_assessments::get_assessment;
use solace_assessments::scoring::{FollowUpValue, UNANSWERED};

fn adhd() -> &'static solace_assessments::scoring::AssessmentDefinition {
    get_assessment("adhd").unwrap()
}

#[test]
fn starts_at_first_question_with_all_unanswered() {
    let engine = AssessmentEngine::new(adhd());
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.answers().len(), 9);
    assert!(engine.answers().iter().all(|a| *a == UNANSWERED));
    assert!(!engine.can_advance());
}

#[test]
fn current_index_stays_clamped_under_any_navigation() {
    let def = adhd();
    let n = def.question_count();
    let mut engine = AssessmentEngine::new(def);

    for _ in 0..3 {
        engine.retreat();
    }
    assert_eq!(engine.current_index(), 0);

    for _ in 0..n * 2 {
        engine.advance();
    }
    assert_eq!(engine.current_index(), n - 1);
    assert!(engine.is_last_question());

    engine.retreat();
    engine.advance();
    engine.advance();
    assert_eq!(engine.current_index(), n - 1);
}

#[test]
fn select_answer_rejects_out_of_range_index() {
    let mut engine = AssessmentEngine::new(adhd());
    let err = engine.select_answer(9, 1).unwrap_err();
    assert!(matches!(
        err,
        AssessmentError::QuestionOutOfRange { index: 9, count: 9, .. }
    ));
    assert!(engine.answers().iter().all(|a| *a == UNANSWERED));
}

#[test]
fn select_answer_rejects_value_off_the_scale() {
    let mut engine = AssessmentEngine::new(adhd());
    assert!(matches!(
        engine.select_answer(0, 4),
        Err(AssessmentError::AnswerOutOfRange { index: 0, value: 4, .. })
    ));
    assert!(matches!(
        engine.select_answer(0, -1),
        Err(AssessmentError::AnswerOutOfRange { .. })
    ));
    // The rejected values were never stored.
    assert_eq!(engine.answers()[0], UNANSWERED);
}

#[test]
fn can_advance_tracks_the_current_answer() {
    let mut engine = AssessmentEngine::new(adhd());
    assert!(!engine.can_advance());
    engine.select_answer(0, 2).unwrap();
    assert!(engine.can_advance());
    engine.advance();
    assert!(!engine.can_advance());
}

#[test]
fn unanswered_entries_contribute_zero_to_the_total() {
    let mut engine = AssessmentEngine::new(adhd());
    engine.select_answer(0, 3).unwrap();
    engine.select_answer(4, 2).unwrap();
    // Seven questions left unanswered; the sentinel never drags the sum down.
    assert_eq!(engine.total(), 5);

    let result = engine.score().unwrap();
    assert_eq!(result.score, 5);
}

#[test]
fn score_is_bounded_by_zero_and_max_score() {
    let def = adhd();
    let mut engine = AssessmentEngine::new(def);
    assert_eq!(engine.total(), 0);

    for i in 0..def.question_count() {
        engine.select_answer(i, 3).unwrap();
    }
    assert_eq!(engine.total(), def.max_score());
    assert_eq!(engine.score().unwrap().score, 27);
}

#[test]
fn reselecting_the_same_answer_is_idempotent() {
    let def = adhd();
    let mut once = AssessmentEngine::new(def);
    let mut twice = AssessmentEngine::new(def);

    for i in 0..def.question_count() {
        once.select_answer(i, 1).unwrap();
        twice.select_answer(i, 1).unwrap();
        twice.select_answer(i, 1).unwrap();
    }

    assert_eq!(once.score().unwrap(), twice.score().unwrap());
}

#[test]
fn reselecting_overwrites_in_place() {
    let mut engine = AssessmentEngine::new(adhd());
    engine.select_answer(0, 3).unwrap();
    engine.select_answer(0, 1).unwrap();
    assert_eq!(engine.answers()[0], 1);
    assert_eq!(engine.total(), 1);
}

#[test]
fn unanswered_indices_reports_gaps() {
    let mut engine = AssessmentEngine::new(adhd());
    engine.select_answer(0, 2).unwrap();
    engine.select_answer(3, 1).unwrap();
    assert_eq!(engine.unanswered_indices(), vec![1, 2, 4, 5, 6, 7, 8]);
}

#[test]
fn follow_ups_are_stored_and_readable_at_any_time() {
    let mut engine = AssessmentEngine::new(get_assessment("bipolar").unwrap());
    engine.set_follow_up("psychosis", FollowUpValue::Flag(true));
    assert_eq!(
        engine.follow_ups().get("psychosis"),
        Some(&FollowUpValue::Flag(true))
    );
}
