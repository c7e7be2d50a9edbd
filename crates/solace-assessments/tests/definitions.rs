use std::collections::BTreeSet;

use solace_assessments::engine::AssessmentEngine;
use solace_assessments::error::AssessmentError;
use solace_assessments::scoring::{
    AssessmentDefinition, DefinitionError, Predicate, Question, ResponseScale, SeverityBand,
};
use solace_assessments::{all_assessments, get_assessment};

#[test]
fn registry_contains_every_shipped_assessment() {
    let ids: Vec<&str> = all_assessments().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids.len(), 13);
    for id in [
        "adhd",
        "alcohol_use",
        "anger",
        "anxiety",
        "binge_eating",
        "bipolar",
        "depression",
        "health_anxiety",
        "insomnia",
        "ocd",
        "ptsd",
        "somatic_symptom",
        "specific_phobia",
    ] {
        assert!(ids.contains(&id), "missing assessment: {id}");
    }
}

#[test]
fn assessment_ids_are_unique() {
    let defs = all_assessments();
    let ids: BTreeSet<&str> = defs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids.len(), defs.len());
}

#[test]
fn lookup_by_id_round_trips() {
    for def in all_assessments() {
        let found = get_assessment(&def.id).expect("registered id must resolve");
        assert_eq!(found.id, def.id);
    }
    assert!(get_assessment("nope").is_none());
}

/// Every shipped definition must be internally consistent: bands
/// partition [0, max_score], scales are well-formed, and every rule and
/// flag predicate references a real question.
#[test]
fn every_shipped_definition_validates_cleanly() {
    for def in all_assessments() {
        let errors = def.validate();
        assert!(
            errors.is_empty(),
            "{} failed validation: {:?}",
            def.id,
            errors
        );
    }
}

#[test]
fn severity_bands_cover_every_reachable_total_exactly_once() {
    for def in all_assessments() {
        let max = def.max_score();
        for total in 0..=max {
            let matching = def.bands.iter().filter(|b| b.contains(total)).count();
            assert_eq!(matching, 1, "{}: total {total} matched {matching} bands", def.id);
        }
    }
}

#[test]
fn max_score_reflects_heterogeneous_scales() {
    let def = get_assessment("somatic_symptom").unwrap();
    // Seven frequency questions plus one duration-scaled question, all 0-3.
    assert_eq!(def.max_score(), 24);

    let duration = def.scale_for(7).unwrap();
    let default = def.scale_for(0).unwrap();
    assert_ne!(duration, default);
    assert_eq!(duration.options[0].label, "No");
    assert_eq!(duration.options[3].label, "Yes");
}

fn broken_definition() -> AssessmentDefinition {
    AssessmentDefinition {
        id: "broken".to_string(),
        name: "Broken".to_string(),
        questions: vec![Question::new("Only question?")],
        default_scale: ResponseScale::new(["No", "Somewhat", "Mostly", "Yes"]),
        // Max score is 3 but the bands stop at 1: totals 2 and 3 are uncovered.
        bands: vec![SeverityBand::new(0, 1, "Low", "Low.")],
        rules: vec![],
        flags: vec![],
    }
}

#[test]
fn validation_reports_band_gaps() {
    let errors = broken_definition().validate();
    assert!(errors.contains(&DefinitionError::BandGap {
        assessment: "broken".to_string(),
        total: 2,
    }));
    assert!(errors.contains(&DefinitionError::BandGap {
        assessment: "broken".to_string(),
        total: 3,
    }));
}

#[test]
fn validation_reports_rule_index_out_of_range() {
    let mut def = broken_definition();
    def.bands = vec![SeverityBand::new(0, 3, "All", "All.")];
    def.flags.push(solace_assessments::scoring::FlagRule {
        name: "dangling".to_string(),
        when: Predicate::AnswerAtLeast {
            question: 5,
            value: 1,
        },
    });
    let errors = def.validate();
    assert!(errors.iter().any(|e| matches!(
        e,
        DefinitionError::FlagIndexOutOfRange { index: 5, count: 1, .. }
    )));
}

/// A band gap is a data bug: `score()` surfaces it as a typed error
/// rather than inventing an "unknown" severity.
#[test]
fn score_fails_loudly_when_no_band_matches() {
    let def = broken_definition();
    let mut engine = AssessmentEngine::new(&def);
    engine.select_answer(0, 3).unwrap();
    let err = engine.score().unwrap_err();
    assert!(matches!(err, AssessmentError::BandNotFound { total: 3, .. }));
}
