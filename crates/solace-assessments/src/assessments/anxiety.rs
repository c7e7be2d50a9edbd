use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// Generalized anxiety self-check. Seven items, total 0–21.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often have you felt nervous, anxious, or on edge?",
            "How often have you been unable to stop or control worrying?",
            "How often have you worried too much about different things?",
            "How often have you had trouble relaxing?",
            "How often have you been so restless that it is hard to sit still?",
            "How often have you become easily annoyed or irritable?",
            "How often have you felt afraid, as if something awful might happen?",
        ];

        AssessmentDefinition {
            id: "anxiety".to_string(),
            name: "Anxiety Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::frequency(),
            bands: vec![
                SeverityBand::new(
                    0,
                    4,
                    "Minimal",
                    "Your responses suggest minimal anxiety symptoms over the past two \
                     weeks. Some worry is simply the mind doing its job.",
                ),
                SeverityBand::new(
                    5,
                    9,
                    "Mild",
                    "Your responses suggest mild anxiety. Worth tracking, especially \
                     if it is new for you or slowly growing.",
                ),
                SeverityBand::new(
                    10,
                    14,
                    "Moderate",
                    "Your responses suggest moderate anxiety — a level where it is \
                     probably costing you sleep, focus, or ease, and where treatment \
                     reliably helps.",
                ),
                SeverityBand::new(
                    15,
                    21,
                    "Severe",
                    "Your responses suggest severe anxiety. Day-to-day life is likely \
                     organized around the worry by now. Effective treatment exists, \
                     and a professional evaluation is the right next step.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 3,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Strategy,
                        title: "Practice deliberate downshifting".to_string(),
                        content: "If relaxing on purpose feels impossible, train it like \
                                  a skill: slow exhale-weighted breathing for two minutes, \
                                  twice a day, at calm times — not only during spikes. \
                                  The practice at baseline is what makes it available \
                                  under load."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 6,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Referral,
                        title: "Dread responds well to therapy".to_string(),
                        content: "A persistent sense that something awful is coming is \
                                  one of the symptoms cognitive behavioral therapy \
                                  handles best. It is also exhausting to carry — worth \
                                  bringing to a professional rather than white-knuckling."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
