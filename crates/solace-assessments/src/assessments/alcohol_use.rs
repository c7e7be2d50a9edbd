use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, FlagRule, Predicate, Question, RecommendationRule, ResponseScale,
    SeverityBand,
};

/// Alcohol use self-check. Eight items over the past year, total 0–24.
///
/// Item 6 (drinking in hazardous situations) carries a safety override:
/// any non-zero answer fires the no-driving/no-mixing card regardless
/// of which severity band the total lands in.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often have you had more to drink than you intended?",
            "How often have you found it difficult to stop drinking once you started?",
            "How often have you needed a drink in the morning to get yourself going?",
            "How often have you felt guilt or remorse after drinking?",
            "How often have you been unable to remember parts of the night before because of drinking?",
            "How often have you noticed shakiness, sweating, or anxiety when going without a drink?",
            "How often have you been drinking in situations where it wasn't safe — before driving, operating machinery, or while responsible for children?",
            "How often has someone close to you expressed concern about your drinking?",
        ];

        AssessmentDefinition {
            id: "alcohol_use".to_string(),
            name: "Alcohol Use Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::new([
                "Never",
                "Monthly or less",
                "Weekly",
                "Daily or almost daily",
            ]),
            bands: vec![
                SeverityBand::new(
                    0,
                    7,
                    "Lower risk",
                    "Your responses fall in a lower-risk range. If any single answer \
                     above stood out to you, that instinct is worth listening to even \
                     when the total is low.",
                ),
                SeverityBand::new(
                    8,
                    14,
                    "Hazardous",
                    "Your responses suggest a hazardous pattern of drinking — one that \
                     raises the risk of harm even if it hasn't caused obvious problems \
                     yet. A conversation with a counselor can help you take stock.",
                ),
                SeverityBand::new(
                    15,
                    19,
                    "Harmful",
                    "Your responses suggest drinking is already causing harm. Support \
                     works, and earlier is easier: counseling, medication options, and \
                     structured programs all have solid evidence behind them.",
                ),
                SeverityBand::new(
                    20,
                    24,
                    "Severe",
                    "Your responses suggest a severe pattern consistent with alcohol \
                     dependence. Please talk with a medical professional about next \
                     steps — this range usually warrants medically guided treatment.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 6,
                        value: 1,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Safety,
                        title: "Keep yourself and others safe first".to_string(),
                        content: "Whatever else you decide, two rules are non-negotiable: \
                                  never drive after drinking — arrange transport before \
                                  the first drink — and never combine alcohol with \
                                  sedatives, sleep medication, or opioid painkillers."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 5,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Urgent,
                        title: "Don't stop suddenly on your own".to_string(),
                        content: "Shakiness, sweating, or anxiety between drinks can \
                                  signal physical dependence. Stopping abruptly can be \
                                  dangerous in that situation — reduce only with medical \
                                  supervision, where withdrawal can be managed safely."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 2,
                        value: 1,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Morning drinking is a specific signal".to_string(),
                        content: "Needing a drink to start the day usually reflects the \
                                  body steadying itself, not a habit or preference. It is \
                                  one of the clearer signs that a check-in with a \
                                  professional is warranted."
                            .to_string(),
                    },
                },
            ],
            flags: vec![FlagRule {
                name: "hasWithdrawalRisk".to_string(),
                when: Predicate::AnyOf {
                    of: vec![
                        Predicate::AnswerAtLeast {
                            question: 5,
                            value: 2,
                        },
                        Predicate::AnswerAtLeast {
                            question: 2,
                            value: 2,
                        },
                    ],
                },
            }],
        }
    });
    &DEF
}
