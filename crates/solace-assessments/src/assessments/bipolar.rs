use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, FlagRule, Predicate, Question, RecommendationRule, ResponseScale,
    SeverityBand,
};

/// Bipolar spectrum self-screen. Eight items about distinct "high"
/// periods, total 0–24, plus a psychosis follow-up flag captured on the
/// final screen. The psychosis card fires independent of the total.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "Have you had periods of feeling so energized or 'up' that others said you weren't your usual self?",
            "During such periods, have you needed much less sleep than usual without feeling tired?",
            "During such periods, have your thoughts raced or jumped quickly between ideas?",
            "During such periods, have you been noticeably more talkative or harder to interrupt?",
            "During such periods, have you done risky things you later regretted — spending sprees, impulsive decisions, uncharacteristic behavior?",
            "During such periods, have you felt unusually confident or capable of things others doubted?",
            "During such periods, have you been unusually irritable or quick to argue?",
            "Have these periods lasted several days at a time rather than hours?",
        ];

        AssessmentDefinition {
            id: "bipolar".to_string(),
            name: "Bipolar Spectrum Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::new([
                "Never",
                "Once or twice",
                "Several times",
                "Many times",
            ]),
            bands: vec![
                SeverityBand::new(
                    0,
                    7,
                    "Low likelihood",
                    "Your responses do not point toward a bipolar spectrum pattern. Mood \
                     that moves with circumstances — good weeks and hard weeks — is not \
                     the same thing as distinct elevated episodes.",
                ),
                SeverityBand::new(
                    8,
                    13,
                    "Possible",
                    "Some of your responses describe features seen in bipolar spectrum \
                     conditions. These features overlap with other explanations, so an \
                     unhurried history with a clinician is the right next step.",
                ),
                SeverityBand::new(
                    14,
                    19,
                    "Probable",
                    "Your responses describe a pattern fairly consistent with bipolar \
                     spectrum experiences. This matters practically: some common \
                     antidepressant approaches work poorly or backfire here, so an \
                     accurate diagnosis changes treatment.",
                ),
                SeverityBand::new(
                    20,
                    24,
                    "Highly probable",
                    "Your responses strongly suggest distinct elevated episodes. A \
                     psychiatric evaluation is clearly indicated — bipolar conditions \
                     respond well to the right treatment, and the right treatment \
                     depends on getting the diagnosis right.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::FollowUpFlag {
                        name: "psychosis".to_string(),
                    },
                    card: RecommendationCard {
                        kind: CardKind::Urgent,
                        title: "Seek an urgent evaluation".to_string(),
                        content: "Seeing or hearing things others can't, or holding \
                                  beliefs others find impossible, during a high period \
                                  calls for prompt psychiatric evaluation — regardless of \
                                  how you scored on the questions above. This is \
                                  treatable, and sooner is genuinely better."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 4,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Safety,
                        title: "Put guardrails around high periods".to_string(),
                        content: "If elevated periods have led to regretted decisions \
                                  before, set up protections while steady: spending \
                                  limits, a trusted person who can flag early warning \
                                  signs, and an agreement about big decisions during \
                                  'up' stretches."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AllOf {
                        of: vec![
                            Predicate::AnswerAtLeast {
                                question: 1,
                                value: 2,
                            },
                            Predicate::AnswerAtLeast {
                                question: 7,
                                value: 2,
                            },
                        ],
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Sleep change with duration is the key detail".to_string(),
                        content: "Multi-day stretches of high energy on little sleep — \
                                  without feeling tired — distinguish an elevated episode \
                                  from an ordinary good mood. Bring specific examples, \
                                  with dates if you can, to an evaluation."
                            .to_string(),
                    },
                },
            ],
            flags: vec![FlagRule {
                name: "hasPsychosisIndicator".to_string(),
                when: Predicate::FollowUpFlag {
                    name: "psychosis".to_string(),
                },
            }],
        }
    });
    &DEF
}
