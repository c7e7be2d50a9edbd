use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, FlagRule, Predicate, Question, RecommendationRule, ResponseScale,
    SeverityBand,
};

/// Depression self-check. Nine items over the past two weeks, total
/// 0–27. Any non-zero answer on the self-harm item fires the crisis
/// resources card and sets `hasSelfHarmRisk`, independent of the total.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often have you had little interest or pleasure in doing things?",
            "How often have you felt down, depressed, or hopeless?",
            "How often have you had trouble falling asleep, staying asleep, or sleeping too much?",
            "How often have you felt tired or low on energy?",
            "How often has your appetite been noticeably smaller or larger than usual?",
            "How often have you felt bad about yourself, or that you are a failure or have let people down?",
            "How often have you had trouble concentrating on things like reading or watching a show?",
            "How often have you been moving or speaking noticeably slowly, or been so restless you couldn't sit still?",
            "How often have you had thoughts that you would be better off dead, or of hurting yourself?",
        ];

        AssessmentDefinition {
            id: "depression".to_string(),
            name: "Depression Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::frequency(),
            bands: vec![
                SeverityBand::new(
                    0,
                    4,
                    "Minimal",
                    "Your responses suggest minimal depressive symptoms right now. \
                     Low days happen; a sustained two-week pattern is what this \
                     check-in watches for.",
                ),
                SeverityBand::new(
                    5,
                    9,
                    "Mild",
                    "Your responses suggest mild depressive symptoms. Small, concrete \
                     changes — daily movement, regular sleep, one scheduled pleasant \
                     activity — often shift this range meaningfully.",
                ),
                SeverityBand::new(
                    10,
                    14,
                    "Moderate",
                    "Your responses suggest moderate depression. This is the range \
                     where talking with a professional reliably helps, and where \
                     waiting for it to pass on its own often doesn't.",
                ),
                SeverityBand::new(
                    15,
                    19,
                    "Moderately severe",
                    "Your responses suggest moderately severe depression. Please treat \
                     this as a health matter that warrants care now — therapy, \
                     medication, or both have strong evidence at this level.",
                ),
                SeverityBand::new(
                    20,
                    27,
                    "Severe",
                    "Your responses suggest severe depression. You deserve support, \
                     and this level of symptoms responds to treatment. Please reach \
                     out to a professional promptly rather than carrying this alone.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 8,
                        value: 1,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Safety,
                        title: "Immediate support is available".to_string(),
                        content: "If you are having thoughts of being better off dead or \
                                  of hurting yourself, you can call or text 988 (Suicide \
                                  & Crisis Lifeline) any time, day or night. If you are \
                                  in immediate danger, call 911. These thoughts are a \
                                  symptom, not a verdict — and they are treatable."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 3,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Strategy,
                        title: "Start with behavioral activation".to_string(),
                        content: "When energy is low, motivation follows action rather \
                                  than the other way around. Pick one small, scheduled \
                                  activity per day — a ten-minute walk counts — and do it \
                                  on schedule rather than by feel."
                            .to_string(),
                    },
                },
            ],
            flags: vec![FlagRule {
                name: "hasSelfHarmRisk".to_string(),
                when: Predicate::AnswerAtLeast {
                    question: 8,
                    value: 1,
                },
            }],
        }
    });
    &DEF
}
