use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// Health anxiety self-check. Eight items, total 0–24.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often do you worry that you have, or will develop, a serious illness?",
            "How often do ordinary body sensations strike you as signs of something serious?",
            "How often do you seek reassurance about your health — checking symptoms online, asking others, or booking appointments?",
            "How often do you examine your body for lumps, marks, or other signs of illness?",
            "How often does reassurance from a doctor or a clear test result settle you for only a short while?",
            "How often do you avoid medical information, appointments, or programs about illness because they spike your worry?",
            "How often does health worry interfere with your work, relationships, or enjoyment of life?",
            "How often does the worry return even when you can tell yourself, rationally, that you are probably fine?",
        ];

        AssessmentDefinition {
            id: "health_anxiety".to_string(),
            name: "Health Anxiety Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::new(["Never", "Sometimes", "Often", "Very often"]),
            bands: vec![
                SeverityBand::new(
                    0,
                    7,
                    "Minimal",
                    "Your responses suggest an ordinary level of attention to your \
                     health — concern that comes and goes with circumstances.",
                ),
                SeverityBand::new(
                    8,
                    14,
                    "Mild",
                    "Your responses suggest health worry is taking up more room than \
                     it needs to. Noticing the checking-and-reassurance cycle is the \
                     most useful first step at this level.",
                ),
                SeverityBand::new(
                    15,
                    20,
                    "Moderate",
                    "Your responses suggest health anxiety is a regular presence — \
                     likely driving checking, reassurance-seeking, or avoidance that \
                     brings only brief relief. This pattern responds very well to \
                     targeted therapy.",
                ),
                SeverityBand::new(
                    21,
                    24,
                    "Severe",
                    "Your responses suggest health worry dominates your days despite \
                     reassurance and clear results. That is exhausting, and it is \
                     treatable — please consider an evaluation with someone who works \
                     with health anxiety specifically.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 2,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Strategy,
                        title: "Reassurance is the fuel, not the fix".to_string(),
                        content: "Each symptom search or reassurance request buys relief \
                                  that fades faster each time, and teaches the worry to \
                                  come back sooner. A practical experiment: delay any \
                                  checking urge by thirty minutes and watch what the \
                                  urge does on its own."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 7,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Knowing better doesn't make it stop — that's the point"
                            .to_string(),
                        content: "Worry that persists against your own rational judgment \
                                  isn't a reasoning failure; it's how health anxiety \
                                  works. Treatment targets the alarm system directly \
                                  rather than arguing with it, which is why it succeeds \
                                  where self-talk hasn't."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
