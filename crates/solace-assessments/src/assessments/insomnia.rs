use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// Insomnia self-check. Seven severity-rated items, total 0–21.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How much difficulty do you have falling asleep?",
            "How much difficulty do you have staying asleep through the night?",
            "How much of a problem is waking up earlier than you want to?",
            "How dissatisfied are you with your current sleep pattern?",
            "How much does poor sleep interfere with your daytime functioning — fatigue, mood, concentration?",
            "How noticeable do you think your sleep problem is to others, through tiredness or mood?",
            "How worried or distressed are you about your sleep?",
        ];

        AssessmentDefinition {
            id: "insomnia".to_string(),
            name: "Insomnia Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::new(["None", "Mild", "Moderate", "Severe"]),
            bands: vec![
                SeverityBand::new(
                    0,
                    7,
                    "No significant insomnia",
                    "Your responses suggest your sleep, while perhaps imperfect, is \
                     not at a clinically significant level of difficulty.",
                ),
                SeverityBand::new(
                    8,
                    14,
                    "Subthreshold",
                    "Your responses suggest a mild insomnia pattern. This is the \
                     ideal stage for sleep-habit changes, before effort and worry \
                     about sleep become part of the problem.",
                ),
                SeverityBand::new(
                    15,
                    21,
                    "Clinical insomnia",
                    "Your responses suggest insomnia at a clinical level. CBT-I — \
                     cognitive behavioral therapy for insomnia — is the first-line \
                     treatment, outperforming sleep medication over the long run.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 6,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Worry about sleep keeps you awake".to_string(),
                        content: "Insomnia persists partly because the bed becomes a \
                                  place of effort and monitoring. The counterintuitive \
                                  moves — getting up when wide awake, keeping the same \
                                  wake time regardless of the night — are exactly what \
                                  CBT-I trains."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 4,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Strategy,
                        title: "Protect the daytime, not just the night".to_string(),
                        content: "When nights are rough, the daytime levers matter most: \
                                  morning light, movement, caffeine cut off by early \
                                  afternoon, and no long naps. These steady the clock \
                                  that nighttime effort can't reach."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
