use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// Binge-eating self-check. Eight items, total 0–24.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often do you eat an amount of food that most people would consider unusually large in one sitting?",
            "How often do you feel unable to stop eating or to control what or how much you are eating?",
            "How often do you eat much more rapidly than normal during these episodes?",
            "How often do you eat until you feel uncomfortably full?",
            "How often do you eat large amounts when you are not physically hungry?",
            "How often do you eat alone because you feel embarrassed about how much you are eating?",
            "How often do you feel disgusted with yourself, depressed, or very guilty after eating?",
            "How much distress do these eating episodes cause you?",
        ];

        AssessmentDefinition {
            id: "binge_eating".to_string(),
            name: "Binge Eating Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::new(["Never", "Sometimes", "Often", "Very often"]),
            bands: vec![
                SeverityBand::new(
                    0,
                    7,
                    "Minimal",
                    "Your responses suggest your eating patterns are not causing \
                     significant loss of control or distress.",
                ),
                SeverityBand::new(
                    8,
                    14,
                    "Mild",
                    "Your responses suggest episodes of overeating with some distress. \
                     Early support helps — and rigid dieting in response tends to make \
                     the cycle worse, not better.",
                ),
                SeverityBand::new(
                    15,
                    20,
                    "Moderate",
                    "Your responses suggest a moderate binge-eating pattern with real \
                     distress attached. This is a recognized, treatable condition — \
                     not a willpower problem.",
                ),
                SeverityBand::new(
                    21,
                    24,
                    "Severe",
                    "Your responses suggest frequent episodes with heavy distress. \
                     Please consider reaching out to a professional experienced with \
                     eating concerns; specialized treatment works well here.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 1,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Loss of control is the defining feature".to_string(),
                        content: "What separates binge eating from ordinary overeating \
                                  isn't the amount — it's the feeling of not being able \
                                  to stop. That experience is the thing treatment \
                                  targets, and it is worth naming plainly to a clinician."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 7,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Referral,
                        title: "Specialized therapy has the best evidence".to_string(),
                        content: "Cognitive behavioral therapy adapted for eating \
                                  concerns is the best-studied treatment for this \
                                  pattern. Regular eating comes first in that work — \
                                  skipped meals and strict rules are fuel for binges, \
                                  not protection against them."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
