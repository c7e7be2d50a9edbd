use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// Specific phobia self-check. Eight items, total 0–24, plus a trigger
/// follow-up choice (animal, natural environment, blood/injection,
/// situational, other) used by subtype-specific guidance.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "When you encounter the thing you fear, how often is the fear immediate and intense?",
            "How often do you feel anxious ahead of time, just knowing you might encounter it?",
            "How often do you go out of your way to avoid it?",
            "How often does an encounter bring physical panic — racing heart, sweating, shaking, or feeling faint?",
            "How often does the fear affect your choices — routes, activities, travel, or appointments?",
            "How often do you feel embarrassed or frustrated that the fear is stronger than you think it should be?",
            "When you cannot avoid an encounter, how often do you endure it with intense distress?",
            "Has this fear been present for six months or longer?",
        ];

        AssessmentDefinition {
            id: "specific_phobia".to_string(),
            name: "Specific Phobia Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::new(["Never", "Sometimes", "Often", "Always"]),
            bands: vec![
                SeverityBand::new(
                    0,
                    7,
                    "Minimal",
                    "Your responses suggest a dislike or wariness rather than a \
                     phobia — the fear isn't organizing your choices.",
                ),
                SeverityBand::new(
                    8,
                    15,
                    "Moderate",
                    "Your responses suggest a phobic pattern with real avoidance. \
                     Specific phobias are among the most treatable conditions in all \
                     of mental health — often in a handful of sessions.",
                ),
                SeverityBand::new(
                    16,
                    24,
                    "Severe",
                    "Your responses suggest intense fear with broad avoidance that is \
                     shaping your life. Graded exposure therapy has an excellent \
                     success rate even for long-standing, severe phobias.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 2,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Referral,
                        title: "Graded exposure is the treatment of choice".to_string(),
                        content: "Exposure therapy works up a ladder you design \
                                  together, from barely-uncomfortable to formerly \
                                  unthinkable, at your pace. Most people are surprised \
                                  how quickly the fear response retrains."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::FollowUpChoice {
                        name: "trigger".to_string(),
                        value: "blood_injection_injury".to_string(),
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Blood and needle fears work differently".to_string(),
                        content: "Unlike other phobias, blood-injection-injury fear can \
                                  drop blood pressure and cause fainting. Applied \
                                  tension — briefly tensing large muscles during \
                                  exposure — counters this and is taught as part of \
                                  treatment. Mention the fainting pattern to your \
                                  clinician."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
