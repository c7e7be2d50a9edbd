use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// Post-traumatic stress self-check. Eight items, total 0–24, plus a
/// trauma-timing follow-up choice captured on the final screen.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often have you had unwanted, distressing memories of the event?",
            "How often have you had nightmares related to the event?",
            "How often have you suddenly felt as if the event were happening again?",
            "How often do you avoid people, places, or conversations that remind you of the event?",
            "How often have you had strong negative beliefs since the event — about yourself, others, or the world being unsafe?",
            "How often are you watchful, on guard, or easily startled?",
            "How often do you feel cut off or emotionally numb around people you care about?",
            "How often has trouble sleeping or concentrating followed from these experiences?",
        ];

        AssessmentDefinition {
            id: "ptsd".to_string(),
            name: "Post-Traumatic Stress Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::frequency(),
            bands: vec![
                SeverityBand::new(
                    0,
                    7,
                    "Low",
                    "Your responses suggest a low level of post-traumatic stress \
                     symptoms right now. After hard events, some reactions are \
                     expected and often settle with time and support.",
                ),
                SeverityBand::new(
                    8,
                    14,
                    "Moderate",
                    "Your responses suggest a moderate symptom load. If these \
                     reactions have persisted for more than a month, a \
                     trauma-informed evaluation is worthwhile — early treatment \
                     shortens the course.",
                ),
                SeverityBand::new(
                    15,
                    24,
                    "High",
                    "Your responses suggest significant post-traumatic stress. \
                     Trauma-focused therapies have strong evidence and do not \
                     require retelling everything at once. You don't have to manage \
                     this alone.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::FollowUpChoice {
                        name: "timing".to_string(),
                        value: "under_one_month".to_string(),
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "The first month is its own phase".to_string(),
                        content: "Within the first month after an event, intense \
                                  reactions are the nervous system processing, not \
                                  necessarily a disorder taking hold. Support, routine, \
                                  and sleep matter most right now; reassess in a few \
                                  weeks if symptoms aren't easing."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 2,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Referral,
                        title: "Re-experiencing responds to trauma-focused therapy"
                            .to_string(),
                        content: "Flashback-like experiences are a core target of \
                                  trauma-focused treatments such as EMDR and prolonged \
                                  exposure. These are structured, paced approaches with \
                                  decades of evidence behind them."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 3,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Avoidance brings relief that shrinks your world".to_string(),
                        content: "Steering around reminders works in the moment and \
                                  quietly narrows life over time. Treatment rebuilds \
                                  the territory gradually, at a pace you control."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
