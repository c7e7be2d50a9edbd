use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// OCD self-check. Eight items, total 0–24.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often do unwanted thoughts, images, or urges intrude into your mind despite efforts to keep them out?",
            "How much distress do these intrusive thoughts cause you?",
            "How much time per day do you spend on rituals — washing, checking, counting, arranging, or mentally reviewing?",
            "How often do you check things — locks, appliances, your own memory of events — more than once?",
            "How often do you wash or clean beyond what the situation calls for?",
            "How often do you need things ordered, symmetrical, or 'just right' before you can move on?",
            "How often do you avoid places, objects, or situations because they trigger intrusive thoughts or rituals?",
            "How much do these thoughts and rituals interfere with your work, relationships, or daily routine?",
        ];

        AssessmentDefinition {
            id: "ocd".to_string(),
            name: "OCD Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::new(["Never", "Sometimes", "Often", "Very often"]),
            bands: vec![
                SeverityBand::new(
                    0,
                    7,
                    "Subclinical",
                    "Your responses suggest intrusive thoughts and habits within the \
                     ordinary range — nearly everyone has some of both.",
                ),
                SeverityBand::new(
                    8,
                    14,
                    "Mild",
                    "Your responses suggest a mild obsessive-compulsive pattern. If \
                     rituals are slowly expanding to claim more time, that drift is \
                     worth taking seriously now.",
                ),
                SeverityBand::new(
                    15,
                    20,
                    "Moderate",
                    "Your responses suggest a moderate pattern in which intrusive \
                     thoughts and rituals are costing real time and peace. Exposure \
                     and response prevention (ERP) is the gold-standard treatment \
                     and works at exactly this level.",
                ),
                SeverityBand::new(
                    21,
                    24,
                    "Severe",
                    "Your responses suggest obsessions and compulsions are consuming \
                     a large share of your day. Please seek an evaluation with an \
                     OCD-experienced clinician — ERP, sometimes with medication, has \
                     strong evidence even for severe presentations.",
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
                        title: "Ask specifically for ERP".to_string(),
                        content: "Not all therapy helps OCD equally — exposure and \
                                  response prevention is the approach with the strongest \
                                  evidence. When contacting a therapist, ask directly \
                                  whether they use ERP for OCD."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 6,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Avoidance grows the territory".to_string(),
                        content: "Every avoided trigger confirms the threat and hands \
                                  the pattern more ground. Treatment reverses this \
                                  gradually and collaboratively — you are never asked \
                                  to face everything at once."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
