use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// Adult ADHD self-screen. Nine frequency-rated items, total 0–27.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often do you have trouble wrapping up the final details of a project once the challenging parts are done?",
            "How often do you have difficulty sustaining attention during long or repetitive tasks?",
            "How often do you have difficulty keeping your belongings, workspace, or schedule organized?",
            "How often do you avoid or put off getting started on tasks that require sustained mental effort?",
            "How often do you misplace things like keys, paperwork, or your phone?",
            "How often are you pulled off task by activity or noise around you?",
            "How often do you fidget or feel restless when you have to sit still for a long time?",
            "How often do you find yourself talking over people or finishing their sentences?",
            "How often do you act on impulse without thinking through the consequences?",
        ];

        AssessmentDefinition {
            id: "adhd".to_string(),
            name: "ADHD Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::new(["Never", "Sometimes", "Often", "Very often"]),
            bands: vec![
                SeverityBand::new(
                    0,
                    6,
                    "None/Minimal",
                    "Your responses do not suggest a significant level of ADHD-related \
                     difficulty. Occasional lapses in focus and organization are part of \
                     ordinary life.",
                ),
                SeverityBand::new(
                    7,
                    12,
                    "Mild",
                    "Your responses suggest some attention and organization difficulties \
                     that may be worth keeping an eye on, particularly if they have been \
                     present since childhood.",
                ),
                SeverityBand::new(
                    13,
                    18,
                    "Moderate",
                    "Your responses suggest a moderate level of ADHD-consistent \
                     difficulty. A structured evaluation with a clinician can clarify \
                     whether ADHD or something else (sleep, anxiety, depression) is \
                     driving these patterns.",
                ),
                SeverityBand::new(
                    19,
                    27,
                    "Severe",
                    "Your responses suggest substantial difficulty with attention, \
                     organization, and impulse control across situations. A full \
                     evaluation is strongly recommended — effective treatments exist.",
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
                        title: "Try a two-container workflow".to_string(),
                        content: "Disorganization responds well to radically simple \
                                  external structure. Keep exactly two lists: a capture \
                                  list where everything incoming lands, and a today list \
                                  with at most three items moved over each morning. The \
                                  point is to stop holding structure in working memory."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 6,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Strategy,
                        title: "Build in movement breaks".to_string(),
                        content: "Restlessness is easier to work with than against. Short, \
                                  scheduled movement breaks — a walk between meetings, \
                                  standing work blocks — reliably improve focus for the \
                                  sitting stretches in between."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 8,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Impulsivity is part of the picture".to_string(),
                        content: "Frequent acting-before-thinking alongside attention \
                                  difficulties is a classic combined presentation. Mention \
                                  it explicitly in an evaluation — it shapes which \
                                  treatments fit best."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
