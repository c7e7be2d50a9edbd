use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// Somatic symptom self-check. Eight items, total 0–24.
///
/// The last question swaps the frequency scale for the duration scale
/// (No / Unsure / Maybe / Yes) — a per-question override, scored like
/// any other item. Its answer decides between the persistent-pattern
/// card and the early-phase note.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often are you bothered by physical symptoms such as pain, fatigue, or stomach or bowel problems?",
            "How often do you worry that your physical symptoms signal something seriously wrong?",
            "How often do thoughts about your symptoms occupy your mind during the day?",
            "How much time and energy goes into managing your symptoms or your health?",
            "How often do you check your body for signs that something is wrong?",
            "How often have you sought medical evaluation or testing for these symptoms?",
            "How often do normal results or reassurance fail to settle your concern for long?",
        ];

        let mut questions: Vec<Question> = prompts.iter().map(|p| Question::new(p)).collect();
        questions.push(Question::with_scale(
            "Have these symptoms and concerns been present for six months or longer?",
            ResponseScale::duration_six_months(),
        ));

        AssessmentDefinition {
            id: "somatic_symptom".to_string(),
            name: "Somatic Symptom Self-Assessment".to_string(),
            questions,
            default_scale: ResponseScale::frequency(),
            bands: vec![
                SeverityBand::new(
                    0,
                    7,
                    "Minimal",
                    "Your responses suggest your physical symptoms, whatever their \
                     cause, are not dominating your attention or your days.",
                ),
                SeverityBand::new(
                    8,
                    15,
                    "Moderate",
                    "Your responses suggest your symptoms — and the worry around them — \
                     are taking a real toll. The distress is real regardless of what \
                     any test shows, and it responds to treatment in its own right.",
                ),
                SeverityBand::new(
                    16,
                    24,
                    "High",
                    "Your responses suggest symptoms and health worry are consuming a \
                     great deal of your life. Therapy aimed at the symptom-distress \
                     cycle itself, alongside any ongoing medical care, has strong \
                     evidence here.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 7,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "A persistent pattern deserves its own care plan".to_string(),
                        content: "Six months or more of symptoms and concern is past the \
                                  point of waiting it out. A clinician who treats \
                                  persistent symptom distress can work alongside your \
                                  medical providers rather than instead of them."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtMost {
                        question: 7,
                        value: 1,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Insight,
                        title: "Early days: watch, don't brace".to_string(),
                        content: "Symptom and worry patterns under six months often shift \
                                  or settle on their own. Keep a simple symptom log, keep \
                                  scheduled medical follow-ups, and revisit this check-in \
                                  if the pattern holds."
                            .to_string(),
                    },
                },
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 1,
                        value: 2,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Strategy,
                        title: "Name the worry loop".to_string(),
                        content: "Notice the cycle: a sensation, a frightening \
                                  interpretation, checking or reassurance, brief relief, \
                                  repeat. Labelling the loop as it happens is the first \
                                  step most treatments build on."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
