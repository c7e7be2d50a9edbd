use std::sync::LazyLock;

use solace_core::models::result::{CardKind, RecommendationCard};

use crate::scoring::{
    AssessmentDefinition, Predicate, Question, RecommendationRule, ResponseScale, SeverityBand,
};

/// Anger self-check. Eight items, total 0–24.
pub fn definition() -> &'static AssessmentDefinition {
    static DEF: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let prompts = [
            "How often do you lose your temper over things that later seem small?",
            "How often do you feel irritable or on a short fuse for much of the day?",
            "How often do you notice physical signs of anger — clenched jaw, tight chest, heat — before you've named the feeling?",
            "How often do you say things in anger that you later regret?",
            "How often have you slammed doors, thrown things, or hit something when angry?",
            "How often does anger cause conflict at work or at home?",
            "How often do you replay grievances or imagined arguments in your head?",
            "How often does your anger feel out of your control once it starts?",
        ];

        AssessmentDefinition {
            id: "anger".to_string(),
            name: "Anger Self-Assessment".to_string(),
            questions: prompts.iter().map(|p| Question::new(p)).collect(),
            default_scale: ResponseScale::new(["Never", "Sometimes", "Often", "Almost always"]),
            bands: vec![
                SeverityBand::new(
                    0,
                    6,
                    "Low",
                    "Your responses suggest anger is showing up at an ordinary level \
                     and staying within your control.",
                ),
                SeverityBand::new(
                    7,
                    13,
                    "Mild",
                    "Your responses suggest anger is running warmer than you'd like. \
                     This is a good range for early skills work, before patterns set.",
                ),
                SeverityBand::new(
                    14,
                    19,
                    "Moderate",
                    "Your responses suggest anger is regularly costing you — in \
                     relationships, at work, or in how you feel about yourself \
                     afterward. Structured anger work has a strong track record here.",
                ),
                SeverityBand::new(
                    20,
                    24,
                    "High",
                    "Your responses suggest anger is frequent, intense, and hard to \
                     rein in once started. Please consider professional support; this \
                     pattern rarely softens on its own, and it responds well to \
                     treatment.",
                ),
            ],
            rules: vec![
                RecommendationRule {
                    when: Predicate::AnswerAtLeast {
                        question: 4,
                        value: 1,
                    },
                    card: RecommendationCard {
                        kind: CardKind::Safety,
                        title: "Use a hard time-out rule".to_string(),
                        content: "When anger turns physical — even toward objects — \
                                  agree on a non-negotiable time-out: leave the room at \
                                  the first physical sign, with a set return time. The \
                                  rule has to be made in calm and honored in heat."
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
                        title: "Out-of-control anger is treatable".to_string(),
                        content: "Anger that feels unstoppable once it starts usually has \
                                  an early warning window that practice makes visible. \
                                  Anger-focused therapy works on exactly that window — \
                                  it is skills training, not blame."
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
                        title: "Interrupt the replay loop".to_string(),
                        content: "Rumination keeps the body at a simmer, so the next \
                                  spark lands on hot coals. When you catch a replay, \
                                  shift to something absorbing and physical for a few \
                                  minutes — the goal is to cool the baseline, not to win \
                                  the imagined argument."
                            .to_string(),
                    },
                },
            ],
            flags: vec![],
        }
    });
    &DEF
}
