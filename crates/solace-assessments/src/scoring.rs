use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use solace_core::models::result::RecommendationCard;

/// Sentinel for a question the visitor has not answered yet.
pub const UNANSWERED: i32 = -1;

/// One selectable response on a scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleOption {
    pub value: i32,
    pub label: String,
}

/// An ordered response scale. Every shipped scale has four options with
/// values 0–3; the engine only assumes values ascend from zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseScale {
    pub options: Vec<ScaleOption>,
}

impl ResponseScale {
    /// Build a scale from labels in ascending value order (0, 1, 2, ...).
    pub fn new<const N: usize>(labels: [&str; N]) -> Self {
        Self {
            options: labels
                .iter()
                .enumerate()
                .map(|(value, label)| ScaleOption {
                    value: value as i32,
                    label: (*label).to_string(),
                })
                .collect(),
        }
    }

    /// The PHQ-style frequency scale most assessments default to.
    pub fn frequency() -> Self {
        Self::new([
            "Not at all",
            "Several days",
            "More than half the days",
            "Nearly every day",
        ])
    }

    /// The duration scale used as a last-question override ("has this
    /// lasted six months or longer?").
    pub fn duration_six_months() -> Self {
        Self::new(["No", "Unsure", "Maybe", "Yes"])
    }

    pub fn contains(&self, value: i32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn max(&self) -> i32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }
}

/// An immutable question definition. `scale` overrides the assessment's
/// default scale for this question only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub prompt: String,
    pub scale: Option<ResponseScale>,
}

impl Question {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            scale: None,
        }
    }

    pub fn with_scale(prompt: &str, scale: ResponseScale) -> Self {
        Self {
            prompt: prompt.to_string(),
            scale: Some(scale),
        }
    }
}

/// An inclusive score range mapped to a severity label and narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub min: i32,
    pub max: i32,
    pub label: String,
    pub narrative: String,
}

impl SeverityBand {
    pub fn new(min: i32, max: i32, label: &str, narrative: &str) -> Self {
        Self {
            min,
            max,
            label: label.to_string(),
            narrative: narrative.to_string(),
        }
    }

    pub fn contains(&self, total: i32) -> bool {
        total >= self.min && total <= self.max
    }
}

/// A follow-up field captured outside the main answer sequence, read
/// only at scoring time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FollowUpValue {
    Flag(bool),
    Choice(String),
}

/// A declarative condition over the answer sequence and follow-up
/// fields. Predicates are configuration data, not code — the whole rule
/// set is evaluated independently and every match fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Predicate {
    /// `answers[question] >= value`. Unanswered questions never match.
    AnswerAtLeast { question: usize, value: i32 },
    /// `answers[question] <= value`. Unanswered questions match, since
    /// the sentinel is below every scale.
    AnswerAtMost { question: usize, value: i32 },
    /// The named follow-up flag was set to true.
    FollowUpFlag { name: String },
    /// The named follow-up choice equals `value`.
    FollowUpChoice { name: String, value: String },
    AllOf { of: Vec<Predicate> },
    AnyOf { of: Vec<Predicate> },
}

impl Predicate {
    pub fn eval(&self, answers: &[i32], follow_ups: &BTreeMap<String, FollowUpValue>) -> bool {
        match self {
            Self::AnswerAtLeast { question, value } => {
                answers.get(*question).is_some_and(|a| *a >= *value)
            }
            Self::AnswerAtMost { question, value } => {
                answers.get(*question).is_some_and(|a| *a <= *value)
            }
            Self::FollowUpFlag { name } => {
                matches!(follow_ups.get(name), Some(FollowUpValue::Flag(true)))
            }
            Self::FollowUpChoice { name, value } => {
                matches!(follow_ups.get(name), Some(FollowUpValue::Choice(v)) if v == value)
            }
            Self::AllOf { of } => of.iter().all(|p| p.eval(answers, follow_ups)),
            Self::AnyOf { of } => of.iter().any(|p| p.eval(answers, follow_ups)),
        }
    }

    /// Every question index this predicate references, for load-time
    /// validation against the definition's question count.
    pub fn question_indices(&self) -> Vec<usize> {
        match self {
            Self::AnswerAtLeast { question, .. } | Self::AnswerAtMost { question, .. } => {
                vec![*question]
            }
            Self::FollowUpFlag { .. } | Self::FollowUpChoice { .. } => Vec::new(),
            Self::AllOf { of } | Self::AnyOf { of } => {
                of.iter().flat_map(Predicate::question_indices).collect()
            }
        }
    }
}

/// A conditional guidance card: when the predicate holds, the card is
/// appended to the result, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationRule {
    pub when: Predicate,
    pub card: RecommendationCard,
}

/// A named boolean derived from a predicate and attached to the result
/// (e.g. `hasWithdrawalRisk`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FlagRule {
    pub name: String,
    pub when: Predicate,
}

/// The complete configuration of one assessment: questions, scales,
/// severity banding, and rules. Pure data — the engine interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDefinition {
    /// Stable identifier, e.g. `"adhd"`. Carried through the result as
    /// `assessmentType`.
    pub id: String,
    /// Display name, e.g. `"ADHD Self-Assessment"`.
    pub name: String,
    pub questions: Vec<Question>,
    pub default_scale: ResponseScale,
    pub bands: Vec<SeverityBand>,
    pub rules: Vec<RecommendationRule>,
    pub flags: Vec<FlagRule>,
}

impl AssessmentDefinition {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The scale in effect for a question: its override, or the
    /// assessment default.
    pub fn scale_for(&self, index: usize) -> Option<&ResponseScale> {
        self.questions
            .get(index)
            .map(|q| q.scale.as_ref().unwrap_or(&self.default_scale))
    }

    /// Highest reachable total: the sum of each question's maximum
    /// scale value.
    pub fn max_score(&self) -> i32 {
        self.questions
            .iter()
            .map(|q| q.scale.as_ref().unwrap_or(&self.default_scale).max())
            .sum()
    }

    pub fn band_for(&self, total: i32) -> Option<&SeverityBand> {
        self.bands.iter().find(|b| b.contains(total))
    }

    /// Check the definition's internal consistency. Returns every
    /// violation found; an empty vec means the definition is sound.
    ///
    /// Bands must partition `[0, max_score]` exactly — a gap here is
    /// what makes `score()` fail at runtime, so it is caught per
    /// definition in tests instead.
    pub fn validate(&self) -> Vec<DefinitionError> {
        let mut errors = Vec::new();
        let count = self.questions.len();

        if count == 0 {
            errors.push(DefinitionError::NoQuestions {
                assessment: self.id.clone(),
            });
        }

        for index in 0..count {
            let Some(scale) = self.scale_for(index) else {
                continue;
            };
            if scale.options.is_empty() {
                errors.push(DefinitionError::EmptyScale {
                    assessment: self.id.clone(),
                    index,
                });
            } else if scale
                .options
                .iter()
                .enumerate()
                .any(|(i, o)| o.value != i as i32)
            {
                errors.push(DefinitionError::MalformedScale {
                    assessment: self.id.clone(),
                    index,
                });
            }
        }

        let max_score = self.max_score();
        for band in &self.bands {
            if band.min > band.max {
                errors.push(DefinitionError::InvertedBand {
                    assessment: self.id.clone(),
                    label: band.label.clone(),
                    min: band.min,
                    max: band.max,
                });
            }
            if band.min < 0 || band.max > max_score {
                errors.push(DefinitionError::BandOutOfRange {
                    assessment: self.id.clone(),
                    label: band.label.clone(),
                    min: band.min,
                    max: band.max,
                    max_score,
                });
            }
        }
        for total in 0..=max_score {
            match self.bands.iter().filter(|b| b.contains(total)).count() {
                0 => errors.push(DefinitionError::BandGap {
                    assessment: self.id.clone(),
                    total,
                }),
                1 => {}
                _ => errors.push(DefinitionError::BandOverlap {
                    assessment: self.id.clone(),
                    total,
                }),
            }
        }

        for rule in &self.rules {
            for index in rule.when.question_indices() {
                if index >= count {
                    errors.push(DefinitionError::RuleIndexOutOfRange {
                        assessment: self.id.clone(),
                        card: rule.card.title.clone(),
                        index,
                        count,
                    });
                }
            }
        }
        for flag in &self.flags {
            for index in flag.when.question_indices() {
                if index >= count {
                    errors.push(DefinitionError::FlagIndexOutOfRange {
                        assessment: self.id.clone(),
                        flag: flag.name.clone(),
                        index,
                        count,
                    });
                }
            }
        }

        let mut seen = BTreeSet::new();
        for flag in &self.flags {
            if !seen.insert(flag.name.as_str()) {
                errors.push(DefinitionError::DuplicateFlag {
                    assessment: self.id.clone(),
                    name: flag.name.clone(),
                });
            }
        }

        errors
    }
}

/// A consistency violation inside an assessment definition. These are
/// authoring bugs, surfaced at load/test time rather than at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("{assessment}: no questions declared")]
    NoQuestions { assessment: String },

    #[error("{assessment}: scale for question {index} has no options")]
    EmptyScale { assessment: String, index: usize },

    #[error("{assessment}: scale for question {index} must ascend from 0 in steps of 1")]
    MalformedScale { assessment: String, index: usize },

    #[error("{assessment}: band '{label}' has min {min} > max {max}")]
    InvertedBand {
        assessment: String,
        label: String,
        min: i32,
        max: i32,
    },

    #[error("{assessment}: band '{label}' [{min}, {max}] exceeds [0, {max_score}]")]
    BandOutOfRange {
        assessment: String,
        label: String,
        min: i32,
        max: i32,
        max_score: i32,
    },

    #[error("{assessment}: severity bands do not cover total {total}")]
    BandGap { assessment: String, total: i32 },

    #[error("{assessment}: total {total} is covered by more than one band")]
    BandOverlap { assessment: String, total: i32 },

    #[error("{assessment}: rule '{card}' references question {index}, but there are {count} questions")]
    RuleIndexOutOfRange {
        assessment: String,
        card: String,
        index: usize,
        count: usize,
    },

    #[error("{assessment}: flag '{flag}' references question {index}, but there are {count} questions")]
    FlagIndexOutOfRange {
        assessment: String,
        flag: String,
        index: usize,
        count: usize,
    },

    #[error("{assessment}: duplicate flag name '{name}'")]
    DuplicateFlag { assessment: String, name: String },
}
