use std::collections::BTreeMap;

use solace_core::models::result::AssessmentResult;

use crate::error::AssessmentError;
use crate::scoring::{AssessmentDefinition, FollowUpValue, Question, UNANSWERED};

/// Interprets one [`AssessmentDefinition`] for one visitor session.
///
/// Holds the current-question pointer, the answer sequence, and any
/// follow-up fields. All state lives in memory for the duration of one
/// assessment and is discarded after [`score`](Self::score).
#[derive(Debug, Clone)]
pub struct AssessmentEngine<'a> {
    definition: &'a AssessmentDefinition,
    current: usize,
    answers: Vec<i32>,
    follow_ups: BTreeMap<String, FollowUpValue>,
}

impl<'a> AssessmentEngine<'a> {
    pub fn new(definition: &'a AssessmentDefinition) -> Self {
        Self {
            definition,
            current: 0,
            answers: vec![UNANSWERED; definition.question_count()],
            follow_ups: BTreeMap::new(),
        }
    }

    pub fn definition(&self) -> &AssessmentDefinition {
        self.definition
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.definition.questions.get(self.current)
    }

    pub fn answers(&self) -> &[i32] {
        &self.answers
    }

    pub fn follow_ups(&self) -> &BTreeMap<String, FollowUpValue> {
        &self.follow_ups
    }

    /// Record an answer. Rejects an out-of-range index or a value that is
    /// not on the resolved scale for that question — invalid input is
    /// never stored. Re-selecting the same value is a no-op in effect.
    pub fn select_answer(&mut self, index: usize, value: i32) -> Result<(), AssessmentError> {
        let Some(scale) = self.definition.scale_for(index) else {
            return Err(AssessmentError::QuestionOutOfRange {
                assessment: self.definition.id.clone(),
                index,
                count: self.definition.question_count(),
            });
        };
        if !scale.contains(value) {
            return Err(AssessmentError::AnswerOutOfRange {
                assessment: self.definition.id.clone(),
                index,
                value,
            });
        }
        self.answers[index] = value;
        Ok(())
    }

    /// Move to the next question, clamped at the last one.
    pub fn advance(&mut self) {
        let last = self.definition.question_count().saturating_sub(1);
        self.current = (self.current + 1).min(last);
    }

    /// Move to the previous question, clamped at the first one.
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// The hosting flow's forward-navigation guard: the current question
    /// has an answer.
    pub fn can_advance(&self) -> bool {
        self.answers
            .get(self.current)
            .is_some_and(|a| *a != UNANSWERED)
    }

    pub fn is_last_question(&self) -> bool {
        self.definition.question_count() > 0
            && self.current == self.definition.question_count() - 1
    }

    pub fn set_follow_up(&mut self, name: &str, value: FollowUpValue) {
        self.follow_ups.insert(name.to_string(), value);
    }

    /// Question indices still holding the unanswered sentinel. Scoring
    /// does not require this to be empty; hosts that want completeness
    /// enforce it here.
    pub fn unanswered_indices(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| **a == UNANSWERED)
            .map(|(i, _)| i)
            .collect()
    }

    /// Current running total. Unanswered entries contribute zero — the
    /// clamp keeps the sentinel out of the sum.
    pub fn total(&self) -> i32 {
        self.answers.iter().map(|a| (*a).max(0)).sum()
    }

    /// Compute the immutable result: total, severity band, every
    /// matching recommendation card in declaration order, and every
    /// declared flag with its evaluated value.
    ///
    /// Fails only if the total lands outside every declared band, which
    /// is a definition bug (see `AssessmentDefinition::validate`) —
    /// never silently defaulted.
    pub fn score(&self) -> Result<AssessmentResult, AssessmentError> {
        let total = self.total();
        let band =
            self.definition
                .band_for(total)
                .ok_or_else(|| AssessmentError::BandNotFound {
                    assessment: self.definition.id.clone(),
                    total,
                })?;

        let add_ons = self
            .definition
            .rules
            .iter()
            .filter(|r| r.when.eval(&self.answers, &self.follow_ups))
            .map(|r| r.card.clone())
            .collect();

        let flags = self
            .definition
            .flags
            .iter()
            .map(|f| (f.name.clone(), f.when.eval(&self.answers, &self.follow_ups)))
            .collect();

        Ok(AssessmentResult {
            assessment_type: self.definition.id.clone(),
            score: total,
            severity: band.label.clone(),
            result_text: band.narrative.clone(),
            add_ons,
            max_score: self.definition.max_score(),
            flags,
        })
    }
}
