use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::result::{AssessmentResult, RecommendationCard};

/// A completed assessment session as stored by the persistence backend
/// and read back by the admin results viewer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSessionRecord {
    pub session_id: Uuid,
    pub assessment_type: String,
    /// Question index → selected answer value. Unanswered questions are
    /// absent rather than stored as the sentinel.
    pub answers: BTreeMap<usize, i32>,
    pub score: i32,
    pub severity: String,
    pub recommendations: Vec<RecommendationCard>,
    /// Follow-up fields and other per-assessment extras, as captured.
    #[serde(default)]
    pub additional_info: serde_json::Value,
    pub completed_at: jiff::Timestamp,
}

impl AssessmentSessionRecord {
    /// Build the persisted row from a scored result and the raw answer
    /// sequence it was computed from.
    pub fn from_result(
        session_id: Uuid,
        result: &AssessmentResult,
        answers: &[i32],
        additional_info: serde_json::Value,
        completed_at: jiff::Timestamp,
    ) -> Self {
        let answers = answers
            .iter()
            .enumerate()
            .filter(|(_, v)| **v >= 0)
            .map(|(i, v)| (i, *v))
            .collect();

        Self {
            session_id,
            assessment_type: result.assessment_type.clone(),
            answers,
            score: result.score,
            severity: result.severity.clone(),
            recommendations: result.add_ons.clone(),
            additional_info,
            completed_at,
        }
    }
}
