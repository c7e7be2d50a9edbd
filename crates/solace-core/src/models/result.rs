use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Category tag on a recommendation card. The results page styles cards
/// by kind (safety banners first, then clinical/strategy guidance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CardKind {
    /// Immediate-safety guidance (crisis lines, no-driving warnings).
    Safety,
    /// Prompt professional evaluation is indicated.
    Urgent,
    /// Self-management technique or workflow.
    Strategy,
    /// Context that reframes the score (duration notes, differentials).
    Insight,
    /// Pointer to a specific treatment modality or specialist.
    Referral,
}

/// One conditional guidance card attached to an assessment result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationCard {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub title: String,
    pub content: String,
}

/// The immutable outcome of a completed assessment.
///
/// Created exactly once by the engine's `score()` and handed by value to
/// the results page; the answer state it was computed from is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    pub assessment_type: String,
    pub score: i32,
    pub severity: String,
    pub result_text: String,
    pub add_ons: Vec<RecommendationCard>,
    pub max_score: i32,
    /// Assessment-specific booleans (e.g. `hasWithdrawalRisk`). Every
    /// flag the definition declares is present, true or false.
    pub flags: BTreeMap<String, bool>,
}

impl AssessmentResult {
    /// Serialize into the shape the results page reads from navigation
    /// state: `flags` entries are flattened to top level alongside
    /// `assessmentType`, `score`, `severity`, `resultText`, `addOns`,
    /// and `maxScore`.
    pub fn navigation_state(&self) -> Result<serde_json::Value, CoreError> {
        let mut state = serde_json::to_value(self)?;
        if let Some(obj) = state.as_object_mut()
            && let Some(serde_json::Value::Object(flags)) = obj.remove("flags")
        {
            for (name, value) in flags {
                obj.insert(name, value);
            }
        }
        Ok(state)
    }
}
