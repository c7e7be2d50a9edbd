use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A contact request submitted from an assessment results page, linked
/// to the session it came from. `is_processed` is flipped by practice
/// staff in the admin viewer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentContactRecord {
    pub assessment_session_id: Uuid,
    pub contact_data: serde_json::Value,
    pub is_processed: bool,
    pub created_at: jiff::Timestamp,
}
