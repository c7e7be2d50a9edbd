//! REST path conventions for the persistence backend.
//!
//! Pure string functions — no HTTP dependency. These define the
//! canonical layout of the backend's row resources.

use uuid::Uuid;

pub const SESSIONS: &str = "rest/assessment_sessions";

pub const CONTACTS: &str = "rest/assessment_contacts";

pub fn session(id: Uuid) -> String {
    format!("{SESSIONS}/{id}")
}

pub fn contact(assessment_session_id: Uuid) -> String {
    format!("{CONTACTS}/{assessment_session_id}")
}
