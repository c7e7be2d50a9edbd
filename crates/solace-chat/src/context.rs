//! Page context for the chat widget, derived from the current route.
//!
//! The widget sends this along with session creation so the backend can
//! ground its replies in what the visitor is reading. Computed as a pure
//! function of the route at the point of use — no ambient page state.

use serde::{Deserialize, Serialize};

/// What kind of page the visitor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Condition,
    Assessment,
    Insurance,
    Blog,
    Location,
    Contact,
    Admin,
    Other,
}

/// Context handed to the chat backend at session creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub page_kind: PageKind,
    /// The page's subject slug, when the route carries one (condition
    /// name, assessment id, insurer, city).
    pub topic: Option<String>,
    /// Whether the widget should render at all. Admin surfaces never
    /// show visitor chat.
    pub chat_enabled: bool,
}

/// Derive the chat context from a route path.
///
/// Query strings and fragments are ignored; trailing slashes don't
/// matter. Unknown routes get chat with no topic.
pub fn page_context(route: &str) -> PageContext {
    let path = route
        .split(['?', '#'])
        .next()
        .unwrap_or("")
        .trim_matches('/');
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let (page_kind, topic) = match segments.as_slice() {
        [] => (PageKind::Home, None),
        ["conditions", slug, ..] => (PageKind::Condition, Some(*slug)),
        ["assessments", slug, ..] => (PageKind::Assessment, Some(*slug)),
        ["assessments"] => (PageKind::Assessment, None),
        ["insurance", slug, ..] => (PageKind::Insurance, Some(*slug)),
        ["insurance"] => (PageKind::Insurance, None),
        ["blog", slug, ..] => (PageKind::Blog, Some(*slug)),
        ["blog"] => (PageKind::Blog, None),
        ["locations", slug, ..] => (PageKind::Location, Some(*slug)),
        ["contact", ..] => (PageKind::Contact, None),
        ["admin", ..] => (PageKind::Admin, None),
        _ => (PageKind::Other, None),
    };

    PageContext {
        page_kind,
        topic: topic.map(str::to_string),
        chat_enabled: page_kind != PageKind::Admin,
    }
}
