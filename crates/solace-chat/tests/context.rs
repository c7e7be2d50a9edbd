use solace_chat::context::{page_context, PageKind};

#[test]
fn home_route_has_chat_and_no_topic() {
    let ctx = page_context("/");
    assert_eq!(ctx.page_kind, PageKind::Home);
    assert_eq!(ctx.topic, None);
    assert!(ctx.chat_enabled);
}

#[test]
fn condition_pages_carry_their_slug_as_topic() {
    let ctx = page_context("/conditions/adhd");
    assert_eq!(ctx.page_kind, PageKind::Condition);
    assert_eq!(ctx.topic.as_deref(), Some("adhd"));
    assert!(ctx.chat_enabled);
}

#[test]
fn assessment_routes_resolve_with_and_without_a_slug() {
    let ctx = page_context("/assessments/ptsd");
    assert_eq!(ctx.page_kind, PageKind::Assessment);
    assert_eq!(ctx.topic.as_deref(), Some("ptsd"));

    let ctx = page_context("/assessments");
    assert_eq!(ctx.page_kind, PageKind::Assessment);
    assert_eq!(ctx.topic, None);
}

#[test]
fn insurance_blog_and_location_pages_resolve() {
    assert_eq!(
        page_context("/insurance/aetna").page_kind,
        PageKind::Insurance
    );
    assert_eq!(
        page_context("/blog/managing-worry").topic.as_deref(),
        Some("managing-worry")
    );
    let ctx = page_context("/locations/bellevue");
    assert_eq!(ctx.page_kind, PageKind::Location);
    assert_eq!(ctx.topic.as_deref(), Some("bellevue"));
}

#[test]
fn admin_routes_disable_chat() {
    let ctx = page_context("/admin/assessment-results");
    assert_eq!(ctx.page_kind, PageKind::Admin);
    assert!(!ctx.chat_enabled);
}

#[test]
fn query_strings_fragments_and_trailing_slashes_are_ignored() {
    let ctx = page_context("/conditions/ocd/?utm_source=ad#treatment");
    assert_eq!(ctx.page_kind, PageKind::Condition);
    assert_eq!(ctx.topic.as_deref(), Some("ocd"));
}

#[test]
fn unknown_routes_default_to_other_with_chat_enabled() {
    let ctx = page_context("/careers");
    assert_eq!(ctx.page_kind, PageKind::Other);
    assert_eq!(ctx.topic, None);
    assert!(ctx.chat_enabled);
}
