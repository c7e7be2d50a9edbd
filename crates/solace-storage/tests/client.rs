use std::collections::BTreeMap;
use std::time::Duration;

use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use solace_core::models::contact::AssessmentContactRecord;
use solace_core::models::result::{CardKind, RecommendationCard};
use solace_core::models::session::AssessmentSessionRecord;
use solace_storage::client::SessionStoreClient;
use solace_storage::error::StorageError;

fn client(server: &MockServer) -> SessionStoreClient {
    SessionStoreClient::new(&server.uri(), Some("test-key"), Duration::from_secs(5)).unwrap()
}

fn sample_session(id: Uuid) -> AssessmentSessionRecord {
    AssessmentSessionRecord {
        session_id: id,
        assessment_type: "adhd".to_string(),
        answers: BTreeMap::from([(0, 2), (2, 2)]),
        score: 13,
        severity: "Moderate".to_string(),
        recommendations: vec![RecommendationCard {
            kind: CardKind::Strategy,
            title: "Try a two-container workflow".to_string(),
            content: "Keep exactly two lists.".to_string(),
        }],
        additional_info: serde_json::json!({}),
        completed_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[tokio::test]
async fn put_session_posts_the_row_with_auth() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/rest/assessment_sessions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "assessment_type": "adhd",
            "score": 13,
            "severity": "Moderate"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .put_session(&sample_session(id))
        .await
        .unwrap();
}

#[tokio::test]
async fn get_session_round_trips_the_row() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    let stored = sample_session(id);
    Mock::given(method("GET"))
        .and(path(format!("/rest/assessment_sessions/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::to_value(&stored).unwrap()),
        )
        .mount(&server)
        .await;

    let fetched = client(&server).get_session(id).await.unwrap();
    assert_eq!(fetched.session_id, id);
    assert_eq!(fetched.assessment_type, "adhd");
    assert_eq!(fetched.answers.get(&2), Some(&2));
    assert_eq!(fetched.recommendations.len(), 1);
}

#[tokio::test]
async fn get_session_maps_404_to_not_found() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/rest/assessment_sessions/{id}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server).get_session(id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { id: missing } if missing == id));
}

#[tokio::test]
async fn list_sessions_filters_by_assessment_type() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path("/rest/assessment_sessions"))
        .and(query_param("assessment_type", "adhd"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([sample_session(id)])),
        )
        .mount(&server)
        .await;

    let rows = client(&server).list_sessions(Some("adhd")).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].session_id, id);
}

#[tokio::test]
async fn unprocessed_contacts_are_listed_and_marked() {
    let server = MockServer::start().await;
    let session_id = Uuid::new_v4();
    let contact = AssessmentContactRecord {
        assessment_session_id: session_id,
        contact_data: serde_json::json!({ "name": "A.", "phone": "555-0100" }),
        is_processed: false,
        created_at: jiff::Timestamp::UNIX_EPOCH,
    };

    Mock::given(method("GET"))
        .and(path("/rest/assessment_contacts"))
        .and(query_param("is_processed", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([contact])))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(format!("/rest/assessment_contacts/{session_id}")))
        .and(body_partial_json(serde_json::json!({ "is_processed": true })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let store = client(&server);
    let pending = store.list_unprocessed_contacts().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert!(!pending[0].is_processed);

    store
        .mark_contact_processed(pending[0].assessment_session_id)
        .await
        .unwrap();
}

#[tokio::test]
async fn backend_errors_keep_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/assessment_sessions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client(&server).list_sessions(None).await.unwrap_err();
    match err {
        StorageError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
