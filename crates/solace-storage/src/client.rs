use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::info;
use uuid::Uuid;

use solace_core::models::contact::AssessmentContactRecord;
use solace_core::models::session::AssessmentSessionRecord;

use crate::error::StorageError;
use crate::paths;

/// Client for the assessment/contact persistence backend.
#[derive(Debug, Clone)]
pub struct SessionStoreClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SessionStoreClient {
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{path}", self.base_url);
        let mut req = self.client.request(method, url);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    /// Store a completed assessment session.
    pub async fn put_session(&self, record: &AssessmentSessionRecord) -> Result<(), StorageError> {
        let response = self
            .request(reqwest::Method::POST, paths::SESSIONS)
            .json(record)
            .send()
            .await?;
        check_status(response, None).await?;

        info!(
            session_id = %record.session_id,
            assessment_type = %record.assessment_type,
            "assessment session stored"
        );

        Ok(())
    }

    /// Fetch one session row by id.
    pub async fn get_session(&self, id: Uuid) -> Result<AssessmentSessionRecord, StorageError> {
        let response = self
            .request(reqwest::Method::GET, &paths::session(id))
            .send()
            .await?;
        let response = check_status(response, Some(id)).await?;
        decode(response).await
    }

    /// List session rows, optionally filtered to one assessment type.
    pub async fn list_sessions(
        &self,
        assessment_type: Option<&str>,
    ) -> Result<Vec<AssessmentSessionRecord>, StorageError> {
        let mut req = self.request(reqwest::Method::GET, paths::SESSIONS);
        if let Some(t) = assessment_type {
            req = req.query(&[("assessment_type", t)]);
        }
        let response = check_status(req.send().await?, None).await?;
        decode(response).await
    }

    /// Store a contact request linked to a session.
    pub async fn put_contact(&self, record: &AssessmentContactRecord) -> Result<(), StorageError> {
        let response = self
            .request(reqwest::Method::POST, paths::CONTACTS)
            .json(record)
            .send()
            .await?;
        check_status(response, None).await?;

        info!(
            assessment_session_id = %record.assessment_session_id,
            "assessment contact stored"
        );

        Ok(())
    }

    /// Contact requests practice staff have not handled yet.
    pub async fn list_unprocessed_contacts(
        &self,
    ) -> Result<Vec<AssessmentContactRecord>, StorageError> {
        let response = self
            .request(reqwest::Method::GET, paths::CONTACTS)
            .query(&[("is_processed", "false")])
            .send()
            .await?;
        let response = check_status(response, None).await?;
        decode(response).await
    }

    /// Mark a contact request handled.
    pub async fn mark_contact_processed(
        &self,
        assessment_session_id: Uuid,
    ) -> Result<(), StorageError> {
        let response = self
            .request(reqwest::Method::PATCH, &paths::contact(assessment_session_id))
            .json(&serde_json::json!({ "is_processed": true }))
            .send()
            .await?;
        check_status(response, Some(assessment_session_id)).await?;

        info!(%assessment_session_id, "assessment contact marked processed");

        Ok(())
    }
}

/// Map a non-success status to a typed error. A 404 on a row addressed
/// by id becomes `NotFound`; everything else keeps the backend's body.
async fn check_status(
    response: reqwest::Response,
    id: Option<Uuid>,
) -> Result<reqwest::Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND
        && let Some(id) = id
    {
        return Err(StorageError::NotFound { id });
    }
    let message = response.text().await.unwrap_or_default();
    Err(StorageError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StorageError> {
    response
        .json()
        .await
        .map_err(|e| StorageError::Decode(e.to_string()))
}
