use crate::config::AppConfig;
use crate::domain::assessment::AssessmentApi;
use crate::domain::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::domain::journal::JournalEntry;
use crate::domain::models::{AssessmentOutcome, DashboardData};
use crate::domain::mood::{MoodLog, MoodLogDraft};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

#[derive(Debug, Serialize)]
struct SubmitAssessmentRequest<'a> {
    instrument_id: &'a str,
    answers: &'a [u8],
}

/// Typed client for the remote API. Cheap to clone; the underlying connection
/// pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.endpoint("/auth/signup"))
            .json(request)
            .send()
            .await?;
        expect_success(resp).await?;
        tracing::info!(email = %request.email, "signup submitted");
        Ok(())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let resp = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(request)
            .send()
            .await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    pub async fn dashboard_data(&self) -> Result<DashboardData, ApiError> {
        let resp = self.http.get(self.endpoint("/dashboard-data")).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    pub async fn journal_entries(&self, user_id: i64) -> Result<Vec<JournalEntry>, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(&format!("/journal/{user_id}")))
            .send()
            .await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    pub async fn mood_logs(&self, user_id: i64) -> Result<Vec<MoodLog>, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(&format!("/moodlog/{user_id}")))
            .send()
            .await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    pub async fn add_mood_log(&self, draft: &MoodLogDraft) -> Result<MoodLog, ApiError> {
        let resp = self
            .http
            .post(self.endpoint("/moodlog"))
            .json(draft)
            .send()
            .await?;
        Ok(expect_success(resp).await?.json().await?)
    }
}

async fn expect_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        tracing::warn!(%status, url = %resp.url(), "api call rejected");
        Err(ApiError::Status(status))
    }
}

#[async_trait]
impl AssessmentApi for ApiClient {
    /// Single awaited call, no retry; the flow controller decides what a
    /// failure means for the session.
    async fn submit_assessment(
        &self,
        instrument_id: &str,
        answers: &[u8],
    ) -> anyhow::Result<AssessmentOutcome> {
        let resp = self
            .http
            .post(self.endpoint("/assessments"))
            .json(&SubmitAssessmentRequest {
                instrument_id,
                answers,
            })
            .send()
            .await?;
        let outcome = expect_success(resp).await?.json().await?;
        Ok(outcome)
    }
}
