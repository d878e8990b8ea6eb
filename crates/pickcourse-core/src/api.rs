//! Client for the remote review collection API.
//!
//! A review is sent as a single `POST {base}/avis` with a JSON body. Only
//! status 200 counts as accepted; there are no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::BotConfig;
use crate::form::ReviewSubmission;

/// Errors returned by the review API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-200 status.
    #[error("Review API rejected the submission ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The API could not be reached (timeout, DNS, refused connection).
    #[error("Review API unreachable: {0}")]
    Unreachable(String),

    /// The HTTP client could not be built (TLS backend, invalid settings).
    #[error("Failed to build review API client: {0}")]
    ClientBuild(String),
}

/// Anything able to accept a validated review.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Send one review. Called at most once per form submission.
    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), ApiError>;
}

/// HTTP implementation backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpReviewApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpReviewApi {
    /// Create a client for the endpoint and timeout in `config`.
    pub fn new(config: &BotConfig) -> Result<Self, ApiError> {
        Self::with_endpoint(config.review_endpoint(), config.request_timeout)
    }

    /// Create a client for an explicit endpoint URL.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The URL reviews are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReviewApi for HttpReviewApi {
    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), ApiError> {
        debug!(endpoint = %self.endpoint, course = %submission.course_code, "Posting review");

        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Review API request failed");
                ApiError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read review API error body");
            String::new()
        });

        Err(ApiError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
