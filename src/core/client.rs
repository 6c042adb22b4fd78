// src/core/client.rs

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::core::analyzer::AnalysisError;
use crate::core::models::{AnalysisRequest, AnalysisResult, Completion, Submission, WireResponse};

/// Anything that can turn a request into a sentiment.
pub trait SentimentService: Send + Sync + 'static {
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> + Send;
}

/// Performs the network half of a submission and tags the outcome with
/// its id, ready for `Analyzer::complete`.
pub async fn dispatch<S: SentimentService>(service: &S, submission: Submission) -> Completion {
    let outcome = service.analyze(&submission.request).await;
    Completion { id: submission.id, outcome }
}

/// Talks to the remote analysis endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSentimentClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSentimentClient {
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("SentimentRS/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SentimentService for HttpSentimentClient {
    /// Sends one `POST` with `{"text": ...}` and decodes the answer.
    ///
    /// No retries and no timeout: the request runs until the server answers
    /// or the connection fails.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        debug!(url = %self.endpoint, "Sending analysis request.");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.endpoint, error = %e, "Could not reach analysis service.");
                AnalysisError::Connect(e.to_string())
            })?;

        let status = response.status();
        info!(status = %status, "Received analysis response.");
        if !status.is_success() {
            return Err(AnalysisError::Status(status.as_u16()));
        }

        let body: WireResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Analysis response body is not valid JSON.");
            AnalysisError::Decode(e.to_string())
        })?;

        body.into_reply()?.into_result()
    }
}
