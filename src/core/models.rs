// src/core/models.rs

use serde::{Deserialize, Serialize};

use crate::core::analyzer::AnalysisError;

// --- Request ---

/// The body sent to the analysis endpoint: `{"text": "..."}`.
///
/// The only way to build one is [`AnalysisRequest::from_raw`], so the
/// text is always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    text: String,
}

impl AnalysisRequest {
    /// Trims `raw` and wraps it, or returns `None` when nothing is left.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            None
        } else {
            Some(Self { text: text.to_string() })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A request tagged with the id of the submission that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: u64,
    pub request: AnalysisRequest,
}

/// The outcome of a submission, addressed back to it by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub id: u64,
    pub outcome: Result<AnalysisResult, AnalysisError>,
}

// --- Response ---

/// A successful analysis as returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub sentiment: String,
    pub score: f64,
}

impl AnalysisResult {
    /// Label as shown on screen. Labels are always displayed uppercased.
    pub fn display_label(&self) -> String {
        self.sentiment.trim().to_uppercase()
    }

    /// `score * 100` with one decimal place, e.g. `0.87` -> `"87.0%"`.
    pub fn formatted_score(&self) -> String {
        format!("{:.1}%", self.score * 100.0)
    }

    /// Score as a whole percentage clamped to `0..=100`, for the gauge.
    pub fn gauge_percent(&self) -> u16 {
        let percent = (self.score * 100.0).round();
        if percent.is_nan() {
            0
        } else {
            percent.clamp(0.0, 100.0) as u16
        }
    }
}

/// The raw JSON body of a 2xx response. Every field is optional because
/// the success and error shapes share one endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireResponse {
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the service actually said, decoded from a [`WireResponse`].
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceReply {
    Ok(AnalysisResult),
    ServiceErr { message: String },
}

impl WireResponse {
    /// A non-empty `error` wins over any other field. Without one, both
    /// `sentiment` and `score` must be present.
    pub fn into_reply(self) -> Result<ServiceReply, AnalysisError> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Ok(ServiceReply::ServiceErr { message });
        }
        match (self.sentiment, self.score) {
            (Some(sentiment), Some(score)) => Ok(ServiceReply::Ok(AnalysisResult { sentiment, score })),
            (None, _) => Err(AnalysisError::Decode("missing field `sentiment`".to_string())),
            (_, None) => Err(AnalysisError::Decode("missing field `score`".to_string())),
        }
    }
}

impl ServiceReply {
    pub fn into_result(self) -> Result<AnalysisResult, AnalysisError> {
        match self {
            ServiceReply::Ok(result) => Ok(result),
            ServiceReply::ServiceErr { message } => Err(AnalysisError::Service(message)),
        }
    }
}
