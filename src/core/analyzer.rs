// src/core/analyzer.rs

//! The presentation state machine behind the widget.
//!
//! Every submission walks `Idle | Result | Error -> Loading -> Result | Error`,
//! except blank input, which jumps straight to `Error` without ever
//! touching the network.

use strum::IntoStaticStr;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::models::{AnalysisRequest, AnalysisResult, Completion, Submission};

/// Everything that can end a submission without a result.
///
/// `Display` is the message shown to the user. Technical details carried
/// by the transport variants are only written to the log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Por favor ingresa algún texto para analizar")]
    EmptyInput,
    #[error("Error al conectar con el servidor")]
    Connect(String),
    #[error("Error en la respuesta del servidor")]
    Status(u16),
    #[error("Error en la respuesta del servidor")]
    Decode(String),
    #[error("{0}")]
    Service(String),
}

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum WidgetState {
    Idle,
    Loading,
    Result(AnalysisResult),
    Error(String),
}

#[derive(Debug)]
pub struct Analyzer {
    state: WidgetState,
    next_id: u64,
    in_flight: Option<u64>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self { state: WidgetState::Idle, next_id: 1, in_flight: None }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, WidgetState::Loading)
    }

    /// Validates `raw` and moves to `Loading` (returning the submission to
    /// send) or to `Error` (returning `None`).
    ///
    /// Returns `None` without changing anything while a request is already
    /// in flight.
    pub fn begin(&mut self, raw: &str) -> Option<Submission> {
        if self.is_loading() {
            debug!("Submission ignored while loading.");
            return None;
        }

        let Some(request) = AnalysisRequest::from_raw(raw) else {
            info!("Rejected blank input.");
            self.transition(WidgetState::Error(AnalysisError::EmptyInput.to_string()));
            return None;
        };

        let id = self.next_id;
        self.next_id += 1;
        self.in_flight = Some(id);
        info!(id, chars = request.text().chars().count(), "Submitting text for analysis.");
        self.transition(WidgetState::Loading);
        Some(Submission { id, request })
    }

    /// Applies the outcome of submission `id`. Replies for any other id are
    /// dropped.
    pub fn complete(&mut self, Completion { id, outcome }: Completion) {
        if self.in_flight != Some(id) {
            warn!(id, in_flight = ?self.in_flight, "Dropping reply for a stale submission.");
            return;
        }
        self.in_flight = None;

        let next = match outcome {
            Ok(result) => {
                info!(id, sentiment = %result.sentiment, score = result.score, "Analysis succeeded.");
                WidgetState::Result(result)
            }
            Err(error) => {
                warn!(id, error = ?error, "Analysis failed.");
                WidgetState::Error(error.to_string())
            }
        };
        self.transition(next);
    }

    /// Runs one whole submission in place: validate, call, apply.
    ///
    /// The event loop cannot hold `&mut self` across the call, so it runs
    /// the same three steps with the call on a spawned task.
    #[cfg(test)]
    pub async fn submit<S: crate::core::client::SentimentService>(&mut self, service: &S, raw: &str) {
        let Some(submission) = self.begin(raw) else {
            return;
        };
        let completion = crate::core::client::dispatch(service, submission).await;
        self.complete(completion);
    }

    fn transition(&mut self, next: WidgetState) {
        let from: &'static str = (&self.state).into();
        let to: &'static str = (&next).into();
        debug!(from, to, "State transition.");
        self.state = next;
    }
}
