// src/core/mod.rs

/// Request and response types of the analysis endpoint.
pub mod models;

/// The four-state machine driven by each submission.
pub mod analyzer;

/// The `SentimentService` seam and its HTTP implementation.
pub mod client;

/// Sentiment label to display color lookup.
pub mod palette;
