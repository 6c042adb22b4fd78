// src/ui/widgets/mod.rs

pub mod footer;      // State-dependent key hints.
pub mod input;       // The text box the user types into.
pub mod result_view; // Sentiment label, spinner or error message.
pub mod score;       // Score gauge, only filled in the Result state.
