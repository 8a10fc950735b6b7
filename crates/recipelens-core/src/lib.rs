//! Core domain types and error definitions for recipelens.
//!
//! This crate provides the types shared across the recipelens service:
//!
//! - [`RecipeError`] — Error type for completion and parsing failures
//! - [`Recipe`] and [`RecipeCollection`] — The recipe payload shape
//! - [`GenerateRequest`] — The inbound request body
//! - [`Prompt`] — A constructed prompt variant ready for the LLM

use thiserror::Error;

pub mod prompt;
pub mod recipe;

pub use prompt::Prompt;
pub use recipe::{validate_collection, Difficulty, GenerateRequest, Recipe, RecipeCollection};

/// Errors that can occur while generating recipes through the upstream
/// completion API.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The upstream request failed: network error, timeout, non-success
    /// status, or a response missing its completion content.
    #[error("upstream completion failed: {0}")]
    Upstream(String),

    /// The completion content was returned but is not the JSON recipe
    /// payload that was requested.
    #[error("malformed completion payload: {0}")]
    MalformedCompletion(String),
}

impl From<serde_json::Error> for RecipeError {
    fn from(err: serde_json::Error) -> Self {
        RecipeError::MalformedCompletion(err.to_string())
    }
}
