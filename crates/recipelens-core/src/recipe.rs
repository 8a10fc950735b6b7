//! Recipe payload types and upstream-response validation.

use serde::{Deserialize, Serialize};

use crate::RecipeError;

/// Difficulty level of a recipe out of the requested Easy/Medium/Hard spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single generated recipe.
///
/// Wire names are camelCase (`prepTime`, `cookTime`). Extra fields the
/// model invents are tolerated; the required ones must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub difficulty: Difficulty,
    pub prep_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// The full payload the service returns: `{ "recipes": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCollection {
    pub recipes: Vec<Recipe>,
}

/// Inbound POST body: a base64 JPEG and/or a free-text ingredient list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
}

/// Checks that an upstream completion payload matches the recipe schema.
///
/// The value itself is relayed to the caller verbatim on success; this
/// only rejects payloads that are missing required fields or carry an
/// unknown difficulty, so a non-compliant completion surfaces as
/// [`RecipeError::MalformedCompletion`] instead of being forwarded blindly.
pub fn validate_collection(value: &serde_json::Value) -> Result<(), RecipeError> {
    let _: RecipeCollection = serde_json::from_value(value.clone())?;
    Ok(())
}
