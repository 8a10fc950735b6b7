//! Prompt construction for the two input variants.
//!
//! A request may carry a base64 food photo, a free-text ingredient list,
//! or both. Exactly one prompt variant is built per request; the photo
//! wins when both inputs are present.

use crate::GenerateRequest;

const PHOTO_SYSTEM: &str = "You are a professional chef AI that analyzes food photos and \
creates realistic recipes. Look carefully at the actual visible ingredients, dishes, or \
prepared foods in the image. Create recipes that ONLY use ingredients that are clearly \
visible in the photo. If you see cooked food, create variations or similar dishes. Be \
specific about what you actually see.";

const INGREDIENTS_SYSTEM: &str = "You are a professional chef AI that creates realistic \
recipes from a list of ingredients. Use ONLY the ingredients the user supplies, plus \
common pantry staples (salt, pepper, oil). Be practical and specific.";

const OUTPUT_SHAPE: &str = r#"Return response as JSON object with "recipes" array:
{
  "recipes": [
    {
      "title": "Specific recipe name",
      "difficulty": "Easy|Medium|Hard",
      "prepTime": "XX minutes",
      "cookTime": "XX minutes",
      "servings": number,
      "ingredients": ["ingredient list"],
      "instructions": ["detailed cooking steps"]
    }
  ]
}"#;

/// A fully constructed prompt, ready to send upstream.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// System instruction framing the model as a chef.
    pub system: String,
    /// The user-message text block.
    pub user_text: String,
    /// Inline image reference, present only for the photo variant.
    pub image_data_uri: Option<String>,
}

impl Prompt {
    /// Builds the prompt variant for a request, or `None` when neither
    /// an image nor ingredients were supplied.
    pub fn build(request: &GenerateRequest) -> Option<Prompt> {
        if let Some(image) = non_empty(request.image.as_deref()) {
            return Some(Prompt::for_photo(image));
        }
        if let Some(ingredients) = non_empty(request.ingredients.as_deref()) {
            return Some(Prompt::for_ingredients(ingredients));
        }
        None
    }

    fn for_photo(base64_image: &str) -> Prompt {
        let user_text = format!(
            "Analyze this food photo carefully and create 3 recipes based on EXACTLY \
what you see:\n\
1. Look at the actual visible ingredients, prepared foods, or dishes\n\
2. Only use ingredients that are clearly visible in the image\n\
3. If you see a cooked dish, create recipes for similar dishes\n\
4. Create 3 different difficulty levels: Easy, Medium, Hard\n\n{OUTPUT_SHAPE}"
        );

        Prompt {
            system: PHOTO_SYSTEM.to_string(),
            user_text,
            image_data_uri: Some(format!("data:image/jpeg;base64,{base64_image}")),
        }
    }

    fn for_ingredients(ingredients: &str) -> Prompt {
        let user_text = format!(
            "Create 3 recipes strictly from these ingredients: {ingredients}\n\
You may assume common pantry staples (salt, pepper, oil) are available.\n\
Create 3 different difficulty levels: Easy, Medium, Hard\n\n{OUTPUT_SHAPE}"
        );

        Prompt {
            system: INGREDIENTS_SYSTEM.to_string(),
            user_text,
            image_data_uri: None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_variant_wraps_image_in_data_uri() {
        let request = GenerateRequest {
            image: Some("aGVsbG8=".into()),
            ingredients: None,
        };
        let prompt = Prompt::build(&request).unwrap();
        assert_eq!(
            prompt.image_data_uri.as_deref(),
            Some("data:image/jpeg;base64,aGVsbG8=")
        );
        assert!(prompt.user_text.contains("Easy, Medium, Hard"));
        assert!(prompt.user_text.contains("\"recipes\""));
    }

    #[test]
    fn ingredients_variant_embeds_the_list() {
        let request = GenerateRequest {
            image: None,
            ingredients: Some("eggs, flour, milk".into()),
        };
        let prompt = Prompt::build(&request).unwrap();
        assert!(prompt.image_data_uri.is_none());
        assert!(prompt.user_text.contains("eggs, flour, milk"));
        assert!(prompt.system.contains("pantry staples"));
    }

    #[test]
    fn image_takes_precedence_over_ingredients() {
        let request = GenerateRequest {
            image: Some("aGVsbG8=".into()),
            ingredients: Some("eggs".into()),
        };
        let prompt = Prompt::build(&request).unwrap();
        assert!(prompt.image_data_uri.is_some());
        assert!(!prompt.user_text.contains("eggs"));
    }

    #[test]
    fn no_input_builds_nothing() {
        assert!(Prompt::build(&GenerateRequest::default()).is_none());
    }

    #[test]
    fn whitespace_only_input_counts_as_absent() {
        let request = GenerateRequest {
            image: Some("   ".into()),
            ingredients: Some("".into()),
        };
        assert!(Prompt::build(&request).is_none());
    }
}
