//! OpenAI chat-completions client with multimodal (vision) support.
//!
//! One non-streaming request per call: a system message, a single user
//! message carrying the instruction text plus an optional inline image,
//! strict JSON-object output requested, bounded max tokens.

use recipelens_config::Config;
use recipelens_core::{Prompt, RecipeError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

/// A completed upstream call: the textual payload plus usage metrics.
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub metrics: CompletionMetrics,
}

/// Token usage and latency for one upstream call.
#[derive(Debug, Clone, Default)]
pub struct CompletionMetrics {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub elapsed_ms: u64,
}

/// Client for the chat-completions endpoint.
pub struct CompletionClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl CompletionClient {
    /// Creates a client from service configuration. The configured
    /// timeout bounds the whole outbound call.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    /// Sends one completion request and returns the model's textual payload.
    pub async fn complete(&self, prompt: &Prompt) -> Result<Completion, RecipeError> {
        let start = std::time::Instant::now();

        let mut parts = vec![ContentPart::Text {
            text: prompt.user_text.clone(),
        }];
        if let Some(uri) = &prompt.image_data_uri {
            parts.push(ContentPart::ImageUrl {
                image_url: ImageUrl { url: uri.clone() },
            });
        }

        let request = ChatRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(prompt.system.clone()),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Parts(parts),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecipeError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("completion API error {}: {}", status, body);
            return Err(RecipeError::Upstream(format!(
                "completion API returned {status}"
            )));
        }

        let resp: ChatResponse = response
            .json()
            .await
            .map_err(|e| RecipeError::Upstream(e.to_string()))?;

        let content = resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| RecipeError::Upstream("completion response had no choices".into()))?;

        let usage = resp.usage.unwrap_or(Usage {
            prompt_tokens: None,
            completion_tokens: None,
        });

        Ok(Completion {
            content,
            metrics: CompletionMetrics {
                input_tokens: usage.prompt_tokens.unwrap_or(0),
                output_tokens: usage.completion_tokens.unwrap_or(0),
                elapsed_ms: start.elapsed().as_millis() as u64,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipelens_core::GenerateRequest;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(api_base: &str) -> Config {
        Config {
            api_key: "sk-test-1234".into(),
            model: "gpt-4o-mini".into(),
            api_base: api_base.into(),
            max_tokens: 2000,
            timeout: Duration::from_secs(5),
            bind_addr: "127.0.0.1:0".into(),
        }
    }

    fn photo_prompt() -> Prompt {
        Prompt::build(&GenerateRequest {
            image: Some("aGVsbG8=".into()),
            ingredients: None,
        })
        .unwrap()
    }

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }],
            "usage": { "prompt_tokens": 120, "completion_tokens": 450 }
        })
    }

    #[tokio::test]
    async fn sends_json_object_request_with_image_part() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test-1234"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "max_tokens": 2000,
                "response_format": { "type": "json_object" }
            })))
            .and(body_string_contains("data:image/jpeg;base64,aGVsbG8="))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(
                r#"{"recipes":[]}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = CompletionClient::new(&test_config(&server.uri())).unwrap();
        let completion = client.complete(&photo_prompt()).await.unwrap();

        assert_eq!(completion.content, r#"{"recipes":[]}"#);
        assert_eq!(completion.metrics.input_tokens, 120);
        assert_eq!(completion.metrics.output_tokens, 450);
    }

    #[tokio::test]
    async fn text_variant_sends_no_image_part() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_string_contains("eggs, flour, milk"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(
                r#"{"recipes":[]}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let prompt = Prompt::build(&GenerateRequest {
            image: None,
            ingredients: Some("eggs, flour, milk".into()),
        })
        .unwrap();

        let client = CompletionClient::new(&test_config(&server.uri())).unwrap();
        client.complete(&prompt).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8(requests[0].body.clone()).unwrap();
        assert!(!body.contains("image_url"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({
                    "error": { "message": "rate limited" }
                })),
            )
            .mount(&server)
            .await;

        let client = CompletionClient::new(&test_config(&server.uri())).unwrap();
        let err = client.complete(&photo_prompt()).await.unwrap_err();
        assert!(matches!(err, RecipeError::Upstream(_)));
    }

    #[tokio::test]
    async fn missing_choices_is_an_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = CompletionClient::new(&test_config(&server.uri())).unwrap();
        let err = client.complete(&photo_prompt()).await.unwrap_err();
        assert!(matches!(err, RecipeError::Upstream(_)));
    }
}
