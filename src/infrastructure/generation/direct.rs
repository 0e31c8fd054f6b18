// SPDX-License-Identifier: MPL-2.0
//! Direct backend: calls the Gemini `generateContent` REST endpoint.
//!
//! The request carries the person image, the item image and the stylist
//! prompt as three parts, and asks for image and text modalities. The first
//! inline-data part of the first candidate is the composite.

use super::prompt::stylist_prompt;
use crate::application::port::generation::{CompositeGenerator, CompositeRequest, GeneratedImage};
use crate::error::GenerationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const BACKEND_NAME: &str = "gemini";

/// Default REST base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default image model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: [&'static str; 2],
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<ResponseInlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseInlineData {
    mime_type: Option<String>,
    data: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

fn build_body(request: &CompositeRequest) -> GenerateContentRequest<'_> {
    let person = request.person();
    let item = request.item();
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                RequestPart::Inline {
                    inline_data: InlineData {
                        mime_type: &person.media_type,
                        data: &person.payload,
                    },
                },
                RequestPart::Inline {
                    inline_data: InlineData {
                        mime_type: &item.media_type,
                        data: &item.payload,
                    },
                },
                RequestPart::Text {
                    text: stylist_prompt(request.category()),
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: ["IMAGE", "TEXT"],
        },
    }
}

fn extract_image(response: GenerateContentResponse) -> Option<GeneratedImage> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .filter_map(|part| part.inline_data)
        .find_map(|inline| {
            let payload = inline.data.filter(|data| !data.is_empty())?;
            Some(GeneratedImage {
                payload,
                media_type: inline.mime_type,
            })
        })
}

// =============================================================================
// GeminiGenerator
// =============================================================================

/// Calls the generation service directly with an API key.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
    /// `None` when the configured environment variable was not set; every
    /// call then fails without touching the network.
    api_key: Option<String>,
    api_key_env: String,
}

impl GeminiGenerator {
    /// Creates a generator reading its key from `api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn from_env(
        api_key_env: &str,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::new(api_key, api_key_env, model, base_url)
    }

    /// Creates a generator with an explicit key.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(
        api_key: Option<String>,
        api_key_env: &str,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("virtual_studio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            api_key_env: api_key_env.to_string(),
        })
    }

    /// Returns true when a key is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl CompositeGenerator for GeminiGenerator {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn generate(
        &self,
        request: &CompositeRequest,
    ) -> Result<Option<GeneratedImage>, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::MissingApiKey(self.api_key_env.clone()))?;

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&build_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(extract_image(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::generation::WireImage;
    use crate::domain::category::Category;
    use std::sync::Arc;

    fn request() -> CompositeRequest {
        CompositeRequest::new(
            WireImage {
                payload: Arc::from("UEVSU09O"),
                media_type: "image/png".into(),
            },
            WireImage {
                payload: Arc::from("SVRFTQ=="),
                media_type: "image/jpeg".into(),
            },
            Category::Hair,
        )
        .expect("valid")
    }

    #[test]
    fn body_lists_person_item_then_prompt() {
        let request = request();
        let json = serde_json::to_value(build_body(&request)).expect("serialize");

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "UEVSU09O");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert!(parts[2]["text"]
            .as_str()
            .expect("prompt")
            .contains("hairstyle"));
        assert_eq!(
            json["generationConfig"]["responseModalities"],
            serde_json::json!(["IMAGE", "TEXT"])
        );
    }

    #[test]
    fn first_inline_part_is_the_image() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[
                {"text":"Here you go"},
                {"inlineData":{"mimeType":"image/png","data":"QUJD"}},
                {"inlineData":{"mimeType":"image/png","data":"REVG"}}
            ]}}]}"#,
        )
        .expect("parse");

        let image = extract_image(body).expect("image part");
        assert_eq!(image.payload, "QUJD");
        assert_eq!(image.media_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn text_only_or_empty_responses_have_no_image() {
        let text_only: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"I cannot do that"}]}}]}"#,
        )
        .expect("parse");
        assert!(extract_image(text_only).is_none());

        let empty: GenerateContentResponse = serde_json::from_str("{}").expect("parse");
        assert!(extract_image(empty).is_none());

        let blocked: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).expect("parse");
        assert!(extract_image(blocked).is_none());
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let generator = GeminiGenerator::new(
            None,
            "VIRTUAL_STUDIO_TEST_KEY",
            DEFAULT_MODEL,
            "http://127.0.0.1:9",
        )
        .expect("client");
        assert!(!generator.is_configured());

        let err = generator.generate(&request()).await.expect_err("no key");
        assert_eq!(
            err,
            GenerationError::MissingApiKey("VIRTUAL_STUDIO_TEST_KEY".into())
        );
    }

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let generator =
            GeminiGenerator::new(Some("k".into()), "K", "my-model", "https://host/v1beta/")
                .expect("client");
        assert_eq!(
            generator.endpoint(),
            "https://host/v1beta/models/my-model:generateContent"
        );
    }
}
