// SPDX-License-Identifier: MPL-2.0
//! Proxy backend: posts the request to a server-side handler.
//!
//! The server holds the credential and calls the generation service itself.
//! Wire format:
//!
//! ```text
//! POST <endpoint>
//! {"personImageBase64", "personImageMimeType",
//!  "itemImageBase64", "itemImageMimeType", "category"}
//!
//! 200 {"imageBase64": "..."}        (null or absent: no image)
//! 4xx/5xx {"error": "...", "details"?: "..."}
//! ```

use crate::application::port::generation::{CompositeGenerator, CompositeRequest, GeneratedImage};
use crate::error::GenerationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const BACKEND_NAME: &str = "proxy";

/// Default handler location for a locally running server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/generate";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProxyRequest<'a> {
    person_image_base64: &'a str,
    person_image_mime_type: &'a str,
    item_image_base64: &'a str,
    item_image_mime_type: &'a str,
    category: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProxyResponse {
    image_base64: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProxyError {
    error: Option<String>,
    details: Option<String>,
}

impl<'a> From<&'a CompositeRequest> for ProxyRequest<'a> {
    fn from(request: &'a CompositeRequest) -> Self {
        Self {
            person_image_base64: &request.person().payload,
            person_image_mime_type: &request.person().media_type,
            item_image_base64: &request.item().payload,
            item_image_mime_type: &request.item().media_type,
            category: request.category().as_str(),
        }
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ProxyError>(body) {
        Ok(ProxyError {
            error: Some(error),
            details: Some(details),
        }) => format!("{error} ({details})"),
        Ok(ProxyError {
            error: Some(error), ..
        }) => error,
        _ => body.to_string(),
    }
}

/// Sends requests through a server-side proxy.
#[derive(Debug, Clone)]
pub struct ProxyGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl ProxyGenerator {
    /// # Errors
    ///
    /// Returns [`GenerationError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("virtual_studio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompositeGenerator for ProxyGenerator {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn generate(
        &self,
        request: &CompositeRequest,
    ) -> Result<Option<GeneratedImage>, GenerationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ProxyRequest::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                code: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body: ProxyResponse = response.json().await?;
        Ok(body
            .image_base64
            .filter(|payload| !payload.is_empty())
            .map(|payload| GeneratedImage {
                payload,
                media_type: None,
            }))
    }
}
