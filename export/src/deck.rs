//! Remote slide-deck export.
//!
//! The rendering service owns the deck template; this client sends the
//! configuration (plus the narrative, when one exists) and receives the
//! finished binary. A narrative is optional for this flavor.

use std::time::Duration;

use serde::Serialize;

use pitchkit_types::Configuration;

use crate::ExportError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 120;
const MAX_ERROR_BODY_BYTES: usize = 2 * 1024;

/// Body posted to the deck-rendering service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRequest {
    pub config: Configuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<String>,
}

impl DeckRequest {
    /// Bundle a configuration snapshot with an optional narrative.
    #[must_use]
    pub fn new(config: Configuration, executive_summary: Option<String>) -> Self {
        Self {
            config,
            executive_summary,
        }
    }
}

/// HTTP client for the deck-rendering service.
#[derive(Debug, Clone)]
pub struct DeckClient {
    base_url: String,
    client: reqwest::Client,
}

impl DeckClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ExportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Render the deck remotely and return the document bytes.
    ///
    /// Does not mutate the configuration. An empty response body is reported
    /// as [`ExportError::EmptyArtifact`] - a truncated file is never returned.
    pub async fn export(&self, request: &DeckRequest) -> Result<Vec<u8>, ExportError> {
        let url = format!("{}/generate-deck", self.base_url);
        tracing::debug!(%url, "requesting slide deck");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response).await;
            tracing::warn!(status = status.as_u16(), %message, "deck export failed");
            return Err(ExportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ExportError::EmptyArtifact);
        }
        tracing::info!(bytes = bytes.len(), "slide deck received");
        Ok(bytes.to_vec())
    }
}

async fn read_error_message(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(message) = parsed.get("error").and_then(serde_json::Value::as_str) {
            if !message.trim().is_empty() {
                return message.to_string();
            }
        }
    }
    let mut capped = body;
    if capped.len() > MAX_ERROR_BODY_BYTES {
        let mut cut = MAX_ERROR_BODY_BYTES;
        while !capped.is_char_boundary(cut) {
            cut -= 1;
        }
        capped.truncate(cut);
    }
    if capped.trim().is_empty() {
        "no error detail provided".to_string()
    } else {
        capped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_binary_artifact() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-deck"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x50, 0x4b, 0x03, 0x04]))
            .mount(&server)
            .await;

        let client = DeckClient::new(server.uri()).unwrap();
        let request = DeckRequest::new(Configuration::default(), None);
        let bytes = client.export(&request).await.unwrap();
        assert_eq!(bytes, vec![0x50, 0x4b, 0x03, 0x04]);
    }

    #[tokio::test]
    async fn narrative_is_optional_for_decks() {
        let request = DeckRequest::new(Configuration::default(), None);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("executiveSummary").is_none());

        let with_narrative =
            DeckRequest::new(Configuration::default(), Some("Summary.".to_string()));
        let body = serde_json::to_value(&with_narrative).unwrap();
        assert_eq!(body["executiveSummary"], "Summary.");
    }

    #[tokio::test]
    async fn empty_body_is_an_error_not_a_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-deck"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = DeckClient::new(server.uri()).unwrap();
        let request = DeckRequest::new(Configuration::default(), None);
        let err = client.export(&request).await.unwrap_err();
        assert!(matches!(err, ExportError::EmptyArtifact));
    }

    #[tokio::test]
    async fn service_error_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-deck"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"error": "Template file not found"})),
            )
            .mount(&server)
            .await;

        let client = DeckClient::new(server.uri()).unwrap();
        let request = DeckRequest::new(Configuration::default(), None);
        match client.export(&request).await.unwrap_err() {
            ExportError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Template file not found");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }
}
