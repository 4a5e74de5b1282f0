//! Narrative generation boundary.
//!
//! [`NarrativeClient`] wraps the external text-generation service: it posts
//! the resolved configuration payload and returns the narrative string, or a
//! [`GenerationError`] when the service is unreachable, answers with a
//! non-success status, or returns an empty payload.
//!
//! The client never retries on its own - whether to retry is a caller
//! decision - and it never touches the caller's configuration: on failure the
//! previously stored narrative (if any) stays as it was.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Most bytes of a non-JSON error body we keep for the error message.
const MAX_ERROR_BODY_BYTES: usize = 2 * 1024;

/// Narrative generation failure. The prior narrative is always preserved.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("narrative service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("narrative service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("narrative service returned an empty summary")]
    EmptySummary,
}

/// Resolved configuration payload sent to the narrative service.
///
/// Field names follow the service's wire contract (the original frontend
/// posted its store verbatim), which is why modules travel as `recipes` and
/// case studies as `caseTiles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeRequest {
    pub client_name: String,
    pub stage: Option<StagePayload>,
    pub ambition: Option<AmbitionPayload>,
    pub path: Option<PathPayload>,
    pub facilitation: String,
    pub modality: String,
    #[serde(rename = "recipes")]
    pub modules: Vec<ModulePayload>,
    #[serde(rename = "caseTiles")]
    pub case_studies: Vec<CaseStudyPayload>,
    pub pricing: pitchkit_types::Pricing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagePayload {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbitionPayload {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPayload {
    #[serde(rename = "type")]
    pub path_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partners: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulePayload {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudyPayload {
    pub id: String,
    pub title: String,
    pub metric: String,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the narrative service.
#[derive(Debug, Clone)]
pub struct NarrativeClient {
    base_url: String,
    client: reqwest::Client,
}

impl NarrativeClient {
    /// Build a client for the service at `base_url` (scheme + host + port).
    pub fn new(base_url: impl Into<String>) -> Result<Self, GenerationError> {
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

    /// Request a narrative for the given configuration payload.
    ///
    /// Suspends for the duration of the network round trip. No automatic
    /// retry; re-invoke to try again.
    pub async fn generate(&self, request: &NarrativeRequest) -> Result<String, GenerationError> {
        let url = format!("{}/generate-summary", self.base_url);
        tracing::debug!(%url, modules = request.modules.len(), "requesting narrative");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = read_error_message(response).await;
            tracing::warn!(status = status.as_u16(), %message, "narrative request failed");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload: SummaryResponse = response.json().await?;
        let summary = payload.summary.unwrap_or_default();
        if summary.trim().is_empty() {
            return Err(GenerationError::EmptySummary);
        }
        tracing::info!(chars = summary.len(), "narrative generated");
        Ok(summary)
    }
}

/// Extract the service's human-readable message from an error response,
/// falling back to a capped slice of the raw body.
async fn read_error_message(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(&body) {
        if let Some(message) = parsed.error {
            if !message.trim().is_empty() {
                return message;
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
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request_with_one_module() -> NarrativeRequest {
        NarrativeRequest {
            client_name: "Acme Corp".to_string(),
            stage: Some(StagePayload {
                id: "stabilize".to_string(),
                name: "Stabilize".to_string(),
                description: "Build consistent processes".to_string(),
            }),
            ambition: Some(AmbitionPayload {
                id: "capability-hub".to_string(),
                name: "Capability Hub".to_string(),
            }),
            path: Some(PathPayload {
                path_type: "certification".to_string(),
                partners: vec![],
            }),
            facilitation: "mixed".to_string(),
            modality: "hybrid".to_string(),
            modules: vec![ModulePayload {
                id: "critical-thinking".to_string(),
                name: "Critical Thinking".to_string(),
                description: "Structured decision-making".to_string(),
            }],
            case_studies: vec![],
            pricing: pitchkit_types::Pricing::None,
        }
    }

    #[tokio::test]
    async fn returns_summary_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-summary"))
            .and(body_partial_json(serde_json::json!({
                "clientName": "Acme Corp",
                "recipes": [{"id": "critical-thinking"}],
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"summary": "A compelling summary."})),
            )
            .mount(&server)
            .await;

        let client = NarrativeClient::new(server.uri()).unwrap();
        let summary = client.generate(&request_with_one_module()).await.unwrap();
        assert_eq!(summary, "A compelling summary.");
    }

    #[tokio::test]
    async fn surfaces_service_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-summary"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"error": "API key not configured"})),
            )
            .mount(&server)
            .await;

        let client = NarrativeClient::new(server.uri()).unwrap();
        let err = client.generate(&request_with_one_module()).await.unwrap_err();
        match err {
            GenerationError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "API key not configured");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_summary_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-summary"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"summary": "  "})),
            )
            .mount(&server)
            .await;

        let client = NarrativeClient::new(server.uri()).unwrap();
        let err = client.generate(&request_with_one_module()).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptySummary));
    }

    #[tokio::test]
    async fn missing_summary_field_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-summary"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = NarrativeClient::new(server.uri()).unwrap();
        let err = client.generate(&request_with_one_module()).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptySummary));
    }

    #[tokio::test]
    async fn non_json_error_body_is_capped_not_lost() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-summary"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = NarrativeClient::new(server.uri()).unwrap();
        let err = client.generate(&request_with_one_module()).await.unwrap_err();
        match err {
            GenerationError::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }
}
