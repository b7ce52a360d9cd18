//! Client for the Groq text-generation service: DNA report in, viral ad
//! hooks out.

use crate::error::RemoteServiceError;

/// Model pinned for the copy stage.
pub const DEFAULT_COPY_MODEL: &str = "llama-3.3-70b-versatile";

/// Persona established by the fixed system message.
pub const COPY_PERSONA: &str =
    "You are a Senior Creative Director specialized in 2026 digital trends.";

/// Name used in error messages and logs for this stage.
const SERVICE: &str = "copy service";

/// Build the user message for the copy stage.
///
/// The DNA report is substituted into the brief verbatim: no escaping,
/// truncation or sanitization of any kind is performed, and an empty report
/// produces an empty slot in the template.
pub fn build_brief(dna_report: &str) -> String {
    format!("Based on this DNA: {dna_report}, write 3 high-converting viral ad hooks.")
}

/// Client for the Groq OpenAI-compatible `chat/completions` endpoint.
pub struct CopyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CopyClient {
    /// Create a client targeting `{base_url}/v1/chat/completions`.
    pub fn new(http: reqwest::Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            model,
        }
    }

    /// Model identifier this client was configured with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Turn a DNA report into ad hooks, returning the first completion's text.
    ///
    /// Blocks the calling task until the service responds or the request
    /// times out. No retry is attempted.
    pub async fn write_hooks(&self, dna_report: &str) -> Result<String, RemoteServiceError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": COPY_PERSONA },
                { "role": "user", "content": build_brief(dna_report) }
            ],
        });

        tracing::debug!(model = %self.model, "sending brief to copy service");

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| RemoteServiceError::Transport {
                service: SERVICE,
                detail: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RemoteServiceError::Transport {
                service: SERVICE,
                detail: e.to_string(),
            })?;

        tracing::debug!(
            status = %status,
            body = %&body[..body.len().min(500)],
            "copy service responded"
        );

        if !status.is_success() {
            return Err(RemoteServiceError::Status {
                service: SERVICE,
                status: status.as_u16(),
                detail: body,
            });
        }

        let parsed: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| RemoteServiceError::EmptyResponse {
                service: SERVICE,
            })?;

        let ad_copy = parsed["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(RemoteServiceError::EmptyResponse { service: SERVICE })?
            .to_string();

        tracing::info!(chars = ad_copy.len(), "ad hooks generated");

        Ok(ad_copy)
    }
}
