//! Client for the Gemini vision service: one image in, one free-text
//! "visual DNA" report out.

use crate::error::RemoteServiceError;
use crate::intake::UploadedImage;

/// Model pinned for the vision stage.
pub const DEFAULT_VISION_MODEL: &str = "gemini-3-flash-preview";

/// Instruction sent alongside every uploaded image.
pub const VISION_INSTRUCTION: &str =
    "Analyze this image and provide technical facts: HEX colors, font style, and aesthetic vibe.";

/// Name used in error messages and logs for this stage.
const SERVICE: &str = "vision service";

/// Client for the Gemini `generateContent` endpoint.
pub struct VisionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl VisionClient {
    /// Create a client targeting `{base_url}/v1beta/models/{model}:generateContent`.
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

    /// Ask the vision service to describe `image`, returning the DNA report.
    ///
    /// Blocks the calling task until the service responds or the request
    /// times out. No retry is attempted.
    pub async fn describe(&self, image: &UploadedImage) -> Result<String, RemoteServiceError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let payload = serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": VISION_INSTRUCTION },
                    {
                        "inline_data": {
                            "mime_type": "image/jpeg",
                            "data": image.transport_base64(),
                        }
                    }
                ]
            }]
        });

        tracing::debug!(model = %self.model, "sending image to vision service");

        let response = self
            .http
            .post(&url)
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
            "vision service responded"
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

        let dna_report = parsed["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(RemoteServiceError::EmptyResponse { service: SERVICE })?
            .to_string();

        tracing::info!(chars = dna_report.len(), "visual DNA extracted");

        Ok(dna_report)
    }
}
