use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// The uploaded bytes could not be turned into a usable bitmap.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The bytes are not one of the accepted raster encodings.
    #[error("unsupported image format; accepted formats are JPEG, PNG and WebP")]
    UnsupportedFormat,

    /// The bytes claim a supported encoding but fail to decode.
    #[error("invalid image data: {0}")]
    Invalid(String),

    /// The decoded bitmap could not be re-encoded for transport.
    #[error("could not prepare image for analysis: {0}")]
    Reencode(String),
}

/// A hosted inference service call failed.
///
/// Carries enough detail to render a human-readable message; the two stages
/// share this taxonomy and are not distinguished in the user-visible error.
#[derive(Debug, thiserror::Error)]
pub enum RemoteServiceError {
    /// The request never produced an HTTP response.
    #[error("{service} request failed: {detail}")]
    Transport {
        service: &'static str,
        detail: String,
    },

    /// The service answered with a non-success status.
    #[error("{service} returned HTTP {status}: {detail}")]
    Status {
        service: &'static str,
        status: u16,
        detail: String,
    },

    /// The response parsed but held no usable completion text.
    #[error("{service} response contained no usable content")]
    EmptyResponse { service: &'static str },
}

/// Failure modes of a single audit run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Generate was triggered before any image was uploaded.
    #[error("no image uploaded; upload a brand image before generating an audit")]
    NoImage,

    /// One of the two inference stages failed.
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),
}

/// HTTP-facing error type for the Axum handlers.
///
/// Implements [`IntoResponse`] to produce consistent `{error, code}` JSON
/// bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Upload rejected at intake.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An audit run failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The `x-session-id` header is missing or not a UUID.
    #[error("missing or malformed x-session-id header")]
    MissingSession,

    /// A run is already in flight for this session.
    #[error("an audit is already running for this session")]
    AuditInFlight,

    /// The multipart upload was malformed or held no image field.
    #[error("bad upload: {0}")]
    BadUpload(String),
}

/// Convenience alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Decode(_) => (StatusCode::BAD_REQUEST, "DECODE_ERROR"),
            ApiError::Pipeline(PipelineError::NoImage) => (StatusCode::BAD_REQUEST, "NO_IMAGE"),
            ApiError::Pipeline(PipelineError::Remote(_)) => {
                (StatusCode::BAD_GATEWAY, "REMOTE_SERVICE_ERROR")
            }
            ApiError::MissingSession => (StatusCode::BAD_REQUEST, "MISSING_SESSION"),
            ApiError::AuditInFlight => (StatusCode::CONFLICT, "AUDIT_IN_FLIGHT"),
            ApiError::BadUpload(_) => (StatusCode::BAD_REQUEST, "BAD_UPLOAD"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
        } else {
            tracing::warn!(error = %self, code, "request rejected");
        }

        let body = json!({
            "error": self.to_string(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
