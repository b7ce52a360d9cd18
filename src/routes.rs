//! HTTP surface: the embedded page plus the three JSON endpoints behind it.
//!
//! Every `/api` route is session-scoped: the page mints a UUID on load and
//! sends it as `x-session-id` with each request.

use std::time::Instant;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::HeaderMap;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult, PipelineError};
use crate::intake::UploadedImage;
use crate::session::AuditPhase;
use crate::state::AppState;
use crate::ui;

/// Upload cap advertised by the page.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/upload", post(upload))
        .route("/api/generate", post(generate))
        .route("/api/session", get(session_status))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Metadata echoed back after a successful upload.
#[derive(Serialize)]
struct UploadResponse {
    width: u32,
    height: u32,
    format: &'static str,
}

/// Both stage outputs plus the updated dashboard metric.
#[derive(Serialize)]
struct AuditResponse {
    dna_report: String,
    ad_copy: String,
    completed_audits: u64,
    processing_time_ms: u128,
}

/// Sidebar state for one session.
#[derive(Serialize)]
struct SessionStatusResponse {
    completed_audits: u64,
    phase: AuditPhase,
}

fn session_id(headers: &HeaderMap) -> ApiResult<Uuid> {
    headers
        .get("x-session-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or(ApiError::MissingSession)
}

async fn index() -> Html<&'static str> {
    Html(ui::PAGE)
}

/// `POST /api/upload`: decode the multipart image and stage it in the
/// session. Decode failures surface here, before any remote call exists.
async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let id = session_id(&headers)?;

    let field = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadUpload(e.to_string()))?
        .ok_or_else(|| ApiError::BadUpload("upload contained no file field".into()))?;
    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadUpload(e.to_string()))?;

    let image = UploadedImage::decode(data.to_vec())?;
    let response = UploadResponse {
        width: image.width(),
        height: image.height(),
        format: image.format_name(),
    };

    tracing::info!(
        session = %id,
        format = response.format,
        width = response.width,
        height = response.height,
        "image staged for audit"
    );

    // Waits out any in-flight run; the replacement image lands between runs.
    let session = state.sessions.get_or_create(id);
    session.lock().await.load_image(image);

    Ok(Json(response))
}

/// `POST /api/generate`: run the two-stage pipeline over the staged image.
///
/// A second trigger while this session's run is in flight is rejected with
/// 409 rather than queued.
async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<AuditResponse>> {
    let id = session_id(&headers)?;
    let session = state.sessions.get_or_create(id);
    let mut session = session.try_lock().map_err(|_| ApiError::AuditInFlight)?;

    if !session.phase.can_start_run() {
        return Err(PipelineError::NoImage.into());
    }

    let start = Instant::now();
    let outcome = state.pipeline.run(&mut session).await?;

    Ok(Json(AuditResponse {
        dna_report: outcome.dna_report,
        ad_copy: outcome.ad_copy,
        completed_audits: session.counter.current(),
        processing_time_ms: start.elapsed().as_millis(),
    }))
}

/// `GET /api/session`: counter and phase for the dashboard sidebar.
async fn session_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionStatusResponse>> {
    let id = session_id(&headers)?;
    let session = state.sessions.get_or_create(id);
    let session = session.lock().await;

    Ok(Json(SessionStatusResponse {
        completed_audits: session.counter.current(),
        phase: session.phase,
    }))
}
