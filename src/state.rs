use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::copywriter::CopyClient;
use crate::pipeline::AuditPipeline;
use crate::session::SessionStore;
use crate::vision::VisionClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything mutable lives behind the session store's
/// own locks.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Per-session state, keyed by the page-minted session id.
    pub sessions: Arc<SessionStore>,
    /// The two-stage audit pipeline.
    pub pipeline: Arc<AuditPipeline>,
}

impl AppState {
    /// Wire up the outbound clients and pipeline from configuration.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let vision = VisionClient::new(
            http.clone(),
            config.gemini_base_url.clone(),
            config.gemini_api_key.clone(),
            config.vision_model.clone(),
        );
        let copy = CopyClient::new(
            http,
            config.groq_base_url.clone(),
            config.groq_api_key.clone(),
            config.copy_model.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            sessions: Arc::new(SessionStore::new()),
            pipeline: Arc::new(AuditPipeline::new(vision, copy)),
        })
    }
}
