//! Per-session state: the audit counter, the run state machine, and the
//! most recent upload.
//!
//! Sessions are keyed by the UUID the page mints on load. Each session's
//! state sits behind its own async mutex, so one session's audit run never
//! touches another's counter.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use uuid::Uuid;

use crate::intake::UploadedImage;

/// Count of fully completed audits in one session.
///
/// Starts at zero, increments by exactly one per successful run, never
/// decrements, never persists.
#[derive(Debug, Default)]
pub struct AuditCounter(u64);

impl AuditCounter {
    /// Record one completed audit.
    pub fn increment(&mut self) {
        self.0 += 1;
    }

    /// Current count, for the dashboard metric.
    pub fn current(&self) -> u64 {
        self.0
    }
}

/// Where a session currently sits in the audit run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditPhase {
    /// No image uploaded yet.
    Idle,
    /// An image is loaded and waiting for the generate trigger.
    ImageLoaded,
    /// The vision stage's remote call is in flight.
    RunningVision,
    /// The copy stage's remote call is in flight.
    RunningCopy,
    /// The last run finished both stages.
    Completed,
    /// The last run failed at one of the stages.
    Failed,
}

impl AuditPhase {
    /// Whether a run is currently in flight.
    pub fn is_running(self) -> bool {
        matches!(self, AuditPhase::RunningVision | AuditPhase::RunningCopy)
    }

    /// Whether a fresh generate trigger may start a run from this phase.
    ///
    /// `Completed` and `Failed` are terminal for their run only; a new user
    /// action starts over from either.
    pub fn can_start_run(self) -> bool {
        matches!(
            self,
            AuditPhase::ImageLoaded | AuditPhase::Completed | AuditPhase::Failed
        )
    }
}

impl Default for AuditPhase {
    fn default() -> Self {
        AuditPhase::Idle
    }
}

/// All state owned by one browser session.
#[derive(Debug, Default)]
pub struct Session {
    /// Most recent upload; replaced wholesale by the next upload.
    pub image: Option<UploadedImage>,
    /// Completed-audit counter for the sidebar.
    pub counter: AuditCounter,
    /// Current position in the run state machine.
    pub phase: AuditPhase,
}

impl Session {
    /// Accept a freshly decoded upload, re-entering `ImageLoaded`.
    ///
    /// The previous image, if any, is dropped here.
    pub fn load_image(&mut self, image: UploadedImage) {
        self.image = Some(image);
        self.phase = AuditPhase::ImageLoaded;
    }
}

/// Hands out isolated [`Session`] instances keyed by session id.
///
/// The outer map lock is held only to clone the per-session `Arc`; the
/// per-session mutex is the one held across audit runs.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the session for `id`, creating it on first sight.
    pub fn get_or_create(&self, id: Uuid) -> Arc<tokio::sync::Mutex<Session>> {
        let mut sessions = self.inner.lock().expect("session map lock poisoned");
        Arc::clone(
            sessions
                .entry(id)
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(Session::default()))),
        )
    }

    /// Number of sessions currently tracked.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("session map lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
