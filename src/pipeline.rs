//! The two-stage audit pipeline: vision analysis feeding copy generation.
//!
//! One run walks a session through `RunningVision → RunningCopy →
//! Completed`, or drops it into `Failed` at the first stage error. The
//! session's counter moves only on entering `Completed`; a run that fails
//! at either stage leaves it untouched.

use crate::copywriter::CopyClient;
use crate::error::PipelineError;
use crate::session::{AuditPhase, Session};
use crate::vision::VisionClient;

/// Both stage outputs of one completed run.
#[derive(Debug)]
pub struct AuditOutcome {
    /// Free-text visual DNA report from the vision stage.
    pub dna_report: String,
    /// Ad hooks from the copy stage.
    pub ad_copy: String,
}

/// Sequences the two inference stages over one session.
pub struct AuditPipeline {
    vision: VisionClient,
    copy: CopyClient,
}

impl AuditPipeline {
    pub fn new(vision: VisionClient, copy: CopyClient) -> Self {
        Self { vision, copy }
    }

    /// Run one audit over the session's current image.
    ///
    /// The caller must hold the session exclusively for the whole run (the
    /// handlers do, via the per-session mutex), so the phase field and the
    /// counter only ever change under one run at a time.
    pub async fn run(&self, session: &mut Session) -> Result<AuditOutcome, PipelineError> {
        let image = session.image.as_ref().ok_or(PipelineError::NoImage)?;

        session.phase = AuditPhase::RunningVision;
        let dna_report = match self.vision.describe(image).await {
            Ok(report) => report,
            Err(e) => {
                session.phase = AuditPhase::Failed;
                return Err(e.into());
            }
        };

        // The report is carried forward as-is; an empty string is a valid
        // stage output and still reaches the copy service.
        session.phase = AuditPhase::RunningCopy;
        let ad_copy = match self.copy.write_hooks(&dna_report).await {
            Ok(copy) => copy,
            Err(e) => {
                session.phase = AuditPhase::Failed;
                return Err(e.into());
            }
        };

        session.phase = AuditPhase::Completed;
        session.counter.increment();

        tracing::info!(
            completed_audits = session.counter.current(),
            "audit completed"
        );

        Ok(AuditOutcome {
            dna_report,
            ad_copy,
        })
    }
}
