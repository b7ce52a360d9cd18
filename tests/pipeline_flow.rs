//! Pipeline behavior against mocked inference services: counter movement,
//! stage sequencing, and error surfacing.

mod common;

use common::{
    mount_copy_failure, mount_copy_ok, mount_vision_failure, mount_vision_ok, png_bytes, COPY_PATH,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vibe_check::copywriter::CopyClient;
use vibe_check::error::{PipelineError, RemoteServiceError};
use vibe_check::intake::UploadedImage;
use vibe_check::pipeline::AuditPipeline;
use vibe_check::session::{AuditPhase, Session};
use vibe_check::vision::VisionClient;

fn pipeline_for(gemini: &MockServer, groq: &MockServer) -> AuditPipeline {
    let http = reqwest::Client::new();
    let vision = VisionClient::new(
        http.clone(),
        gemini.uri(),
        "test-gemini-key".into(),
        "gemini-3-flash-preview".into(),
    );
    let copy = CopyClient::new(
        http,
        groq.uri(),
        "test-groq-key".into(),
        "llama-3.3-70b-versatile".into(),
    );
    AuditPipeline::new(vision, copy)
}

fn session_with_image() -> Session {
    let mut session = Session::default();
    session.load_image(UploadedImage::decode(png_bytes()).expect("test png decodes"));
    session
}

#[tokio::test]
async fn successful_run_yields_both_outputs_and_one_increment() {
    let gemini = MockServer::start().await;
    let groq = MockServer::start().await;
    mount_vision_ok(&gemini, "DNA: blue, sans-serif, minimalist").await;
    mount_copy_ok(&groq, "1. Hook one\n2. Hook two\n3. Hook three").await;

    let pipeline = pipeline_for(&gemini, &groq);
    let mut session = session_with_image();

    let outcome = pipeline.run(&mut session).await.expect("run succeeds");

    assert_eq!(outcome.dna_report, "DNA: blue, sans-serif, minimalist");
    assert!(outcome.ad_copy.contains("Hook one"));
    assert_eq!(session.counter.current(), 1);
    assert_eq!(session.phase, AuditPhase::Completed);
}

#[tokio::test]
async fn copy_stage_failure_fails_the_run_without_incrementing() {
    let gemini = MockServer::start().await;
    let groq = MockServer::start().await;
    mount_vision_ok(&gemini, "DNA: warm tones").await;
    mount_copy_failure(&groq, 500).await;

    let pipeline = pipeline_for(&gemini, &groq);
    let mut session = session_with_image();

    let err = pipeline.run(&mut session).await.expect_err("copy stage fails");

    assert!(matches!(
        err,
        PipelineError::Remote(RemoteServiceError::Status { status: 500, .. })
    ));
    assert_eq!(session.counter.current(), 0);
    assert_eq!(session.phase, AuditPhase::Failed);
}

#[tokio::test]
async fn counter_reads_one_one_two_when_the_middle_run_fails() {
    let gemini = MockServer::start().await;
    let groq = MockServer::start().await;
    mount_vision_ok(&gemini, "DNA: monochrome").await;
    mount_copy_ok(&groq, "hooks").await;

    let pipeline = pipeline_for(&gemini, &groq);
    let mut session = session_with_image();

    pipeline.run(&mut session).await.expect("run 1 succeeds");
    assert_eq!(session.counter.current(), 1);

    // Force run 2 to fail at the copy stage.
    groq.reset().await;
    mount_copy_failure(&groq, 503).await;
    pipeline
        .run(&mut session)
        .await
        .expect_err("run 2 fails at copy stage");
    assert_eq!(session.counter.current(), 1);

    groq.reset().await;
    mount_copy_ok(&groq, "hooks again").await;
    pipeline.run(&mut session).await.expect("run 3 succeeds");
    assert_eq!(session.counter.current(), 2);
}

#[tokio::test]
async fn vision_failure_never_reaches_the_copy_service() {
    let gemini = MockServer::start().await;
    let groq = MockServer::start().await;
    mount_vision_failure(&gemini, 401).await;

    // Any call to the copy endpoint fails the test on server verification.
    Mock::given(method("POST"))
        .and(path(COPY_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&groq)
        .await;

    let pipeline = pipeline_for(&gemini, &groq);
    let mut session = session_with_image();

    let err = pipeline.run(&mut session).await.expect_err("vision stage fails");

    assert!(matches!(
        err,
        PipelineError::Remote(RemoteServiceError::Status { status: 401, .. })
    ));
    assert_eq!(session.counter.current(), 0);
    assert_eq!(session.phase, AuditPhase::Failed);

    groq.verify().await;
}

#[tokio::test]
async fn dna_report_reaches_the_copy_service_verbatim() {
    let gemini = MockServer::start().await;
    let groq = MockServer::start().await;
    mount_vision_ok(&gemini, "DNA: blue, sans-serif, minimalist").await;

    // The brief must embed the report with no truncation or escaping.
    Mock::given(method("POST"))
        .and(path(COPY_PATH))
        .and(body_string_contains(
            "Based on this DNA: DNA: blue, sans-serif, minimalist, \
             write 3 high-converting viral ad hooks.",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::groq_body("hooks")))
        .expect(1)
        .mount(&groq)
        .await;

    let pipeline = pipeline_for(&gemini, &groq);
    let mut session = session_with_image();

    pipeline.run(&mut session).await.expect("run succeeds");

    groq.verify().await;
}

#[tokio::test]
async fn empty_dna_report_is_carried_forward() {
    let gemini = MockServer::start().await;
    let groq = MockServer::start().await;
    mount_vision_ok(&gemini, "").await;

    Mock::given(method("POST"))
        .and(path(COPY_PATH))
        .and(body_string_contains(
            "Based on this DNA: , write 3 high-converting viral ad hooks.",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::groq_body("hooks")))
        .expect(1)
        .mount(&groq)
        .await;

    let pipeline = pipeline_for(&gemini, &groq);
    let mut session = session_with_image();

    let outcome = pipeline.run(&mut session).await.expect("run succeeds");

    assert_eq!(outcome.dna_report, "");
    assert_eq!(session.counter.current(), 1);
    groq.verify().await;
}

#[tokio::test]
async fn run_without_an_image_makes_no_remote_calls() {
    let gemini = MockServer::start().await;
    let groq = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&gemini)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&groq)
        .await;

    let pipeline = pipeline_for(&gemini, &groq);
    let mut session = Session::default();

    let err = pipeline.run(&mut session).await.expect_err("no image staged");

    assert!(matches!(err, PipelineError::NoImage));
    assert_eq!(session.phase, AuditPhase::Idle);

    gemini.verify().await;
    groq.verify().await;
}

#[tokio::test]
async fn vision_response_without_text_is_an_empty_response_error() {
    let gemini = MockServer::start().await;
    let groq = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(common::VISION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": []
        })))
        .mount(&gemini)
        .await;

    let pipeline = pipeline_for(&gemini, &groq);
    let mut session = session_with_image();

    let err = pipeline.run(&mut session).await.expect_err("no candidates");

    assert!(matches!(
        err,
        PipelineError::Remote(RemoteServiceError::EmptyResponse { .. })
    ));
    assert_eq!(session.counter.current(), 0);
}
