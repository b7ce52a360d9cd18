//! Shared helpers for the integration tests: in-process test images and
//! wiremock stand-ins for the two hosted inference services.
#![allow(dead_code)]

use image::{DynamicImage, ImageOutputFormat, RgbImage};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the vision client posts to for the default model.
pub const VISION_PATH: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";

/// Path the copy client posts to.
pub const COPY_PATH: &str = "/v1/chat/completions";

/// A small valid PNG, generated rather than checked in.
pub fn png_bytes() -> Vec<u8> {
    let bitmap = DynamicImage::ImageRgb8(RgbImage::from_fn(8, 6, |x, y| {
        image::Rgb([(x * 30) as u8, (y * 40) as u8, 200])
    }));
    let mut out = Vec::new();
    bitmap
        .write_to(&mut std::io::Cursor::new(&mut out), ImageOutputFormat::Png)
        .expect("encode test png");
    out
}

/// Body shape the Gemini `generateContent` endpoint answers with.
pub fn gemini_body(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

/// Body shape the Groq `chat/completions` endpoint answers with.
pub fn groq_body(text: &str) -> Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": text } }
        ]
    })
}

/// Stub the vision service to answer every request with `text`.
pub async fn mount_vision_ok(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(VISION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(text)))
        .mount(server)
        .await;
}

/// Stub the vision service to fail every request with `status`.
pub async fn mount_vision_failure(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(VISION_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("vision backend unhappy"))
        .mount(server)
        .await;
}

/// Stub the copy service to answer every request with `text`.
pub async fn mount_copy_ok(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(COPY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(groq_body(text)))
        .mount(server)
        .await;
}

/// Stub the copy service to fail every request with `status`.
pub async fn mount_copy_failure(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(COPY_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("copy backend unhappy"))
        .mount(server)
        .await;
}
