#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use genai_probe::Client;

pub const PROBE_MODEL: &str = "gemini-2.0-flash-exp-image-generation";
pub const GENERATE_PATH: &str =
    "/v1beta/models/gemini-2.0-flash-exp-image-generation:generateContent";

pub fn build_gemini_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn text_response(text: &str) -> Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}
        ]
    })
}

pub async fn mount_generate(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

pub fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8(output.to_vec())
        .unwrap()
        .split_inclusive('\n')
        .map(|line| line.trim_end_matches('\n').to_string())
        .collect()
}
