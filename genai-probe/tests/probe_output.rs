mod support;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use genai_probe::probe::{AFTER_CALL, BEFORE_CALL};
use genai_probe::{Error, Probe, ProbeConfig};

use support::{
    build_gemini_client, lines, mount_generate, text_response, GENERATE_PATH, PROBE_MODEL,
};

#[tokio::test]
async fn probe_prints_before_after_then_text() {
    let server = MockServer::start().await;
    mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(text_response("Hello from Gemini")),
    )
    .await;

    let probe = Probe::new(build_gemini_client(&server.uri()), ProbeConfig::default()).unwrap();
    let mut out = Vec::new();
    let response = probe.run(&mut out).await.unwrap();

    assert_eq!(
        lines(&out),
        vec![BEFORE_CALL, AFTER_CALL, "Hello from Gemini"]
    );
    assert_eq!(response.text(), Some("Hello from Gemini".to_string()));
}

#[tokio::test]
async fn probe_prints_empty_line_for_empty_text() {
    let server = MockServer::start().await;
    mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(text_response("")),
    )
    .await;

    let probe = Probe::new(build_gemini_client(&server.uri()), ProbeConfig::default()).unwrap();
    let mut out = Vec::new();
    probe.run(&mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "before API call\nafter API call\n\n"
    );
}

#[tokio::test]
async fn probe_prints_empty_line_when_reply_has_no_text() {
    let server = MockServer::start().await;
    mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": [
                {"inlineData": {"mimeType": "image/png", "data": "iVBORw=="}}
            ]}}]
        })),
    )
    .await;

    let probe = Probe::new(build_gemini_client(&server.uri()), ProbeConfig::default()).unwrap();
    let mut out = Vec::new();
    probe.run(&mut out).await.unwrap();

    assert_eq!(lines(&out), vec![BEFORE_CALL, AFTER_CALL, ""]);
}

#[tokio::test]
async fn rejected_credential_stops_after_first_line() {
    let server = MockServer::start().await;
    mount_generate(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        })),
    )
    .await;

    let probe = Probe::new(build_gemini_client(&server.uri()), ProbeConfig::default()).unwrap();
    let mut out = Vec::new();
    let err = probe.run(&mut out).await.unwrap_err();

    assert!(
        matches!(err, Error::ApiError { status: 400, ref message } if message.contains("API key not valid"))
    );
    assert_eq!(lines(&out), vec![BEFORE_CALL]);
}

#[tokio::test]
async fn model_and_prompt_reach_the_wire_unmodified() {
    let server = MockServer::start().await;
    let prompt = "  Test prompt with \"quotes\", <tags> & newline\n ";
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}, {"text": "second"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProbeConfig::new(PROBE_MODEL, vec![prompt.to_string(), "second".to_string()]);
    let probe = Probe::new(build_gemini_client(&server.uri()), config).unwrap();
    let mut out = Vec::new();
    probe.run(&mut out).await.unwrap();

    assert_eq!(lines(&out).last().map(String::as_str), Some("ok"));
}

#[tokio::test]
async fn reply_with_partial_safety_rating_still_prints_text() {
    let server = MockServer::start().await;
    mount_generate(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "hi"}]},
                "safetyRatings": [{"category": "HARM_CATEGORY_HARASSMENT", "blocked": true}]
            }]
        })),
    )
    .await;

    let probe = Probe::new(build_gemini_client(&server.uri()), ProbeConfig::default()).unwrap();
    let mut out = Vec::new();
    probe.run(&mut out).await.unwrap();

    assert_eq!(lines(&out), vec![BEFORE_CALL, AFTER_CALL, "hi"]);
}
