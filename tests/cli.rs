use assert_cmd::assert::{Assert, OutputAssertExt};
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transcript_body(lines: &[&str]) -> Value {
    let segments: Vec<Value> = lines
        .iter()
        .map(|line| {
            json!({
                "transcriptSegmentRenderer": {
                    "snippet": { "elementsAttributedString": { "content": line } }
                }
            })
        })
        .collect();

    json!({
        "actions": [{
            "elementsCommand": {
                "transformEntityCommand": {
                    "arguments": {
                        "transformTranscriptSegmentListArguments": {
                            "overwrite": { "initialSegments": segments }
                        }
                    }
                }
            }
        }]
    })
}

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/youtubei/v1/get_transcript"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

/// Run the binary against the mock server off the async test thread
async fn run(server: &MockServer, args: &[&str]) -> Assert {
    let endpoint = format!("{}/youtubei/v1/get_transcript", server.uri());
    let mut args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    args.push("--endpoint".into());
    args.push(endpoint);

    let output = tokio::task::spawn_blocking(move || {
        Command::cargo_bin("yt-transcript")
            .unwrap()
            .env_remove("RUST_LOG")
            .args(&args)
            .output()
    })
    .await
    .unwrap()
    .unwrap();

    output.assert()
}

#[test]
fn no_arguments_prints_usage() {
    Command::cargo_bin("yt-transcript")
        .unwrap()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_goes_to_stdout() {
    Command::cargo_bin("yt-transcript")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("VIDEO_ID"))
        .stderr(predicate::str::is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn hyphen_leading_video_id_is_sent() {
    let server = serve(ResponseTemplate::new(200).set_body_json(transcript_body(&["Hi"]))).await;

    run(&server, &["-_8Yc4DPRwU", "en"])
        .await
        .success()
        .stdout("Hi\n");

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let params = base64_decode(body["params"].as_str().unwrap());
    assert_eq!(&params[2..13], b"-_8Yc4DPRwU");
}

#[tokio::test(flavor = "multi_thread")]
async fn prints_segments_one_per_line() {
    let server = serve(ResponseTemplate::new(200).set_body_json(transcript_body(&["Hello", "World"]))).await;

    run(&server, &["dQw4w9WgXcQ", "en"])
        .await
        .success()
        .stdout("Hello\nWorld\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn json_format_prints_an_array() {
    let server = serve(ResponseTemplate::new(200).set_body_json(transcript_body(&["Hello", "World"]))).await;

    let assert = run(&server, &["dQw4w9WgXcQ", "--format", "json"]).await.success();
    let lines: Vec<String> = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(lines, vec!["Hello", "World"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_actions_is_a_soft_failure() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({ "responseContext": {} }))).await;

    run(&server, &["dQw4w9WgXcQ"])
        .await
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not find 'actions' array"));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_segments_is_a_soft_failure() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({ "actions": [{}] }))).await;

    run(&server, &["dQw4w9WgXcQ", "xx"])
        .await
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("may not have a transcript for the selected language"));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_response_fails() {
    let server = serve(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    run(&server, &["dQw4w9WgXcQ"])
        .await
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse JSON response."));
}

#[tokio::test(flavor = "multi_thread")]
async fn youtube_url_is_accepted_as_video_id() {
    let server = serve(ResponseTemplate::new(200).set_body_json(transcript_body(&["Hi"]))).await;

    run(&server, &["https://youtu.be/dQw4w9WgXcQ"])
        .await
        .success()
        .stdout("Hi\n");

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let params = base64_decode(body["params"].as_str().unwrap());
    assert_eq!(&params[2..13], b"dQw4w9WgXcQ");
}

#[test]
fn transport_failure_fails() {
    Command::cargo_bin("yt-transcript")
        .unwrap()
        .env_remove("RUST_LOG")
        .args(["dQw4w9WgXcQ", "--endpoint", "http://127.0.0.1:1/get_transcript"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error:"));
}

fn base64_decode(text: &str) -> Vec<u8> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.decode(text).unwrap()
}
