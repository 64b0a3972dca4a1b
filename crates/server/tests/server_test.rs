//! # Server Route Tests
//!
//! Boots the real server on a random port with every external collaborator
//! (hosting API, model API, payment backend) replaced by wiremock, and
//! exercises the routes end to end.

use gitscribe_server::config::{AnalysisFeature, Config, ProviderConfig};
use gitscribe_server::run;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::time::{sleep, Duration};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_REPLY: &str = r#"```json
{
  "overview": "A sample Rust service.",
  "keyFeatures": ["extraction"],
  "techStack": ["Rust"],
  "projectStructure": "Single crate.",
  "gettingStarted": "cargo run",
  "mainFiles": ["src/main.rs"],
  "complexity": "Low",
  "estimatedReadingTime": "3 minutes"
}
```

2. **Non-Technical Summary**:
A friendly tool that reads code for you.
"#;

fn test_config(
    github_uri: &str,
    checkout_uri: &str,
    analysis: AnalysisFeature,
) -> Config {
    Config {
        port: 0,
        github_api_url: github_uri.to_string(),
        github_token: Some("test-token".to_string()),
        checkout_api_url: format!("{checkout_uri}/create-checkout-session"),
        analysis,
    }
}

fn local_analysis(ai_uri: &str) -> AnalysisFeature {
    AnalysisFeature::Enabled(ProviderConfig {
        provider: "local".to_string(),
        api_url: format!("{ai_uri}/v1/chat/completions"),
        api_key: None,
        model: Some("test-model".to_string()),
    })
}

async fn spawn_app(config: Config) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{port}");

    tokio::spawn(async move {
        if let Err(e) = run(listener, config).await {
            eprintln!("Server error: {e}");
        }
    });

    // Give the server a moment to start
    sleep(Duration::from_millis(100)).await;

    address
}

async fn mount_github_fixture(server: &MockServer) {
    let uri = server.uri();
    Mock::given(method("GET"))
        .and(path("/repos/octocat/sample"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "name": "sample",
            "full_name": "octocat/sample",
            "description": "A sample project",
            "html_url": "https://github.com/octocat/sample",
            "clone_url": "https://github.com/octocat/sample.git",
            "language": "Rust",
            "stargazers_count": 7,
            "forks_count": 2,
            "open_issues_count": 1,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2025-06-01T00:00:00Z",
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/sample/contents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "name": "main.rs",
            "path": "main.rs",
            "sha": "f00dfeed",
            "size": 13,
            "url": format!("{uri}/repos/octocat/sample/contents/main.rs"),
            "html_url": format!("{uri}/octocat/sample/blob/main/main.rs"),
            "git_url": format!("{uri}/repos/octocat/sample/git/blobs/f00dfeed"),
            "download_url": format!("{uri}/raw/main.rs"),
            "type": "file",
        }])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/raw/main.rs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fn main() {}"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_health_check() {
    let github = MockServer::start().await;
    let checkout = MockServer::start().await;
    let ai = MockServer::start().await;

    let address = spawn_app(test_config(
        &github.uri(),
        &checkout.uri(),
        local_analysis(&ai.uri()),
    ))
    .await;

    let response = reqwest::get(format!("{address}/health")).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_analyze_returns_extraction_and_summary() {
    let github = MockServer::start().await;
    let checkout = MockServer::start().await;
    let ai = MockServer::start().await;

    mount_github_fixture(&github).await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": MODEL_REPLY } }]
        })))
        .expect(1)
        .mount(&ai)
        .await;

    let address = spawn_app(test_config(
        &github.uri(),
        &checkout.uri(),
        local_analysis(&ai.uri()),
    ))
    .await;

    let response = reqwest::Client::new()
        .post(format!("{address}/analyze"))
        .json(&json!({ "repo": "octocat/sample" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["extraction"]["total_files"], 1);
    assert_eq!(body["extraction"]["files"][0]["path"], "main.rs");
    assert_eq!(
        body["summary"]["technical"]["overview"],
        "A sample Rust service."
    );
    assert_eq!(
        body["summary"]["non_technical"],
        "A friendly tool that reads code for you."
    );
}

#[tokio::test]
async fn test_analyze_rejects_malformed_repo_reference() {
    let github = MockServer::start().await;
    let checkout = MockServer::start().await;
    let ai = MockServer::start().await;

    let address = spawn_app(test_config(
        &github.uri(),
        &checkout.uri(),
        local_analysis(&ai.uri()),
    ))
    .await;

    let response = reqwest::Client::new()
        .post(format!("{address}/analyze"))
        .json(&json!({ "repo": "not a repository" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid repository reference"));
}

#[tokio::test]
async fn test_analyze_reports_disabled_feature_with_reason() {
    let github = MockServer::start().await;
    let checkout = MockServer::start().await;

    let reason = "GEMINI_API_KEY is not set.".to_string();
    let address = spawn_app(test_config(
        &github.uri(),
        &checkout.uri(),
        AnalysisFeature::Disabled {
            reason: reason.clone(),
        },
    ))
    .await;

    let response = reqwest::Client::new()
        .post(format!("{address}/analyze"))
        .json(&json!({ "repo": "octocat/sample" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], reason.as_str());
}

#[tokio::test]
async fn test_pledge_below_minimum_is_rejected_without_touching_the_backend() {
    let github = MockServer::start().await;
    let checkout = MockServer::start().await;
    let ai = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&checkout)
        .await;

    let address = spawn_app(test_config(
        &github.uri(),
        &checkout.uri(),
        local_analysis(&ai.uri()),
    ))
    .await;

    let response = reqwest::Client::new()
        .post(format!("{address}/pledge"))
        .json(&json!({
            "projectId": "proj-1",
            "userId": "demo-mentor-1",
            "projectTitle": "EcoTracker",
            "ticketPrice": 10,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Minimum pledge"));
}

#[tokio::test]
async fn test_pledge_returns_checkout_url() {
    let github = MockServer::start().await;
    let checkout = MockServer::start().await;
    let ai = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/create-checkout-session"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "url": "https://checkout.example.com/cs_456" })),
        )
        .expect(1)
        .mount(&checkout)
        .await;

    let address = spawn_app(test_config(
        &github.uri(),
        &checkout.uri(),
        local_analysis(&ai.uri()),
    ))
    .await;

    let response = reqwest::Client::new()
        .post(format!("{address}/pledge"))
        .json(&json!({
            "projectId": "proj-1",
            "userId": "demo-mentor-1",
            "projectTitle": "EcoTracker",
            "ticketPrice": 150,
        }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["url"], "https://checkout.example.com/cs_456");
}
