//! End-to-end tests for the chat-completions adapter against a local
//! stand-in for the upstream API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use solar_assistant::{
    AdviceRequest, AskAssistantUseCase, ChatClient, CompletionConfig, OpenRouterClient, Outcome,
    SYSTEM_PROMPT,
};

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    reply: Value,
    delay: Duration,
    seen: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

async fn chat_completions(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    upstream.seen.lock().unwrap().push((headers, body));
    tokio::time::sleep(upstream.delay).await;
    (upstream.status, Json(upstream.reply.clone()))
}

/// Start a fake upstream answering every completion with `reply`.
async fn spawn_upstream(
    status: StatusCode,
    reply: Value,
    delay: Duration,
) -> (SocketAddr, Upstream) {
    let upstream = Upstream {
        status,
        reply,
        delay,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = axum::Router::new()
        .route("/api/v1/chat/completions", post(chat_completions))
        .with_state(upstream.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, upstream)
}

fn config_for(addr: SocketAddr) -> CompletionConfig {
    CompletionConfig::new(Some("sk-or-test-key".to_string()))
        .unwrap()
        .with_api_base(format!("http://{addr}/api/v1"))
}

async fn ask_through(config: CompletionConfig, request: &AdviceRequest) -> Outcome {
    let client = OpenRouterClient::new(config).unwrap();
    AskAssistantUseCase::new(Arc::new(client)).execute(request).await
}

#[tokio::test]
async fn test_message_content_answer() {
    let (addr, _) = spawn_upstream(
        StatusCode::OK,
        json!({"choices": [{"message": {"content": "X"}}]}),
        Duration::ZERO,
    )
    .await;

    let outcome = ask_through(config_for(addr), &AdviceRequest::new("q")).await;
    assert_eq!(outcome, Outcome::Answer("X".to_string()));
}

#[tokio::test]
async fn test_flat_text_answer() {
    let (addr, _) =
        spawn_upstream(StatusCode::OK, json!({"choices": [{"text": "Y"}]}), Duration::ZERO).await;

    let outcome = ask_through(config_for(addr), &AdviceRequest::new("q")).await;
    assert_eq!(outcome, Outcome::Answer("Y".to_string()));
}

#[tokio::test]
async fn test_error_payload_with_error_status() {
    let (addr, _) = spawn_upstream(
        StatusCode::UNAUTHORIZED,
        json!({"error": {"message": "bad key", "code": 401}}),
        Duration::ZERO,
    )
    .await;

    let outcome = ask_through(config_for(addr), &AdviceRequest::new("q")).await;
    assert_eq!(outcome, Outcome::Failure("API error: bad key".to_string()));
}

#[tokio::test]
async fn test_empty_object_is_unexpected_format() {
    let (addr, _) = spawn_upstream(StatusCode::OK, json!({}), Duration::ZERO).await;

    let outcome = ask_through(config_for(addr), &AdviceRequest::new("q")).await;
    assert_eq!(
        outcome,
        Outcome::Failure("Error: Unexpected response format from API".to_string())
    );
}

#[tokio::test]
async fn test_timeout_is_transport_failure() {
    let (addr, upstream) = spawn_upstream(
        StatusCode::OK,
        json!({"choices": [{"text": "too late"}]}),
        Duration::from_secs(5),
    )
    .await;
    let config = config_for(addr).with_timeout(Duration::from_millis(200));

    let outcome = ask_through(config, &AdviceRequest::new("q")).await;

    assert!(outcome.is_failure());
    assert!(outcome.text().starts_with("An error occurred:"), "{}", outcome.text());
    assert_eq!(upstream.seen.lock().unwrap().len(), 1, "no retry expected");
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = ask_through(config_for(addr), &AdviceRequest::new("q")).await;

    assert!(outcome.is_failure());
    assert!(outcome.text().starts_with("An error occurred:"), "{}", outcome.text());
}

#[tokio::test]
async fn test_wire_request_shape() {
    let (addr, upstream) = spawn_upstream(
        StatusCode::OK,
        json!({"choices": [{"message": {"content": "ok"}}]}),
        Duration::ZERO,
    )
    .await;

    let request = AdviceRequest::new("Calculate the ROI for a 10kW solar system in California")
        .with_expertise("technical");
    ask_through(config_for(addr), &request).await;

    let seen = upstream.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (headers, body) = &seen[0];

    assert_eq!(headers["authorization"], "Bearer sk-or-test-key");
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["http-referer"], "https://localhost:7860");

    assert_eq!(body["model"], "mistralai/mistral-7b-instruct");
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["max_tokens"], 500);
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(
        body["messages"][1]["content"],
        "User expertise level: technical\nQuery: Calculate the ROI for a 10kW solar system in California"
    );
    assert!(body.get("expertise").is_none());
}

#[tokio::test]
async fn test_referer_can_be_omitted() {
    let (addr, upstream) =
        spawn_upstream(StatusCode::OK, json!({"choices": [{"text": "ok"}]}), Duration::ZERO).await;
    let client = OpenRouterClient::new(config_for(addr).with_referer(None)).unwrap();

    client.complete("system", "user").await.unwrap();

    let seen = upstream.seen.lock().unwrap();
    assert!(seen[0].0.get("http-referer").is_none());
}

#[tokio::test]
async fn test_concurrent_callers_get_their_own_answers() {
    async fn echo(Json(body): Json<Value>) -> Json<Value> {
        let user = body["messages"][1]["content"].clone();
        Json(json!({"choices": [{"message": {"content": user}}]}))
    }

    let app = axum::Router::new().route("/api/v1/chat/completions", post(echo));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = OpenRouterClient::new(config_for(addr)).unwrap();
    let use_case = Arc::new(AskAssistantUseCase::new(Arc::new(client)));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let use_case = use_case.clone();
            tokio::spawn(async move { (i, use_case.ask(&format!("question {i}"), "general").await) })
        })
        .collect();

    for handle in handles {
        let (i, outcome) = handle.await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Answer(format!("User expertise level: general\nQuery: question {i}"))
        );
    }
}
