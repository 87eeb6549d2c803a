//! Client specs against an in-process fake of the upstream APIs.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use ozilly::llm::{ClientError, GroqClient, ImageClient, LogoRenderer, TextGenerator};
use serde_json::{json, Value};

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    reply: Value,
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

impl Upstream {
    fn new(status: StatusCode, reply: Value) -> Self {
        Self {
            status,
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<(Option<String>, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    upstream.requests.lock().unwrap().push((auth, body));
    (upstream.status, Json(upstream.reply.clone()))
}

/// Serve the fake on an ephemeral port and return its base URL.
async fn spawn(upstream: Upstream) -> String {
    let app = Router::new()
        .route("/chat/completions", post(record))
        .route("/images/generations", post(record))
        .with_state(upstream);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake upstream failed");
    });
    format!("http://{}", addr)
}

fn chat_reply(content: &str) -> Value {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
}

mod text_generation {
    use super::*;

    #[tokio::test]
    async fn sends_blacklisted_names_and_returns_trimmed_text() {
        let upstream = Upstream::new(
            StatusCode::OK,
            chat_reply("\n  Startup Name: Gamma\nLogo Idea: A star  \n"),
        );
        let url = spawn(upstream.clone()).await;
        let client = GroqClient::new(url, Some("gsk-test".to_string()), "Ozilly AI");
        let blacklist = vec!["Alpha".to_string(), "Beta Labs".to_string()];

        let raw = client
            .generate("a bakery", &blacklist)
            .await
            .expect("Generation failed");

        assert_eq!(raw, "Startup Name: Gamma\nLogo Idea: A star");

        let requests = upstream.requests();
        assert_eq!(requests.len(), 1);
        let (auth, body) = &requests[0];
        assert_eq!(auth.as_deref(), Some("Bearer gsk-test"));
        assert_eq!(body["model"], "llama3-70b-8192");
        assert_eq!(body["max_tokens"], 1024);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        let user = messages[1]["content"].as_str().unwrap();
        assert!(user.starts_with("a bakery\n\n"));
        assert!(user.contains("Alpha"));
        assert!(user.contains("Beta Labs"));
    }

    #[tokio::test]
    async fn empty_blacklist_sends_no_avoid_clause() {
        let upstream = Upstream::new(StatusCode::OK, chat_reply("Startup Name: X"));
        let url = spawn(upstream.clone()).await;
        let client = GroqClient::new(url, Some("k".to_string()), "Ozilly AI");

        client.generate("a bakery", &[]).await.expect("Generation failed");

        let body = &upstream.requests()[0].1;
        let sent = body.to_string();
        assert!(!sent.contains("Avoid using these names"));
        assert_eq!(body["messages"][1]["content"], "a bakery");
    }

    #[tokio::test]
    async fn missing_key_sends_no_authorization() {
        let upstream = Upstream::new(
            StatusCode::UNAUTHORIZED,
            json!({ "error": { "message": "Invalid API Key" } }),
        );
        let url = spawn(upstream.clone()).await;
        let client = GroqClient::new(url, None, "Ozilly AI");

        let err = client.generate("x", &[]).await.unwrap_err();

        assert!(matches!(err, ClientError::Unauthorized));
        assert!(upstream.requests()[0].0.is_none());
    }

    #[tokio::test]
    async fn maps_rate_limit_and_server_errors() {
        let limited = spawn(Upstream::new(StatusCode::TOO_MANY_REQUESTS, json!({}))).await;
        let err = GroqClient::new(limited, None, "Ozilly AI")
            .generate("x", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::RateLimited(_)));

        let broken = spawn(Upstream::new(StatusCode::BAD_GATEWAY, json!({}))).await;
        let err = GroqClient::new(broken, None, "Ozilly AI")
            .generate("x", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Api(msg) if msg.contains("502")));
    }

    #[tokio::test]
    async fn no_choices_is_an_empty_response() {
        let url = spawn(Upstream::new(StatusCode::OK, json!({ "choices": [] }))).await;

        let err = GroqClient::new(url, None, "Ozilly AI")
            .generate("x", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::EmptyResponse));
    }
}

mod image_generation {
    use super::*;

    #[tokio::test]
    async fn requests_one_image_and_returns_its_url() {
        let upstream = Upstream::new(
            StatusCode::OK,
            json!({ "data": [{ "url": "https://img.test/1.png" }] }),
        );
        let url = spawn(upstream.clone()).await;
        let client = ImageClient::new(url, Some("sk-test".to_string()));

        let image = client.render("A smiling cloud").await;

        assert_eq!(image.as_deref(), Some("https://img.test/1.png"));
        let (auth, body) = &upstream.requests()[0];
        assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
        assert_eq!(
            *body,
            json!({
                "model": "dall-e-3",
                "prompt": "A smiling cloud",
                "size": "1024x1024",
                "n": 1
            })
        );
    }

    #[tokio::test]
    async fn content_policy_rejection_renders_nothing() {
        let url = spawn(Upstream::new(
            StatusCode::BAD_REQUEST,
            json!({ "error": { "code": "content_policy_violation" } }),
        ))
        .await;

        let image = ImageClient::new(url, Some("sk-test".to_string()))
            .render("something")
            .await;

        assert!(image.is_none());
    }

    #[tokio::test]
    async fn unreachable_endpoint_renders_nothing() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let image = ImageClient::new(format!("http://{}", addr), None)
            .render("something")
            .await;

        assert!(image.is_none());
    }
}
