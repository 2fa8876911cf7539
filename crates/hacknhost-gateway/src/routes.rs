//! API route handlers for the gateway.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hacknhost_knowledge::{Category, SUPPORT_EMAIL};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::server::AppState;

const MISSING_MESSAGE_ERROR: &str = "Message is required";
const MISSING_MESSAGE_RESPONSE: &str = "Please type a message so I can help you.";

/// Reply body of `POST /api/chat`.
///
/// Field order is part of the wire contract: rejections put `error` first,
/// degraded replies put `response` first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChatReply {
    /// 200 with the resolved answer.
    Answered { response: String },
    /// 200 with an apology; the request could not be processed.
    Degraded { response: String, error: String },
    /// 400; no usable message in the request.
    Rejected { error: String, response: String },
}

impl ChatReply {
    pub fn answered(response: String) -> Self {
        ChatReply::Answered { response }
    }

    pub fn degraded(error: impl Into<String>) -> Self {
        ChatReply::Degraded {
            response: format!(
                "Sorry, I'm having trouble answering right now. Please try again in a moment \
or contact {SUPPORT_EMAIL}."
            ),
            error: error.into(),
        }
    }

    pub fn rejected() -> Self {
        ChatReply::Rejected {
            error: MISSING_MESSAGE_ERROR.into(),
            response: MISSING_MESSAGE_RESPONSE.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ChatReply::Rejected { .. } => StatusCode::BAD_REQUEST,
            ChatReply::Answered { .. } | ChatReply::Degraded { .. } => StatusCode::OK,
        }
    }
}

impl IntoResponse for ChatReply {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// JavaScript-style falsiness of a JSON value.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Health check endpoint.
pub async fn health_check() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "hacknhost-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Knowledge base and matcher information.
pub async fn chat_info(State(state): State<Arc<AppState>>) -> Json<Value> {
    let knowledge = state.matcher.knowledge();
    Json(serde_json::json!({
        "entries": knowledge.len(),
        "categories": Category::ALL.iter().map(|c| c.name()).collect::<Vec<_>>(),
        "scorer": state.matcher.scorer_name(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Chat endpoint. Never fails: faults become degraded 200 replies.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> ChatReply {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Chat request body rejected: {}", e.body_text());
            return ChatReply::degraded(e.body_text());
        }
    };
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Chat request body is not valid JSON: {e}");
            return ChatReply::degraded(format!("Invalid request body: {e}"));
        }
    };
    if payload.is_null() {
        tracing::warn!("Chat request body is null");
        return ChatReply::degraded("Request body must be a JSON object");
    }

    let message = payload.get("message").unwrap_or(&Value::Null);
    if is_falsy(message) {
        return ChatReply::rejected();
    }
    let Some(text) = message.as_str() else {
        tracing::warn!("Chat message is not a string: {message}");
        return ChatReply::degraded("message must be a string");
    };

    let resolution = state.matcher.explain(text);
    tracing::debug!(stage = ?resolution.stage, category = ?resolution.category, "Chat resolved");
    ChatReply::answered(resolution.answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::build_router;
    use axum::body::Body;
    use axum::http::Request;
    use hacknhost_chat::Matcher;
    use hacknhost_knowledge::{FALLBACK_RESPONSE, KnowledgeBase, ResponseTemplates};
    use tower::ServiceExt;

    fn app_state() -> AppState {
        AppState::new(Matcher::new(Arc::new(KnowledgeBase::builtin())))
    }

    fn test_state() -> State<Arc<AppState>> {
        State(Arc::new(app_state()))
    }

    async fn post_chat(body: impl Into<Body>) -> (StatusCode, String) {
        let response = build_router(app_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header("content-type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    // ---- Handlers ----

    #[tokio::test]
    async fn test_health_check() {
        let json = health_check().await.0;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "hacknhost-gateway");
    }

    #[tokio::test]
    async fn test_chat_info() {
        let json = chat_info(test_state()).await.0;
        assert_eq!(json["scorer"], "server");
        assert_eq!(json["categories"].as_array().unwrap().len(), 9);
        assert!(json["entries"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_chat_answers_exact_question() {
        let body = Bytes::from(r#"{"message": "  What is HacknHost "}"#);
        let reply = chat(test_state(), Ok(body)).await;
        assert_eq!(reply.status(), StatusCode::OK);
        match reply {
            ChatReply::Answered { response } => assert!(response.starts_with("HacknHost is")),
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chat_greeting_and_fallback() {
        let reply = chat(test_state(), Ok(Bytes::from(r#"{"message": "hello there"}"#))).await;
        assert_eq!(reply, ChatReply::answered(ResponseTemplates::default().greeting));

        let body = Bytes::from(r#"{"message": "zzqqxx flibbertigibbet"}"#);
        let reply = chat(test_state(), Ok(body)).await;
        assert_eq!(reply, ChatReply::answered(FALLBACK_RESPONSE.to_string()));
    }

    #[tokio::test]
    async fn test_chat_rejects_missing_or_falsy_message() {
        for body in [
            r#"{}"#,
            r#"{"message": null}"#,
            r#"{"message": ""}"#,
            r#"{"message": false}"#,
            r#"{"message": 0}"#,
            r#"[1, 2]"#,
            r#""just a string""#,
        ] {
            let reply = chat(test_state(), Ok(Bytes::from(body))).await;
            assert_eq!(reply, ChatReply::rejected(), "body {body}");
            assert_eq!(reply.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_chat_degrades_on_faults() {
        for body in ["{not json", "", "null", r#"{"message": 42}"#, r#"{"message": ["hi"]}"#] {
            let reply = chat(test_state(), Ok(Bytes::from(body))).await;
            assert_eq!(reply.status(), StatusCode::OK, "body {body:?}");
            match reply {
                ChatReply::Degraded { response, error } => {
                    assert!(response.contains(SUPPORT_EMAIL));
                    assert!(!error.is_empty());
                }
                other => panic!("unexpected reply {other:?} for {body:?}"),
            }
        }
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&serde_json::json!(0.0)));
        assert!(!is_falsy(&serde_json::json!("0")));
        assert!(!is_falsy(&serde_json::json!({})));
        assert!(!is_falsy(&serde_json::json!(true)));
    }

    // ---- Wire format ----

    #[tokio::test]
    async fn test_router_success_body() {
        let (status, body) = post_chat(r#"{"message": "bye"}"#).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert!(json["response"].is_string());
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn test_router_rejection_shape() {
        let (status, body) = post_chat(r#"{"text": "hi"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            format!(
                r#"{{"error":"{MISSING_MESSAGE_ERROR}","response":"{MISSING_MESSAGE_RESPONSE}"}}"#
            )
        );
    }

    #[tokio::test]
    async fn test_router_degraded_shape() {
        let (status, body) = post_chat("{broken").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with(r#"{"response":"#));
        assert!(body.contains(r#""error":"Invalid request body"#));
    }

    #[tokio::test]
    async fn test_router_oversized_body_degrades() {
        let body = format!(r#"{{"message": "{}"}}"#, "hackathon ".repeat(300_000));
        let (status, body) = post_chat(body).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert!(json["response"].as_str().unwrap().contains(SUPPORT_EMAIL));
        assert!(!json["error"].as_str().unwrap().is_empty());
        assert!(body.starts_with(r#"{"response":"#));
    }

    #[tokio::test]
    async fn test_router_health() {
        let response = build_router(app_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
