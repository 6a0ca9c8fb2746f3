//! Request Middleware
//!
//! Generic stages shared by every router:
//! - [`request_logger`] - one structured log record per request, before the handler runs
//! - [`unknown_endpoint`] - terminal fallback when no route matched
//!
//! Errors raised by handlers are turned into responses by the error
//! classifier (see [`crate::error::classify`]).

use axum::Json;
use axum::body::{Body, Bytes, HttpBody};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use serde_json::Value;

use crate::error::classify::ErrorBody;

/// Payload message of the unknown-endpoint responder
pub const UNKNOWN_ENDPOINT_MESSAGE: &str = "unknown endpoint";

/// Longest body (in characters) written to the log
pub const MAX_LOGGED_BODY_CHARS: usize = 2048;

/// Most bytes the request logger holds in memory for a single body
///
/// The api binary also caps accepted request bodies at this size.
pub const MAX_BUFFERED_BODY_BYTES: usize = 100 * 1024;

/// JSON object keys whose values never reach the log
const REDACTED_KEYS: &[&str] = &["password", "passwordHash", "password_hash"];

/// Log method, path and body, then hand the request on
///
/// Never rejects a request. At most [`MAX_BUFFERED_BODY_BYTES`] are read
/// for the log; a larger body is forwarded with its bytes intact and
/// logged as a placeholder. A body that fails mid-read reaches the
/// handler as a failing body, so its extractor rejects it.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let (parts, body) = req.into_parts();

    let (logged, body) = buffer_for_log(body).await;

    tracing::info!(
        method = %parts.method,
        path = %parts.uri.path(),
        body = %logged,
        "Incoming request"
    );

    next.run(Request::from_parts(parts, body)).await
}

/// Read up to the buffering limit and return the rendered body together
/// with a body carrying the same bytes for the handler.
async fn buffer_for_log(body: Body) -> (String, Body) {
    // 宣言された長さが上限を超える場合は一切読まない
    match body.size_hint().upper() {
        Some(len) if len > MAX_BUFFERED_BODY_BYTES as u64 => {
            return (format!("<{len} bytes not logged>"), body);
        }
        _ => {}
    }

    let mut stream = body.into_data_stream();
    let mut chunks: Vec<Bytes> = Vec::new();
    let mut buffered = 0usize;

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(chunk) => {
                buffered += chunk.len();
                chunks.push(chunk);
                if buffered > MAX_BUFFERED_BODY_BYTES {
                    let replay = futures::stream::iter(chunks.into_iter().map(Ok::<_, axum::Error>))
                        .chain(stream);
                    return (
                        format!("<more than {MAX_BUFFERED_BODY_BYTES} bytes not logged>"),
                        Body::from_stream(replay),
                    );
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to buffer request body for logging");
                let failing = futures::stream::iter([Err::<Bytes, _>(e)]);
                return ("<unreadable body>".to_string(), Body::from_stream(failing));
            }
        }
    }

    let bytes = Bytes::from(chunks.concat());
    (render_body(&bytes), Body::from(bytes))
}

/// `404 {"error": "unknown endpoint"}`
pub async fn unknown_endpoint() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(UNKNOWN_ENDPOINT_MESSAGE)),
    )
        .into_response()
}

/// Render a request body for the log
///
/// JSON is re-serialized compactly with secrets redacted; anything else is
/// logged as lossy UTF-8. An empty body renders as `{}`.
fn render_body(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "{}".to_string();
    }

    let rendered = match serde_json::from_slice::<Value>(bytes) {
        Ok(mut value) => {
            redact(&mut value);
            value.to_string()
        }
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    };

    truncate(rendered, MAX_LOGGED_BODY_CHARS)
}

fn redact(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if REDACTED_KEYS.contains(&key.as_str()) {
                    *field = Value::String("[REDACTED]".to_string());
                } else {
                    redact(field);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact),
        _ => {}
    }
}

fn truncate(s: String, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::routing::{get, post};
    use http_body_util::{BodyExt, Full, Limited};
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Records the fields of every event it sees
    #[derive(Clone, Default)]
    struct CapturedEvents(Arc<Mutex<Vec<HashMap<String, String>>>>);

    impl CapturedEvents {
        fn incoming_requests(&self) -> Vec<HashMap<String, String>> {
            self.0
                .lock()
                .unwrap()
                .iter()
                .filter(|fields| fields.get("message").map(String::as_str) == Some("Incoming request"))
                .cloned()
                .collect()
        }
    }

    struct FieldMap(HashMap<String, String>);

    impl Visit for FieldMap {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CapturedEvents {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = FieldMap(HashMap::new());
            event.record(&mut fields);
            self.0.lock().unwrap().push(fields.0);
        }
    }

    fn test_app() -> Router {
        Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .route("/hello", get(|| async { "hello" }))
            .fallback(unknown_endpoint)
            .layer(axum::middleware::from_fn(request_logger))
    }

    #[test]
    fn test_render_empty_body() {
        assert_eq!(render_body(b""), "{}");
    }

    #[test]
    fn test_render_redacts_password() {
        let rendered = render_body(br#"{"username":"root","password":"sekret"}"#);
        assert!(rendered.contains("\"username\":\"root\""));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("sekret"));
    }

    #[test]
    fn test_render_redacts_nested() {
        let rendered = render_body(br#"[{"user":{"password":"sekret"}}]"#);
        assert!(!rendered.contains("sekret"));
    }

    #[test]
    fn test_render_non_json() {
        assert_eq!(render_body(b"plain text"), "plain text");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef".to_string(), 3), "abc...");
        assert_eq!(truncate("abc".to_string(), 3), "abc");
        assert_eq!(truncate("ああああ".to_string(), 2), "ああ...");
    }

    #[tokio::test]
    async fn test_unknown_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "unknown endpoint" }));
    }

    #[tokio::test]
    async fn test_logger_preserves_body() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/echo")
                    .body(Body::from(r#"{"content":"logged and kept"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"content":"logged and kept"}"#);
    }

    #[tokio::test]
    async fn test_logger_does_not_alter_response() {
        let logged = test_app()
            .oneshot(Request::builder().uri("/hello").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let bare = Router::new()
            .route("/hello", get(|| async { "hello" }))
            .oneshot(Request::builder().uri("/hello").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(logged.status(), bare.status());
        let logged_body = logged.into_body().collect().await.unwrap().to_bytes();
        let bare_body = bare.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(logged_body, bare_body);
    }

    #[tokio::test]
    async fn test_logger_writes_one_redacted_record() {
        let captured = CapturedEvents::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(captured.clone()));

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/echo?ignored=1")
                    .body(Body::from(r#"{"username":"root","password":"sekret"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let records = captured.incoming_requests();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["method"], "POST");
        assert_eq!(records[0]["path"], "/echo");
        assert!(records[0]["body"].contains("[REDACTED]"));
        assert!(!records[0]["body"].contains("sekret"));
    }

    #[tokio::test]
    async fn test_logger_records_unknown_endpoint() {
        let captured = CapturedEvents::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(captured.clone()));

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let records = captured.incoming_requests();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["method"], "DELETE");
        assert_eq!(records[0]["path"], "/nowhere");
        assert_eq!(records[0]["body"], "{}");
    }

    #[tokio::test]
    async fn test_logger_stops_reading_streamed_body_past_limit() {
        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = pulled.clone();
        let chunks = futures::stream::iter(0..64).map(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, std::io::Error>(Bytes::from(vec![b'x'; 1024 * 1024]))
        });

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/nowhere")
                    .body(Body::from_stream(chunks))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(pulled.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_logger_forwards_oversized_body_intact() {
        let payload = vec![b'y'; MAX_BUFFERED_BODY_BYTES * 2];
        let captured = CapturedEvents::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(captured.clone()));

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/echo")
                    .body(Body::from(payload.clone()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.len(), payload.len());

        let records = captured.incoming_requests();
        assert_eq!(records.len(), 1);
        assert!(records[0]["body"].ends_with("bytes not logged>"));
    }

    #[tokio::test]
    async fn test_logger_replays_streamed_body_past_limit() {
        let chunks = futures::stream::iter(0..3)
            .map(|_| Ok::<_, std::io::Error>(Bytes::from(vec![b'z'; MAX_BUFFERED_BODY_BYTES])));

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/echo")
                    .body(Body::from_stream(chunks))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes.len(), MAX_BUFFERED_BODY_BYTES * 3);
    }

    #[tokio::test]
    async fn test_unreadable_body_is_rejected_by_extractor() {
        let body = Limited::new(Full::new(Bytes::from(vec![b'x'; 64])), 10);

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/echo")
                    .body(Body::new(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
