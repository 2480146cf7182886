//! Local HTTP endpoint for tests: records every request and answers from a
//! queue of canned replies (default `{"success": true}`).

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const BODY_LIMIT: usize = 1 << 20;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Canned reply for the next request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    content_type: &'static str,
    body: String,
    delay: Duration,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// `{"success": false, "message": ...}` with the given status.
    pub fn rejected(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "success": false, "message": message });
        Self {
            status,
            ..Self::json(&body.to_string())
        }
    }

    /// Non-JSON body, like a proxy's error page.
    pub fn html(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    replies: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    recorder: Recorder,
    stop: Option<oneshot::Sender<()>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let recorder = Recorder::default();
        let app = Router::new()
            .fallback(record_and_reply)
            .with_state(recorder.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock endpoint bind");
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stopped.await;
                })
                .await;
        });

        Self {
            addr,
            recorder,
            stop: Some(stop),
        }
    }

    pub async fn enqueue_response(&self, reply: MockResponse) {
        self.recorder.replies.lock().push_back(reply);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.recorder.requests.lock().clone()
    }

    /// Request bodies parsed as JSON, in arrival order.
    pub async fn captured_json(&self) -> Vec<serde_json::Value> {
        self.recorder
            .requests
            .lock()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("request body is JSON"))
            .collect()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn contact_url(&self) -> String {
        format!("{}/api/contact", self.base_url())
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn record_and_reply(State(recorder): State<Recorder>, req: Request<Body>) -> Response {
    let (parts, body) = req.into_parts();
    let body = to_bytes(body, BODY_LIMIT).await.unwrap_or_default().to_vec();
    recorder.requests.lock().push(CapturedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        headers: parts
            .headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect(),
        body,
    });

    let reply = recorder
        .replies
        .lock()
        .pop_front()
        .unwrap_or_else(|| MockResponse::json(r#"{"success": true}"#));
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap();
    (status, [(header::CONTENT_TYPE, reply.content_type)], reply.body).into_response()
}
