use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use lettre::{message::Mailbox, Address};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    error::mail::MailError, mail::MailTransport, model::mail::OutboundMail, router::router,
    state::AppState,
};


/// Transport that records every message instead of delivering it.
struct RecordingTransport {
    sent: Mutex<Vec<OutboundMail>>,
    fail: bool,
}

impl RecordingTransport {
    fn new(fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail,
        }
    }

    fn sent(&self) -> Vec<OutboundMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, mail: OutboundMail) -> Result<String, MailError> {
        if self.fail {
            let err = "relay-rejected".parse::<Address>().unwrap_err();
            return Err(MailError::Address(err));
        }

        self.sent.lock().unwrap().push(mail);
        Ok("<test-message@example.com>".to_string())
    }
}

struct TestApp {
    router: Router,
    mailer: Arc<RecordingTransport>,
    // Keeps the in-memory database alive for the duration of the test
    test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_transport(RecordingTransport::new(false)).await
    }

    async fn with_transport(transport: RecordingTransport) -> Self {
        let test = TestBuilder::new().with_event_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let mailer = Arc::new(transport);
        let from: Mailbox = "Eventos <noreply@example.com>".parse().unwrap();

        let router = router().with_state(AppState::new(db, mailer.clone(), from));

        Self {
            router,
            mailer,
            test,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Sends a request through the full router and returns the status and JSON body.
    ///
    /// An empty body is returned as `Value::Null`.
    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        match body {
            Some(body) => {
                let body = serde_json::to_string(&body).unwrap();
                self.send_raw(method, uri, Some("application/json"), body)
                    .await
            }
            None => self.send_raw(method, uri, None, String::new()).await,
        }
    }

    /// Sends `body` verbatim with the given `Content-Type`, if any.
    async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: String,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }
}

/// Tests the root route.
///
/// Expected: 200 with the API name
#[tokio::test]
async fn index_returns_api_name() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("API de Gestão de Eventos"));
}

/// Tests that the OpenAPI document lists the resource paths.
///
/// Expected: 200 with every resource path documented
#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/artistas",
        "/artistas/{id}",
        "/eventos",
        "/eventos/{id}",
        "/artistas-eventos",
        "/artistas-eventos/{artista_id}/{evento_id}",
        "/ingressos",
        "/ingressos/{id}",
        "/mail/send",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
