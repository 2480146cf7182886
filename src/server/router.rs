use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::contact::ContactForm;

use super::error::ContactApiError;
use super::mail::{compose_email, CredentialSource, Mailer};

/// Shared by all handlers.
#[derive(Clone)]
pub struct ServerState {
    pub mailer: Arc<dyn Mailer>,
    pub credentials: CredentialSource,
    pub recipient: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/contact",
            post(submit_contact).fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "termfolio",
    })
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "message": "Method not allowed" })),
    )
}

/// Credentials are checked before the payload, so a misconfigured server
/// reports the configuration error for any request.
async fn submit_contact(
    State(state): State<ServerState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ContactApiError> {
    let Some(credentials) = state.credentials.resolve() else {
        tracing::error!("Missing email configuration");
        return Err(ContactApiError::MissingCredentials);
    };

    let Json(form) = payload.map_err(|e| ContactApiError::InvalidPayload(e.body_text()))?;

    let email = compose_email(&form, &credentials.user, &state.recipient);
    if let Err(err) = state.mailer.send(&credentials, &email).await {
        tracing::error!(error = %err, "Error sending email");
        return Err(err.into());
    }

    tracing::info!(subject = %form.subject, "Contact email sent");
    Ok(Json(serde_json::json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::mail::{EmailMessage, MailCredentials, MailError};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use http_body_util::BodyExt;
    use parking_lot::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<EmailMessage>>,
        fail: bool,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(
            &self,
            _credentials: &MailCredentials,
            message: &EmailMessage,
        ) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Rejected {
                    status: 421,
                    body: "try later".into(),
                });
            }
            self.sent.lock().push(message.clone());
            Ok(())
        }
    }

    fn creds() -> CredentialSource {
        CredentialSource::Fixed(Some(MailCredentials {
            user: "site@example.com".into(),
            pass: "app-password".into(),
        }))
    }

    fn router(mailer: Arc<RecordingMailer>, credentials: CredentialSource) -> Router {
        build_router(ServerState {
            mailer,
            credentials,
            recipient: "inbox@example.com".into(),
        })
    }

    fn contact_request(method: Method, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const VALID: &str =
        r#"{"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello"}"#;

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_submission_sends_mail() {
        let mailer = Arc::new(RecordingMailer::default());
        let response = router(mailer.clone(), creds())
            .oneshot(contact_request(Method::POST, VALID))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!({"success": true}));

        let sent = mailer.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "site@example.com");
        assert_eq!(sent[0].to, "inbox@example.com");
        assert_eq!(sent[0].subject, "New Contact Form Submission: Hi");
    }

    #[tokio::test]
    async fn missing_credentials_reports_configuration_error() {
        let mailer = Arc::new(RecordingMailer::default());
        let response = router(mailer.clone(), CredentialSource::Fixed(None))
            .oneshot(contact_request(Method::POST, VALID))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({
                "success": false,
                "message": "Server email configuration error"
            })
        );
        assert!(mailer.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn non_post_is_method_not_allowed() {
        let mailer = Arc::new(RecordingMailer::default());
        let response = router(mailer, creds())
            .oneshot(contact_request(Method::GET, ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"message": "Method not allowed"})
        );
    }

    #[tokio::test]
    async fn mail_failure_is_reported() {
        let mailer = Arc::new(RecordingMailer {
            fail: true,
            ..Default::default()
        });
        let response = router(mailer, creds())
            .oneshot(contact_request(Method::POST, VALID))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to send email");
        assert!(body["error"].as_str().unwrap().contains("try later"));
    }

    #[tokio::test]
    async fn malformed_payload_is_bad_request() {
        let mailer = Arc::new(RecordingMailer::default());
        let response = router(mailer, creds())
            .oneshot(contact_request(Method::POST, r#"{"name":"Ada"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn health_reports_service() {
        let mailer = Arc::new(RecordingMailer::default());
        let response = router(mailer, creds())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "termfolio");
    }
}
