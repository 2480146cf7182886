//! Error types and response mapping for the contact endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::mail::MailError;

#[derive(Debug, Error)]
pub enum ContactApiError {
    /// Mail credentials are not set on the server.
    #[error("Server email configuration error")]
    MissingCredentials,

    /// Body is not a contact form payload.
    #[error("Invalid request: {0}")]
    InvalidPayload(String),

    /// The composed message could not be handed off.
    #[error("Failed to send email")]
    MailDelivery(#[from] MailError),
}

impl ContactApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactApiError::MissingCredentials => StatusCode::INTERNAL_SERVER_ERROR,
            ContactApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ContactApiError::MailDelivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            ContactApiError::MailDelivery(source) => serde_json::json!({
                "success": false,
                "message": self.to_string(),
                "error": source.to_string(),
            }),
            _ => serde_json::json!({
                "success": false,
                "message": self.to_string(),
            }),
        }
    }
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
