use thiserror::Error;

/// Shown when the endpoint reports failure without a message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Shown when the request never produced a usable response.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully. I'll get back to you soon!";

/// Banner text for an error status that carries no message.
pub const ERROR_BANNER_FALLBACK: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Request could not be sent or no response arrived.
    #[error("Contact endpoint unreachable: {message}")]
    Transport { message: String },

    /// Endpoint answered with a non-success status or `success: false`.
    #[error("Contact endpoint rejected the message (HTTP {status})")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// Response body was not the expected JSON.
    #[error("Invalid response from contact endpoint: {0}")]
    InvalidResponse(String),
}

impl SubmitError {
    /// Message for the inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            SubmitError::Rejected { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            SubmitError::Transport { .. } | SubmitError::InvalidResponse(_) => {
                NETWORK_ERROR_MESSAGE.to_string()
            }
        }
    }
}
