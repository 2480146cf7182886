//! Notification email composition and hand-off.

use std::time::Duration;

use async_trait::async_trait;
use html_escape::encode_text;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactForm;

pub const USER_ENV_VAR: &str = "EMAIL_USER";
pub const PASS_ENV_VAR: &str = "EMAIL_PASS";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Mail relay unreachable: {0}")]
    Relay(#[source] reqwest::Error),

    #[error("Mail relay returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sender account for outgoing mail.
#[derive(Clone, PartialEq, Eq)]
pub struct MailCredentials {
    pub user: String,
    pub pass: String,
}

impl std::fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailCredentials")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

/// Where the endpoint looks up credentials on each request.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// `EMAIL_USER` / `EMAIL_PASS`.
    Env,
    Fixed(Option<MailCredentials>),
}

impl CredentialSource {
    /// `None` if either value is missing or empty.
    pub fn resolve(&self) -> Option<MailCredentials> {
        match self {
            CredentialSource::Env => {
                let user = std::env::var(USER_ENV_VAR).ok()?;
                let pass = std::env::var(PASS_ENV_VAR).ok()?;
                (!user.is_empty() && !pass.is_empty()).then_some(MailCredentials { user, pass })
            }
            CredentialSource::Fixed(credentials) => credentials.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Build the notification for one submission.
pub fn compose_email(form: &ContactForm, from: &str, to: &str) -> EmailMessage {
    let message = encode_text(&form.message).replace('\n', "<br>");
    let html = format!(
        "<div>\n  <h2>New message from your portfolio website</h2>\n  \
<p><strong>Name:</strong> {}</p>\n  \
<p><strong>Email:</strong> {}</p>\n  \
<p><strong>Subject:</strong> {}</p>\n  \
<p><strong>Message:</strong></p>\n  \
<p>{}</p>\n</div>\n",
        encode_text(&form.name),
        encode_text(&form.email),
        encode_text(&form.subject),
        message,
    );

    EmailMessage {
        from: from.to_string(),
        to: to.to_string(),
        subject: format!("New Contact Form Submission: {}", form.subject),
        html,
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        credentials: &MailCredentials,
        message: &EmailMessage,
    ) -> Result<(), MailError>;
}

/// Hands messages to an HTTP mail relay as JSON, authenticated with the
/// sender credentials.
pub struct RelayMailer {
    client: Client,
    relay_url: String,
}

impl RelayMailer {
    pub fn new(relay_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            relay_url: relay_url.into(),
        })
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send(
        &self,
        credentials: &MailCredentials,
        message: &EmailMessage,
    ) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.relay_url)
            .basic_auth(&credentials.user, Some(&credentials.pass))
            .json(message)
            .send()
            .await
            .map_err(MailError::Relay)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(MailError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
