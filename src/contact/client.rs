use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ContactConfig;

use super::error::SubmitError;
use super::form::ContactForm;

/// Delivers one contact form submission.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// Endpoint reply: `{ success, message? }`.
#[derive(Debug, Deserialize)]
struct ContactReply {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// POSTs the form as JSON to the contact endpoint.
pub struct ContactClient {
    client: Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(config: &ContactConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for ContactClient {
    async fn send(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let reply: ContactReply = response
            .json()
            .await
            .map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;

        if status.is_success() && reply.success {
            Ok(())
        } else {
            tracing::warn!(
                status = status.as_u16(),
                message = reply.message.as_deref().unwrap_or(""),
                "Contact endpoint rejected submission"
            );
            Err(SubmitError::Rejected {
                status: status.as_u16(),
                message: reply.message,
            })
        }
    }
}
