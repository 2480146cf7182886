//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use termfolio::config::ContactConfig;
use termfolio::contact::{ContactClient, ContactFlow, ContactForm, FormField};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a fresh `config.toml` inside a temp dir.
///
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

// -- Contact helpers ----------------------------------------------------------

pub fn sample_form() -> ContactForm {
    ContactForm {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        subject: "Collaboration".into(),
        message: "Hello there,\nlet's build something.".into(),
    }
}

/// Contact flow posting to `endpoint` with the given success revert delay.
pub fn flow_for(endpoint: &str, success_reset: Duration) -> ContactFlow {
    let config = ContactConfig {
        endpoint: endpoint.to_string(),
        timeout_seconds: 5,
        success_reset_ms: success_reset.as_millis() as u64,
    };
    let client = ContactClient::new(&config).expect("Failed to build contact client");
    ContactFlow::new(Arc::new(client), success_reset)
}

/// Type every field of `form` into `flow` through the change handler.
pub fn fill_form(flow: &ContactFlow, form: &ContactForm) {
    for field in FormField::ALL {
        flow.handle_change(field, form.get(field));
    }
}
