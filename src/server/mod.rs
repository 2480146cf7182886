//! Contact endpoint: accepts form submissions and forwards them by email.

mod error;
mod mail;
mod router;

pub use error::ContactApiError;
pub use mail::{
    compose_email, CredentialSource, EmailMessage, MailCredentials, MailError, Mailer,
    RelayMailer, PASS_ENV_VAR, USER_ENV_VAR,
};
pub use router::{build_router, HealthStatus, ServerState};

use std::future::IntoFuture;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::cancel::CancelToken;
use crate::config::ServerConfig;

/// How many ports above the configured one `try_bind` tries.
const PORT_FALLBACK_RANGE: u16 = 20;

pub struct ContactServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive to prevent port race conditions.
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    state: ServerState,
    shutdown: CancelToken,
}

impl ContactServer {
    pub fn new(config: &ServerConfig, mailer: Arc<dyn Mailer>, credentials: CredentialSource) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            state: ServerState {
                mailer,
                credentials,
                recipient: config.recipient.clone(),
            },
            shutdown: CancelToken::new(),
        }
    }

    /// Bind to `bind_addr`, falling back to the following ports if busy.
    ///
    /// Port 0 asks the OS for any free port.
    pub async fn try_bind(&mut self, bind_addr: &str) -> Result<SocketAddr, Box<dyn std::error::Error + Send + Sync>> {
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

        let start_port = bind_addr.port();
        let end_port = if start_port == 0 {
            0
        } else {
            start_port.saturating_add(PORT_FALLBACK_RANGE)
        };

        for port in start_port..=end_port {
            let try_addr = SocketAddr::new(bind_addr.ip(), port);
            match TcpListener::bind(try_addr).await {
                Ok(listener) => {
                    let actual_addr = listener.local_addr()?;
                    self.addr = actual_addr;
                    self.listener = Some(listener);
                    tracing::info!("Contact endpoint bound to {}", actual_addr);
                    return Ok(actual_addr);
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                }
            }
        }

        Err(format!("Could not find available port in range {}-{}", start_port, end_port).into())
    }

    /// URL of the contact route on the bound address.
    ///
    /// A wildcard bind (`0.0.0.0`, `::`) is reached through loopback.
    pub fn contact_url(&self) -> String {
        let mut addr = self.addr;
        if addr.ip().is_unspecified() {
            addr.set_ip(match addr.ip() {
                IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
                IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
            });
        }
        format!("http://{}/api/contact", addr)
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until the handle requests shutdown.
    ///
    /// Call try_bind() before run().
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let listener = self.listener.ok_or("try_bind() must be called before run()")?;

        tracing::info!("Starting contact endpoint on {}", self.addr);

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .into_future()
            .await?;

        tracing::info!("Contact endpoint shut down");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: CancelToken,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}
