//! # Ridge Demo
//!
//! Serves the ridge demonstration page, an Alpine.js toggle switch and a
//! masked date input, over HTTP or HTTPS.
//!
//! ```no_run
//! use ridge_demo::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder().port(3000).build()?.run().await
//! }
//! ```

pub mod logging;
pub mod page;
pub mod router;

use anyhow::{Context, Result, ensure};
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use ridge::domain::config::{DemoConfig, SslConfig};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: DemoConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: DemoConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// # Errors
    /// Fails when TLS is configured but its certificate or key file is missing.
    pub fn build(self) -> Result<Server> {
        if let Some(ssl) = &self.cfg.server.ssl {
            check_tls_files(ssl)?;
        }
        Ok(Server { config: self.cfg })
    }
}

#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    config: DemoConfig,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    #[must_use]
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.config.server.address, self.config.server.port)
    }

    #[must_use]
    pub const fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Serves until Ctrl+C or SIGTERM, then drains open connections.
    ///
    /// # Errors
    /// Fails when the listener cannot bind or the TLS material does not load.
    pub async fn run(self) -> Result<()> {
        let address = self.address();
        let app = router::init(self.config.clone()).into_make_service();

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(drain_on_signal(handle.clone()));

        let served = match &self.config.server.ssl {
            Some(ssl) => {
                let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                    .await
                    .context("Failed to load TLS certificate and key")?;
                info!(%address, "Serving https");
                axum_server::bind_rustls(address, tls).handle(handle).serve(app).await
            }
            None => {
                info!(%address, "Serving http");
                axum_server::bind(address).handle(handle).serve(app).await
            }
        };
        served.with_context(|| format!("Server on {address} failed"))?;

        info!("Server stopped");
        Ok(())
    }
}

fn check_tls_files(ssl: &SslConfig) -> Result<()> {
    for (what, file) in [("certificate", &ssl.cert), ("key", &ssl.key)] {
        ensure!(file.is_file(), "TLS {what} file not found: {}", file.display());
    }
    Ok(())
}

async fn drain_on_signal(handle: Handle<SocketAddr>) {
    match shutdown_signal().await {
        Ok(()) => {
            info!("Shutdown signal received, draining connections");
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        }
        Err(e) => error!("Cannot listen for shutdown signals: {e:#}"),
    }
}

async fn shutdown_signal() -> Result<()> {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = signal::ctrl_c() => res.context("Failed to install Ctrl+C handler"),
        res = terminate => res,
    }
}
