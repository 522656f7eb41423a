use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to create socket")]
    Socket(#[source] std::io::Error),
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to listen on {addr}")]
    Listen {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// The accept loop. Owns the listening socket; every accepted connection gets
/// its own task.
pub struct Listener {
    inner: TcpListener,
    config: Arc<Config>,
}

impl Listener {
    pub fn bind(config: Arc<Config>) -> Result<Self, ServerError> {
        let addr = config.listen_addr();

        let socket = TcpSocket::new_v4().map_err(ServerError::Socket)?;
        socket.set_reuseaddr(true).map_err(ServerError::Socket)?;
        socket
            .bind(addr)
            .map_err(|source| ServerError::Bind { addr, source })?;
        let inner = socket
            .listen(config.server.backlog)
            .map_err(|source| ServerError::Listen { addr, source })?;

        Ok(Self { inner, config })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Accepts forever. Never waits on a worker; accept errors are logged and
    /// skipped.
    pub async fn run(self) {
        loop {
            let (socket, peer) = match self.inner.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to accept connection");
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let config = Arc::clone(&self.config);
            tokio::spawn(async move {
                let conn = Connection::new(socket, peer, config);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {:#}", peer, e);
                }
            });
        }
    }
}

/// Binds according to `config` and serves until the process ends.
pub async fn run(config: Arc<Config>) -> anyhow::Result<()> {
    let listener = Listener::bind(config)?;
    info!("Listening on http://{}", listener.local_addr()?);
    listener.run().await;
    Ok(())
}
