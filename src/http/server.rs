//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {addr}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Parses `host:port` into a socket address.
pub fn listen_addr(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let addr = format!("{}:{}", host, port);
    addr.parse().map_err(|source| ServerError::Address { addr, source })
}

/// Bind the listener and serve `app` until a shutdown signal arrives.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, host: &str, port: u16) -> Result<(), ServerError> {
    let addr = listen_addr(host, port)?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_defaults() {
        let addr = listen_addr("0.0.0.0", 8080).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_listen_addr_rejects_hostname() {
        let err = listen_addr("not an ip", 8080).unwrap_err();
        assert!(matches!(err, ServerError::Address { .. }));
    }

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = start_server(Router::new(), "127.0.0.1", port)
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
