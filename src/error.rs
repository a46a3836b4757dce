use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can occur while starting or running the web server
#[derive(Debug, Error)]
pub enum ServeError {
    /// The host/port combination did not parse as a socket address
    #[error("Invalid host/port format: {0}")]
    InvalidBindAddress(#[from] std::net::AddrParseError),

    /// A custom stylesheet was requested but could not be read
    #[error("Failed to read stylesheet at {path}: {source}")]
    StylesheetRead {
        path: String,
        source: std::io::Error,
    },

    /// Binding the listener failed, usually because the port is taken
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The server exited with an error while running
    #[error("Server error: {0}")]
    Serve(std::io::Error),
}
