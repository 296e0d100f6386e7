//! Server error definitions.

use std::{io, net::SocketAddr};

use thiserror::Error;

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The server loop failed
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
