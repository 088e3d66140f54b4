//! Preview server implementation.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Configuration for the preview server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Directory to serve
    pub dir: PathBuf,

    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Directory not found: {0}. Build the site first.")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to bind to {addr}: {source}")]
    BindError { addr: String, source: io::Error },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

/// Static file server for a built site.
pub struct PreviewServer {
    config: PreviewConfig,
}

impl PreviewServer {
    /// Create a new preview server.
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Router serving the configured directory for every path.
    pub fn router(&self) -> Router {
        Router::new()
            .fallback_service(ServeDir::new(&self.config.dir))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the listening socket without serving yet.
    pub async fn bind(self) -> Result<BoundServer, ServerError> {
        if !self.config.dir.is_dir() {
            return Err(ServerError::DirectoryNotFound(self.config.dir.clone()));
        }

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(addr.as_str())
            .await
            .map_err(|source| ServerError::BindError {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::BindError { addr, source })?;

        Ok(BoundServer {
            router: self.router(),
            dir: self.config.dir,
            listener,
            local_addr,
        })
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        self.bind().await?.serve().await
    }
}

/// A preview server with its socket bound.
pub struct BoundServer {
    router: Router,
    dir: PathBuf,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl BoundServer {
    /// Address the server is listening on.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until the process is stopped.
    pub async fn serve(self) -> Result<(), ServerError> {
        tracing::info!(
            "Serving {} at http://{}",
            self.dir.display(),
            self.local_addr
        );
        tracing::info!("Press Ctrl+C to stop");

        axum::serve(self.listener, self.router)
            .await
            .map_err(ServerError::Serve)
    }
}
