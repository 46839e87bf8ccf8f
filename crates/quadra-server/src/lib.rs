//! HTTP presentation boundary for the quadrant chart engine
//!
//! This crate exposes the chart engine over plain request/response HTTP: a
//! client submits one discriminated action per request and receives the full
//! render payload derived from the post-mutation state, so no client ever
//! observes a chart that disagrees with the roster or the export. The
//! session sits behind a single async mutex, which serializes every mutation
//! (including its blocking logo fetch) exactly as the engine's single-writer
//! contract requires.

pub mod error;

pub use error::{Result, ServerError};

// Re-export commonly used types from the protocol crate
pub use quadra_types::{Action, Quadrant, RenderPayload};

use axum::extract::{Json as AxumJson, State};
use axum::http::{header, StatusCode};
use axum::response::Json;
use axum::routing::{get, options, post};
use axum::{middleware, Router};
use quadra_core::ChartSession;
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Configuration for the chart server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Enable CORS
    pub enable_cors: bool,
    /// CORS allowed origins (if None, allows any origin)
    pub cors_origins: Option<Vec<String>>,
    /// Enable request logging
    pub enable_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            enable_cors: true,
            cors_origins: None, // Allow any origin
            enable_logging: true,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Parse and set the bind address from a string.
    pub fn with_bind_addr_str(mut self, addr: &str) -> Result<Self> {
        self.bind_addr = addr
            .parse()
            .map_err(|e| ServerError::config_error(format!("Invalid bind address: {}", e)))?;
        Ok(self)
    }

    /// Enable or disable CORS.
    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    /// Set allowed CORS origins.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request logging.
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }
}

/// Shared application state: the single-writer chart session.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<ChartSession>>,
}

/// Handler for the /payload GET endpoint.
async fn payload_handler(State(state): State<AppState>) -> Json<RenderPayload> {
    let session = state.session.lock().await;
    Json(session.render())
}

/// Handler for the /action POST endpoint.
///
/// Applies exactly one action and answers with the payload derived from the
/// post-mutation state.
async fn action_handler(
    State(state): State<AppState>,
    AxumJson(action): AxumJson<Action>,
) -> Json<RenderPayload> {
    log::debug!("Applying action: {:?}", action);
    let mut session = state.session.lock().await;
    Json(session.apply(action).await)
}

/// Handler for the /export/csv GET endpoint.
///
/// Serves the raw CSV bytes of the full roster as a direct download.
async fn export_csv_handler(
    State(state): State<AppState>,
) -> std::result::Result<impl axum::response::IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let session = state.session.lock().await;
    match session.export_csv() {
        Ok(bytes) => Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", quadra_core::export::EXPORT_FILENAME),
                ),
            ],
            bytes,
        )),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to encode export",
                    "details": e.to_string(),
                    "timestamp": chrono::Utc::now()
                })),
            ))
        }
    }
}

/// The chart HTTP server.
pub struct ChartServer {
    session: Arc<Mutex<ChartSession>>,
    config: ServerConfig,
}

impl ChartServer {
    /// Create a new server around a session with default configuration.
    pub fn new(session: ChartSession) -> Self {
        Self::with_config(session, ServerConfig::default())
    }

    /// Create a new server with custom configuration.
    pub fn with_config(session: ChartSession, config: ServerConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            config,
        }
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the Axum router with all routes and middleware.
    pub fn build_router(&self) -> Router {
        let state = AppState {
            session: self.session.clone(),
        };

        let mut router = Router::new()
            .route(
                "/health",
                get(|| async {
                    Json(HealthResponse {
                        status: "healthy".to_string(),
                        timestamp: chrono::Utc::now(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                    })
                }),
            )
            .route("/payload", get(payload_handler))
            .route("/action", post(action_handler))
            .route("/export/csv", get(export_csv_handler))
            // CORS preflight
            .route("/payload", options(|| async { StatusCode::OK }))
            .route("/action", options(|| async { StatusCode::OK }))
            .route("/export/csv", options(|| async { StatusCode::OK }))
            .with_state(state);

        if self.config.enable_logging {
            router =
                router.layer(middleware::from_fn(
                    |request: axum::http::Request<axum::body::Body>,
                     next: axum::middleware::Next| async {
                        let request_id = uuid::Uuid::new_v4().to_string();
                        let method = request.method().clone();
                        let uri = request.uri().clone();
                        log::info!("Request {} {} {}", request_id, method, uri);

                        let start = std::time::Instant::now();
                        let response = next.run(request).await;
                        let duration = start.elapsed();
                        log::info!("Response {} completed in {:?}", request_id, duration);

                        response
                    },
                ));
        }

        router = router.layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors_layer = if let Some(ref origins) = self.config.cors_origins {
                let origins: std::result::Result<Vec<_>, _> =
                    origins.iter().map(|s| s.parse()).collect();
                match origins {
                    Ok(origins) => CorsLayer::new()
                        .allow_origin(origins)
                        .allow_methods(Any)
                        .allow_headers(Any),
                    Err(_) => CorsLayer::permissive(),
                }
            } else {
                CorsLayer::permissive()
            };
            router = router.layer(cors_layer);
        }

        router
    }

    /// Start the server and listen for connections.
    ///
    /// This method will block until the server is shut down.
    pub async fn serve(self) -> Result<()> {
        let router = self.build_router();
        let listener = TcpListener::bind(self.config.bind_addr)
            .await
            .map_err(|e| {
                ServerError::config_error(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_addr, e
                ))
            })?;

        log::info!("chart server starting on {}", self.config.bind_addr);
        log::info!("Health check: http://{}/health", self.config.bind_addr);
        log::info!("Payload endpoint: http://{}/payload", self.config.bind_addr);
        log::info!("Action endpoint: http://{}/action", self.config.bind_addr);
        log::info!("CSV download: http://{}/export/csv", self.config.bind_addr);

        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Start the server with graceful shutdown support.
    ///
    /// The server will shut down when the provided shutdown signal is received.
    pub async fn serve_with_shutdown<F>(self, shutdown_signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let listener = TcpListener::bind(self.config.bind_addr)
            .await
            .map_err(|e| {
                ServerError::config_error(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_addr, e
                ))
            })?;

        log::info!(
            "chart server starting on {} with graceful shutdown",
            self.config.bind_addr
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| ServerError::internal(format!("Server error: {}", e)))?;

        log::info!("chart server shut down gracefully");
        Ok(())
    }
}

/// Utility function to create a shutdown signal from Ctrl+C.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            log::info!("Received SIGTERM, shutting down...");
        },
    }
}
