//! Application startup and lifecycle management.

use crate::config::ManualConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::ManualGenerator;
use axum::{
    body::Body,
    http::Request,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    permissive_cors_middleware, request_id_middleware, REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generator: ManualGenerator,
}

impl AppState {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            generator: ManualGenerator::new(provider),
        }
    }
}

/// Build the HTTP router. Every response, errors included, gets CORS headers.
pub fn build_router(state: AppState) -> Router {
    let generate = post(handlers::generate_manual)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/generate", generate)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(permissive_cors_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the Gemini provider described by `config`.
    pub async fn build(config: ManualConfig) -> Result<Self, AppError> {
        if config.gemini.api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail");
        }

        let provider = GeminiTextProvider::new(GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
            api_base: config.gemini.api_base.clone(),
            timeout: config.gemini.timeout,
        })
        .map_err(|e| {
            tracing::error!("Failed to initialize Gemini provider: {}", e);
            AppError::InternalError(anyhow::anyhow!(e))
        })?;

        tracing::info!(
            model = %config.gemini.model,
            api_base = %config.gemini.api_base,
            "Initialized Gemini text provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an arbitrary provider.
    pub async fn build_with_provider(
        config: ManualConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let router = build_router(AppState::new(provider));

        // Port 0 binds a random port, which tests rely on.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
