//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! This is the unified entry point for the landmark API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::landmark_routes::{landmark_routes, LandmarkState};
use super::logging::log_requests;

/// HTTP Server for the landmark API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let state = Arc::new(LandmarkState::new());
        Self::with_state(config, state)
    }

    /// Create a new HTTP server over a caller-supplied state (used to swap
    /// in a custom store)
    pub fn with_state(config: HttpServerConfig, state: Arc<LandmarkState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<LandmarkState>) -> Router {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: any origin is allowed
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Landmark CRUD routes
            .merge(landmark_routes(state))
            // Apply CORS middleware
            .layer(cors)
            // Access log, outermost so the status and duration cover the
            // whole request
            .layer(middleware::from_fn(log_requests))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        println!("Starting landmark server on {}", addr);
        println!("Health check: http://{}/health", addr);
        println!("API endpoints:");
        println!("  GET    http://{}/landmarks", addr);
        println!("  GET    http://{}/landmarks/{{id}}", addr);
        println!("  POST   http://{}/landmarks", addr);
        println!("  PUT    http://{}/landmarks/{{id}}", addr);
        println!("  DELETE http://{}/landmarks/{{id}}", addr);

        let listener = TcpListener::bind(addr).await?;

        let addr_text = addr.to_string();
        Logger::info("SERVER_STARTED", &[("addr", addr_text.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
