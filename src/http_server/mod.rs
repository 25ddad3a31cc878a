//! # landmarkd HTTP Server Module
//!
//! Axum-based HTTP server for the landmark collection.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/landmarks` - List and create
//! - `/landmarks/{id}` - Get, update (full replacement), delete

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod landmark_routes;
pub mod logging;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ValidationErrors};
pub use landmark_routes::{landmark_routes, LandmarkState};
pub use server::HttpServer;
