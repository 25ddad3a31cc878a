//! Request Logging Middleware
//!
//! Logs every request as `METHOD URL - STATUS - DURATIONms` once the
//! response has been produced.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log one line per request to stdout
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    println!(
        "{} {} - {} - {}ms",
        method,
        uri,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}
