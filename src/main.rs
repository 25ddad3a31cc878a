//! landmarkd entry point
//!
//! This is a minimal entrypoint that:
//! 1. Builds the HTTP server with its default configuration
//! 2. Runs it until the process is terminated
//! 3. Prints errors to stderr
//! 4. Exits with non-zero on failure
//!
//! All logic is delegated to the http_server module.

use landmarkd::http_server::HttpServer;

#[tokio::main]
async fn main() {
    let server = HttpServer::new();
    if let Err(e) = server.start().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
