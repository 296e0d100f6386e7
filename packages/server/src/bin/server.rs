//! Hotel listing server.
//!
//! Serves `GET /hotels` and `GET /hotels/{hotelId}` to users with a paid,
//! in-person ticket that includes hotel.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lodging-server -- --port 8080
//! ```

use clap::Parser;
use lodging_server::ServerConfig;
use lodging_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = lodging_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
