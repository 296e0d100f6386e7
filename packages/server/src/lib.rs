//! Hotel access server library.
//!
//! Lists hotels and hotel details for users whose ticket is paid, for the
//! in-person event, and includes hotel.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

use std::sync::Arc;

pub use config::ServerConfig;
pub use error::ServerError;

use infrastructure::repository::InMemoryDatabase;
use ui::AppState;

/// Run the server on an empty in-memory database.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    run_server_with(config, InMemoryDatabase::new()).await
}

/// Run the server on the given in-memory database.
pub async fn run_server_with(config: ServerConfig, db: InMemoryDatabase) -> Result<(), ServerError> {
    ui::run(config, Arc::new(AppState::in_memory(db))).await
}
