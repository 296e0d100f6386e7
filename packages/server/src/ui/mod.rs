//! HTTP server for hotel access.

mod handler;
pub mod identity;
pub mod router;
mod runner;
mod signal;
pub mod state;

pub use identity::{AuthenticatedUser, USER_ID_HEADER};
pub use router::{build_app, build_router};
pub use runner::{run, serve};
pub use state::AppState;
