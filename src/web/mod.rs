//! Web server module
//!
//! Exposes the aggregator over HTTP.

mod handlers;
mod routes;
mod state;

pub use handlers::SearchParams;
pub use routes::create_router;
pub use state::AppState;
