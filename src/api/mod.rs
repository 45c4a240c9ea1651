//! API layer - HTTP endpoints and middleware

pub mod auth;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod status;
pub mod types;

pub use middleware::RequireSession;
pub use router::create_router;
pub use state::AppState;
