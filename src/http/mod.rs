//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (request ID)
//!     → middleware/legacy_redirect.rs (.html → 301, or pass through)
//!     → handlers.rs (health, sitemap, robots, page table)
//!     → not_found.rs (fallback page when no page matches)
//!     → response.rs (response construction)
//! ```

pub mod handlers;
pub mod middleware;
pub mod not_found;
pub mod request;
pub mod response;
pub mod server;
pub mod state;

pub use request::X_REQUEST_ID;
pub use server::SiteServer;
pub use state::{AppState, SiteSnapshot};
