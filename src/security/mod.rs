//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (security headers)
//! Incoming request:
//!     → body size limit (tower-http, configured in http::server)
//! ```

pub mod headers;
