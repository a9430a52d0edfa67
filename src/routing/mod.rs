//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → rewrite.rs (legacy rule: bypass / pass through / redirect)
//!     → matcher.rs (exclusion list evaluation)
//!     → page table lookup (pages::registry) when passed through
//! ```
//!
//! # Design Decisions
//! - Rule compiled from config, immutable at runtime
//! - No regex in hot path (prefix and exact matching only)
//! - Deterministic: same input always yields the same decision

pub mod matcher;
pub mod rewrite;

pub use rewrite::{canonical_path, LegacyRedirectRule, Rewrite};
