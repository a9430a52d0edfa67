//! Page content subsystem.
//!
//! # Data Flow
//! ```text
//! request path
//!     → registry.rs (static route → page lookup)
//!     → render.rs (markdown body + metadata → template values)
//!     → templates.rs (askama documents in `templates/`)
//!     → analytics.rs (tracking snippet values, when configured)
//! ```
//!
//! # Design Decisions
//! - Pages are rows in a static table, not types
//! - Rendering is a pure function of page + render context

pub mod analytics;
pub mod registry;
pub mod render;
pub mod templates;

pub use registry::{lookup, Page, PageMeta, PAGES};
pub use render::{render_page, RenderContext};
