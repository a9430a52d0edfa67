//! Not-found fallback behavior.
//!
//! # Data Flow
//! ```text
//! unmatched path
//!     → machine.rs (legacy check, countdown state)
//!     → countdown.rs (one-second timer, cancelled on unmount)
//!     → Navigator (side effect)
//! ```
//!
//! The HTTP layer renders the same plan into the 404 page
//! (`http::not_found`), so the browser follows the decision the server made.

pub mod countdown;
pub mod machine;

pub use countdown::{mount, CountdownSettings, Mounted, Navigator};
pub use machine::{FallbackMachine, FallbackPhase, Navigation};
