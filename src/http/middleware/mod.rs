//! Request middleware.

pub mod legacy_redirect;

pub use legacy_redirect::legacy_redirect_middleware;
