//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Asset`] - Image assets owned by the remote asset service
//! - [`AppRoute`] - Hash-based navigation with auth guarding
//! - [`SessionState`] - Admin session (token presence) state
//! - [`Toast`], [`ToastKind`] - Transient notification surface

mod asset;
mod route;
mod session;
mod toast;

pub use asset::Asset;
pub use route::AppRoute;
pub use session::SessionState;
pub use toast::{Toast, ToastKind};
