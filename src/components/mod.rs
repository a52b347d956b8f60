//! UI components built with Leptos.
//!
//! - [`router`] - Application routing with token-presence guard (entry point)
//! - [`login`] - Admin credential form
//! - [`dashboard`] - Console shell hosting upload and gallery panels
//! - [`gallery`] - Paginated asset list with in-place rename and delete
//! - [`upload`] - New asset form with local file preview
//! - [`toast`] - Transient notification tray
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod dashboard;
pub mod gallery;
pub mod icons;
pub mod login;
pub mod router;
pub mod toast;
pub mod upload;

pub use router::AppRouter;
