//! Framework-free domain logic.
//!
//! Everything in here is plain Rust with no Leptos dependency, so the
//! archive's consistency rules can be unit-tested natively:
//!
//! - [`PageCursor`] - page navigation and the "has next" heuristic
//! - [`EditSession`] - single in-place rename session
//! - [`validate_submission`] - local create() validation
//! - [`PreviewHandle`] - scoped object-URL preview resource
//! - [`session`] - bearer token persistence in localStorage
//! - [`ApiError`] - request layer error taxonomy

pub mod error;
mod edit;
mod page;
mod preview;
pub mod session;
mod upload;

pub use edit::EditSession;
pub use error::ApiError;
pub use page::{has_more, PageCursor};
pub use preview::PreviewHandle;
pub use upload::{validate_submission, SubmissionIssue};
