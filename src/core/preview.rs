//! Scoped object-URL preview resource.
//!
//! A selected-but-not-yet-uploaded file is previewed through a browser
//! object URL. The URL pins the underlying blob until revoked, so the handle
//! wraps acquisition and release as an RAII pair: construction calls
//! `URL.createObjectURL`, `Drop` calls `URL.revokeObjectURL`. Storing the
//! handle in an `Option` signal then gives the required discipline for free:
//! replacing or clearing the selection (and component teardown) drops the
//! previous handle, and at most one is live at a time.

use web_sys::File;

/// Live preview handle for the currently selected file.
///
/// Purely a local rendering aid; it carries no network or persistence
/// semantics. A successful upload discards it through the page reload; a
/// failed one leaves it in place for a retry.
#[derive(Debug)]
pub struct PreviewHandle {
    url: String,
}

impl PreviewHandle {
    /// Acquire an object URL for the given file.
    ///
    /// Returns `None` if the browser refuses to create one.
    pub fn new(file: &File) -> Option<Self> {
        let url = web_sys::Url::create_object_url_with_blob(file).ok()?;
        Some(Self { url })
    }

    /// The object URL, for use as an `<img src>`.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        // Best-effort release; the browser reclaims the blob either way
        // when the document goes away.
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}
