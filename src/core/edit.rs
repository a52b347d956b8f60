//! In-place rename session.
//!
//! At most one asset is "in edit" at a time. Starting a session on another
//! asset replaces the current one. The session is cleared on successful save
//! or explicit cancel; a page change deliberately does not clear it, matching
//! the shipped behavior (the session can outlive the row it points at).

/// A pending rename: the target asset plus the draft title buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Identifier of the asset being renamed.
    pub id: String,
    /// Draft title, seeded from the asset's current title.
    pub draft: String,
}

impl EditSession {
    /// Begin editing an asset, seeding the draft with its current title.
    pub fn begin(id: impl Into<String>, current_title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            draft: current_title.into(),
        }
    }

    /// Whether this session targets the given asset.
    pub fn targets(&self, id: &str) -> bool {
        self.id == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_seeds_draft_from_current_title() {
        let session = EditSession::begin("a1", "Harbor at dusk");
        assert_eq!(session.draft, "Harbor at dusk");
        assert!(session.targets("a1"));
        assert!(!session.targets("a2"));
    }

    #[test]
    fn at_most_one_session_when_stored_in_an_option() {
        // The controller stores Option<EditSession>; beginning a second
        // session replaces the first rather than stacking.
        let mut slot = Some(EditSession::begin("a1", "one"));
        slot = Some(EditSession::begin("a2", "two"));
        assert!(slot.as_ref().unwrap().targets("a2"));
    }
}
