//! Admin session state.

/// Session state derived from the stored bearer token.
///
/// The console only checks token *presence*; validity is the remote
/// service's call and shows up as a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No token stored.
    #[default]
    Guest,
    /// A token is stored and attached to every API call.
    Admin { token: String },
}

impl SessionState {
    /// Build a session from an optionally stored token.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Admin { token },
            _ => Self::Guest,
        }
    }

    /// Whether the session can enter guarded routes.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Admin { .. })
    }

    /// The bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Admin { token } => Some(token),
            Self::Guest => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_missing_token_is_guest() {
        assert_eq!(SessionState::from_token(None), SessionState::Guest);
        assert_eq!(SessionState::from_token(Some(String::new())), SessionState::Guest);
        assert!(!SessionState::Guest.is_authenticated());
    }

    #[test]
    fn stored_token_authenticates() {
        let session = SessionState::from_token(Some("jwt-abc".into()));
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("jwt-abc"));
    }
}
