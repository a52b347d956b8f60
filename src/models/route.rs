//! Hash-based application routes.
//!
//! The URL hash is the source of truth for navigation:
//! - `#/login` → login form
//! - `#/` (or anything else) → admin dashboard
//!
//! The dashboard route is guarded by token presence only; whether the token
//! is actually valid is the remote service's concern and surfaces as a 401
//! on the first API call.

use crate::utils::dom;

/// Application route derived from the URL hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Login form (`#/login`).
    Login,
    /// Admin dashboard (`#/`). Requires a stored token.
    #[default]
    Dashboard,
}

impl AppRoute {
    /// Parse a route from a raw hash fragment (without the leading `#`).
    pub fn parse(hash: &str) -> Self {
        match hash.trim_start_matches('/').trim_end_matches('/') {
            "login" => Self::Login,
            _ => Self::Dashboard,
        }
    }

    /// Read the current route from the browser URL.
    pub fn current() -> Self {
        Self::parse(&dom::get_hash())
    }

    /// The hash fragment for this route, including the `#` prefix.
    pub fn hash(self) -> &'static str {
        match self {
            Self::Login => "#/login",
            Self::Dashboard => "#/",
        }
    }

    /// Whether this route requires an authenticated session.
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// Navigate to this route (adds a browser history entry).
    pub fn push(self) {
        dom::set_hash(self.hash());
    }

    /// Navigate to this route without adding a history entry.
    ///
    /// Used for guard redirects so the blocked page doesn't linger in the
    /// back-button history.
    pub fn replace(self) {
        dom::replace_hash(self.hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_login_variants() {
        assert_eq!(AppRoute::parse("/login"), AppRoute::Login);
        assert_eq!(AppRoute::parse("login"), AppRoute::Login);
        assert_eq!(AppRoute::parse("/login/"), AppRoute::Login);
    }

    #[test]
    fn unknown_hashes_fall_back_to_dashboard() {
        assert_eq!(AppRoute::parse(""), AppRoute::Dashboard);
        assert_eq!(AppRoute::parse("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::parse("/images/42"), AppRoute::Dashboard);
    }

    #[test]
    fn only_dashboard_is_guarded() {
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
    }

    #[test]
    fn hash_round_trips() {
        for route in [AppRoute::Login, AppRoute::Dashboard] {
            assert_eq!(AppRoute::parse(route.hash().trim_start_matches('#')), route);
        }
    }
}
