//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the dashboard header.
pub const APP_NAME: &str = "Studio Archive";

/// Application version.
#[allow(dead_code)]
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL for the remote asset service API.
pub const API_BASE_URL: &str = "/api";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Archive Configuration
// =============================================================================

/// Number of assets requested per page.
///
/// Also drives the "next page" affordance: the control is enabled only
/// when the current page came back full. This is a heuristic, not a
/// total-count check, so a collection whose size is an exact multiple of
/// the page size enables "next" onto an empty page.
pub const PAGE_SIZE: usize = 6;

/// Minimum time the sync indicator stays visible after a fetch completes,
/// so fast responses don't flicker.
pub const SYNC_LINGER_MS: u32 = 300;

// =============================================================================
// Session Configuration
// =============================================================================

/// localStorage key for the admin bearer token.
pub const TOKEN_KEY: &str = "token";

// =============================================================================
// Toast Configuration
// =============================================================================

/// How long a toast stays on screen before auto-dismissing (milliseconds).
pub const TOAST_DISMISS_MS: u32 = 4000;

/// Fixed notification texts, one per operation outcome.
pub mod messages {
    pub const LOGIN_OK: &str = "Welcome back, Admin";
    pub const LOGIN_FAILED: &str = "Invalid credentials. Please try again.";
    pub const SYNC_FAILED: &str = "Archive sync failed";
    pub const DELETE_OK: &str = "Asset Purged";
    pub const DELETE_FAILED: &str = "Deletion Failed";
    pub const RENAME_OK: &str = "Archive Updated";
    pub const RENAME_FAILED: &str = "Update Failed";
    pub const UPLOAD_OK: &str = "Asset added to gallery";
    pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";
    pub const MISSING_FILE: &str = "Please select an image first";
    pub const MISSING_TITLE: &str = "Please provide a title";
}

/// Confirmation prompt shown before a destructive delete.
pub const DELETE_CONFIRM_PROMPT: &str = "Confirm asset removal from Archive?";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
