//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuImage as Image, LuImagePlus as ImagePlus,
        LuLock as Lock, LuLogOut as Logout, LuMail as Mail, LuPencil as Edit, LuPlus as Plus,
        LuShieldCheck as Shield, LuTrash2 as Trash, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsBoxArrowRight as Logout, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsEnvelope as Mail, BsImage as Image,
        BsImages as ImagePlus, BsLockFill as Lock, BsPencil as Edit, BsPlusLg as Plus,
        BsShieldCheck as Shield, BsTrash as Trash, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(EDIT, Edit);
themed_icon!(IMAGE, Image);
themed_icon!(IMAGE_PLUS, ImagePlus);
themed_icon!(LOCK, Lock);
themed_icon!(LOGOUT, Logout);
themed_icon!(MAIL, Mail);
themed_icon!(PLUS, Plus);
themed_icon!(SHIELD, Shield);
themed_icon!(TRASH, Trash);
themed_icon!(UPLOAD, Upload);
