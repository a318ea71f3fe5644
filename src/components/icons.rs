//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::SocialKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as ArrowDown, LuArrowRight as ArrowRight, LuMail as Mail, LuMapPin as Location,
        LuMenu as Menu, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDown as ArrowDown, BsArrowRight as ArrowRight, BsEnvelope as Mail,
        BsGeoAltFill as Location, BsList as Menu, BsXLg as Close,
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

themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(ARROW_DOWN, ArrowDown);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(MAIL, Mail);
themed_icon!(LOCATION, Location);

// =============================================================================
// Brand Marks (same in every theme)
// =============================================================================

pub const GITHUB: Icon = icondata::BsGithub;
pub const TWITTER: Icon = icondata::BsTwitter;
pub const INSTAGRAM: Icon = icondata::BsInstagram;
pub const LINKEDIN: Icon = icondata::BsLinkedin;

pub fn social(kind: SocialKind) -> Icon {
    match kind {
        SocialKind::Linkedin => LINKEDIN,
        SocialKind::Github => GITHUB,
        SocialKind::Twitter => TWITTER,
        SocialKind::Instagram => INSTAGRAM,
    }
}
