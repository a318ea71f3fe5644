//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Site content is loaded at compile time using `include_str!`.

use crate::core::tilt::TiltConfig;

// =============================================================================
// Site Content (loaded at compile time)
// =============================================================================

/// Profile, section copy, skills and projects, parsed at startup.
pub const SITE_CONTENT: &str = include_str!("../assets/content/site.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "folio";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Security
// =============================================================================

/// Domains external profile links may point to.
/// Links to other domains are not rendered.
pub const ALLOWED_PROFILE_DOMAINS: &[&str] = &[
    "github.com",
    "twitter.com",
    "x.com",
    "linkedin.com",
    "instagram.com",
    "medium.com",
    "youtube.com",
];

// =============================================================================
// Timing
// =============================================================================

/// Fixed delays (milliseconds).
pub mod timing {
    /// How long the splash screen stays up before the page mounts.
    pub const LOADER_MS: u32 = 2000;
    /// Time between submitting the contact form and the success notice.
    pub const SUBMIT_HANDOFF_MS: u32 = 500;
    /// Time the success notice stays up before the form resets.
    pub const SUBMIT_RESET_MS: u32 = 3000;
    /// Eased return of a tilted card to neutral.
    pub const TILT_RESET_MS: u32 = 300;
}

// =============================================================================
// Navigation
// =============================================================================

/// Header and scroll navigation.
pub mod nav {
    /// Distance below the viewport top used to decide the active section.
    pub const MARKER_LINE: f64 = 100.0;
    /// Scroll distance after which the header gets its backdrop.
    pub const SCROLLED_THRESHOLD: f64 = 50.0;
    /// Space left above a section after navigating to it from the header.
    pub const HEADER_OFFSET: f64 = 80.0;
    /// Space left above a section after navigating from a hero button.
    pub const CTA_OFFSET: f64 = 70.0;
    /// Time the mobile menu takes to fade out before it is removed.
    pub const MENU_EXIT_MS: u32 = 300;
    /// Viewports matching this query use the burger menu.
    pub const MOBILE_QUERY: &str = "(max-width: 767px)";
}

// =============================================================================
// Contact
// =============================================================================

/// Contact form copy.
pub mod contact {
    pub const SUBMIT_LABEL: &str = "Send Message";
    pub const SUBMITTING_LABEL: &str = "Opening Email Client...";
    pub const SUCCESS_NOTICE: &str =
        "Email client opened! Complete sending from your email application.";
}

// =============================================================================
// Tilt
// =============================================================================

/// Per-card tilt tuning.
pub mod tilt {
    use super::{timing, TiltConfig};

    pub const ABOUT_CARD: TiltConfig = TiltConfig {
        divisor: 15.0,
        hover_scale: 1.05,
        perspective: 1000.0,
        reset_ms: timing::TILT_RESET_MS,
        shadow: true,
        drift: None,
    };

    pub const PROJECT_CARD: TiltConfig = TiltConfig {
        divisor: 20.0,
        hover_scale: 1.02,
        perspective: 1000.0,
        reset_ms: timing::TILT_RESET_MS,
        shadow: false,
        drift: Some("[data-drift]"),
    };

    pub const SKILL_CARD: TiltConfig = TiltConfig {
        divisor: 10.0,
        hover_scale: 1.0,
        perspective: 1000.0,
        reset_ms: timing::TILT_RESET_MS,
        shadow: false,
        drift: None,
    };
}

// =============================================================================
// Theme
// =============================================================================

/// Catppuccin Macchiato palette and font stacks.
///
/// Exported to CSS as `--ctp-<name>` custom properties on the page root.
pub mod theme {
    pub const PALETTE: &[(&str, &str)] = &[
        ("rosewater", "#f4dbd6"),
        ("flamingo", "#f0c6c6"),
        ("pink", "#f5bde6"),
        ("mauve", "#c6a0f6"),
        ("red", "#ed8796"),
        ("maroon", "#ee99a0"),
        ("peach", "#f5a97f"),
        ("yellow", "#eed49f"),
        ("green", "#a6da95"),
        ("teal", "#8bd5ca"),
        ("sky", "#91d7e3"),
        ("sapphire", "#7dc4e4"),
        ("blue", "#8aadf4"),
        ("lavender", "#b7bdf8"),
        ("text", "#cad3f5"),
        ("subtext1", "#b8c0e0"),
        ("subtext0", "#a5adcb"),
        ("overlay2", "#939ab7"),
        ("overlay1", "#8087a2"),
        ("overlay0", "#6e738d"),
        ("surface2", "#5b6078"),
        ("surface1", "#494d64"),
        ("surface0", "#363a4f"),
        ("base", "#24273a"),
        ("mantle", "#1e2030"),
        ("crust", "#181926"),
    ];

    pub const FONT_SANS: &str = "Inter, sans-serif";
    pub const FONT_MONO: &str = "'JetBrains Mono', monospace";
    pub const FONT_DISPLAY: &str = "'Clash Display', sans-serif";

    /// Look up a palette color by name.
    pub fn color(name: &str) -> Option<&'static str> {
        PALETTE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, hex)| *hex)
    }

    /// Inline style declaring every palette color and font as a custom
    /// property.
    pub fn css_variables() -> String {
        let mut style: String = PALETTE
            .iter()
            .map(|(name, hex)| format!("--ctp-{name}: {hex}; "))
            .collect();
        style.push_str(&format!(
            "--font-sans: {FONT_SANS}; --font-mono: {FONT_MONO}; --font-display: {FONT_DISPLAY};"
        ));
        style
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_unmounts_after_fade_out() {
        let fade_ms = crate::core::scenes::navbar::SHEET_EXIT * 1000.0;
        assert!(f64::from(nav::MENU_EXIT_MS) >= fade_ms);
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(theme::color("mauve"), Some("#c6a0f6"));
        assert_eq!(theme::color("crust"), Some("#181926"));
        assert_eq!(theme::color("chartreuse"), None);
    }

    #[test]
    fn test_css_variables_cover_palette() {
        let style = theme::css_variables();
        for (name, hex) in theme::PALETTE {
            assert!(style.contains(&format!("--ctp-{name}: {hex};")));
        }
        assert!(style.contains("--font-display: 'Clash Display', sans-serif;"));
    }

    #[test]
    fn test_tilt_cards_share_reset() {
        for config in [tilt::ABOUT_CARD, tilt::PROJECT_CARD, tilt::SKILL_CARD] {
            assert_eq!(config.reset_ms, timing::TILT_RESET_MS);
        }
        assert!(tilt::SKILL_CARD.divisor < tilt::PROJECT_CARD.divisor);
    }
}
