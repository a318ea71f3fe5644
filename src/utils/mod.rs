//! Utility modules for DOM access and link validation.
//!
//! Provides:
//! - [`dom`] - Window, layout, inline style and scrolling helpers
//! - [`validate_profile_url`] - Domain allow-list for external links

pub mod dom;
mod url;

pub use url::validate_profile_url;
