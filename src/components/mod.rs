//! UI components built with Leptos.
//!
//! - [`motion`] - Animation stage, scene mounting and card tilt
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`Loader`] - Splash screen
//! - [`Navbar`] - Fixed header with active-section highlight
//! - [`Hero`], [`About`], [`Skills`], [`Projects`], [`Contact`] - Page sections

mod about;
mod contact;
mod hero;
pub mod icons;
mod loader;
pub mod motion;
mod navbar;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use loader::Loader;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
