//! Core logic for the portfolio, free of DOM access.
//!
//! This module provides:
//! - [`motion`] timeline, easing and scroll-trigger engine
//! - [`scenes`] the choreography of each section
//! - [`tilt`] pointer-driven card tilt
//! - [`nav`] active-section tracking
//! - [`ContactForm`] and [`SubmitPhase`] for the mailto contact form
//! - [`LoaderGate`] for the splash screen

mod contact;
pub mod error;
mod loader;
pub mod motion;
pub mod nav;
pub mod scenes;
pub mod tilt;

pub use contact::{ContactForm, SubmitPhase};
pub use loader::LoaderGate;
