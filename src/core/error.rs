//! Error types for the application.
//!
//! - [`MotionError`] - malformed scroll-trigger boundaries
//! - [`ContactError`] - contact form validation
//! - [`ContentError`] - embedded site content that fails to load

use thiserror::Error;

/// Errors raised while building animation triggers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// Boundary is not of the form `"<element edge> <viewport edge>"`.
    #[error("invalid trigger boundary '{0}' (expected e.g. \"top 80%\")")]
    InvalidBoundary(String),
    /// Edge is not `top`, `center`, `bottom`, `N%` or `Npx`.
    #[error("invalid edge '{0}' (use top, center, bottom, N% or Npx)")]
    InvalidEdge(String),
}

/// A required contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("please fill in your {0}")]
    MissingField(ContactField),
    /// Form submitted while a previous submission is still in progress.
    #[error("a message is already being sent")]
    Busy,
}

/// Site content errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(String),
}
