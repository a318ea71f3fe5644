//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`SectionId`] - Page sections and their navigation labels
//! - [`SiteContent`] - Profile, copy, skills and projects

mod content;
mod section;

pub use content::{
    About, Accent, Contact, Education, Highlight, Profile, Project, ProjectStatus, Projects,
    SiteContent, Skill, Skills, SocialKind, SocialLink,
};
pub use section::SectionId;
