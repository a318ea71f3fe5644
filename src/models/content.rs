//! Site content: profile, section copy, skills and projects.
//!
//! Deserialized from the TOML embedded as [`crate::config::SITE_CONTENT`].

use serde::Deserialize;

use crate::config;
use crate::core::error::ContentError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub contact: Contact,
}

impl SiteContent {
    /// Parse the embedded site content.
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(config::SITE_CONTENT)
    }

    pub fn parse(source: &str) -> Result<Self, ContentError> {
        toml::from_str(source).map_err(|e| ContentError::Parse(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
}

impl Profile {
    /// Brand mark split into an accented initial and the rest of the first
    /// name, e.g. `("A", "ary")`.
    pub fn monogram(&self) -> (String, String) {
        let first = self.name.split_whitespace().next().unwrap_or_default();
        let mut chars = first.chars();
        let initial = chars.next().map(String::from).unwrap_or_default();
        (initial, chars.collect())
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub card_title: String,
    pub education: Education,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub status: String,
}

/// One tile on the About card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub detail: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skills {
    pub intro: String,
    pub items: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Inline SVG markup.
    pub icon: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Projects {
    pub intro: String,
    pub outro: String,
    pub items: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: ProjectStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Current,
    Upcoming,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Active",
            Self::Upcoming => "Planned",
        }
    }

    pub fn is_current(self) -> bool {
        self == Self::Current
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub intro: String,
    pub pitch: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

impl Contact {
    pub fn link(&self, kind: SocialKind) -> Option<&SocialLink> {
        self.links.iter().find(|link| link.kind == kind)
    }

    /// Links shown as the icon row, everything except LinkedIn which has
    /// its own entry.
    pub fn icon_links(&self) -> impl Iterator<Item = &SocialLink> {
        self.links
            .iter()
            .filter(|link| link.kind != SocialKind::Linkedin)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Linkedin,
    Github,
    Twitter,
    Instagram,
}

impl SocialKind {
    /// Accent used when the link is hovered.
    pub fn hover_accent(self) -> Accent {
        match self {
            Self::Linkedin | Self::Github => Accent::Lavender,
            Self::Twitter => Accent::Blue,
            Self::Instagram => Accent::Pink,
        }
    }
}

/// Palette color used to tint a card or tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Rosewater,
    Pink,
    Mauve,
    Red,
    Peach,
    Yellow,
    Green,
    Teal,
    Sapphire,
    Blue,
    Lavender,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rosewater => "rosewater",
            Self::Pink => "pink",
            Self::Mauve => "mauve",
            Self::Red => "red",
            Self::Peach => "peach",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Sapphire => "sapphire",
            Self::Blue => "blue",
            Self::Lavender => "lavender",
        }
    }

    /// CSS value referencing the palette custom property.
    pub fn css_var(self) -> String {
        format!("var(--ctp-{})", self.name())
    }
}
