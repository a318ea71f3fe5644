//! Page sections in scroll order.

/// A top-level section of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section, top to bottom.
    pub const ALL: [SectionId; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// DOM id of the section element (also its `#fragment`).
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.dom_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_ids_unique() {
        for (i, a) in SectionId::ALL.iter().enumerate() {
            for b in &SectionId::ALL[i + 1..] {
                assert_ne!(a.dom_id(), b.dom_id());
            }
        }
    }

    #[test]
    fn test_hero_is_home() {
        assert_eq!(SectionId::ALL[0], SectionId::Home);
        assert_eq!(SectionId::Home.href(), "#home");
        assert_eq!(SectionId::Home.label(), "Home");
    }
}
