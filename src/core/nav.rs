//! Navigation state derived from the scroll position.

use crate::core::motion::Rect;

/// First section whose bounds straddle the marker line.
///
/// `sections` must be in page order. Sections are contiguous and do not
/// overlap, so at most one can match except at a shared edge, where the
/// earlier one wins.
pub fn active_section<T>(sections: impl IntoIterator<Item = (T, Rect)>, marker: f64) -> Option<T> {
    sections
        .into_iter()
        .find(|(_, rect)| rect.straddles(marker))
        .map(|(id, _)| id)
}

/// Whether the page has scrolled far enough to give the header a backdrop.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Document offset to scroll to so that a section lands just below the
/// fixed header.
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    (offset_top - header_offset).max(0.0)
}

/// Mobile menu sheet. `Closing` keeps the sheet mounted while it fades out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
    Closing,
}

impl MenuState {
    /// Burger button. Presses during the fade-out are ignored.
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open | Self::Closing => Self::Closing,
        }
    }

    /// Close after navigating from the sheet.
    pub fn close(self) -> Self {
        match self {
            Self::Open => Self::Closing,
            other => other,
        }
    }

    /// The fade-out finished.
    pub fn settle(self) -> Self {
        match self {
            Self::Closing => Self::Closed,
            other => other,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Whether the sheet is in the DOM.
    pub fn is_mounted(self) -> bool {
        self != Self::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: f64 = 100.0;

    /// Five stacked sections after scrolling down by `scroll` pixels.
    fn page(scroll: f64) -> Vec<(&'static str, Rect)> {
        let heights = [
            ("home", 900.0),
            ("about", 700.0),
            ("skills", 800.0),
            ("projects", 900.0),
            ("contact", 700.0),
        ];
        let mut top = -scroll;
        heights
            .iter()
            .map(|&(id, height)| {
                let rect = Rect::new(top, height);
                top += height;
                (id, rect)
            })
            .collect()
    }

    #[test]
    fn test_top_of_page_is_home() {
        assert_eq!(active_section(page(0.0), MARKER), Some("home"));
    }

    #[test]
    fn test_marker_inside_section() {
        assert_eq!(active_section(page(1000.0), MARKER), Some("about"));
        assert_eq!(active_section(page(2000.0), MARKER), Some("skills"));
        assert_eq!(active_section(page(3400.0), MARKER), Some("contact"));
    }

    #[test]
    fn test_shared_edge_prefers_earlier() {
        // About ends exactly on the marker line where skills begins.
        assert_eq!(active_section(page(1500.0), MARKER), Some("about"));
    }

    #[test]
    fn test_nothing_under_marker() {
        assert_eq!(active_section(page(-500.0), MARKER), None);
        assert_eq!(active_section(Vec::<(&str, Rect)>::new(), MARKER), None);
    }

    #[test]
    fn test_scroll_helpers() {
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(51.0, 50.0));
        assert_eq!(scroll_target(900.0, 80.0), 820.0);
        assert_eq!(scroll_target(40.0, 80.0), 0.0);
    }

    #[test]
    fn test_menu_fades_out_before_closing() {
        let open = MenuState::default().toggle();
        assert!(open.is_open());

        let closing = open.toggle();
        assert!(!closing.is_open());
        assert!(closing.is_mounted());
        // Pressing again mid-fade does not reopen a sheet that is leaving.
        assert_eq!(closing.toggle(), MenuState::Closing);

        let closed = closing.settle();
        assert_eq!(closed, MenuState::Closed);
        assert!(!closed.is_mounted());
    }

    #[test]
    fn test_menu_close_only_affects_open_sheet() {
        assert_eq!(MenuState::Open.close(), MenuState::Closing);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
        assert_eq!(MenuState::Open.settle(), MenuState::Open);
    }
}
