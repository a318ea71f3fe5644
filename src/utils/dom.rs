//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Missing windows,
//! documents or elements are reported as `None`/`false` rather than panics.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::core::motion::Rect;
use crate::core::tilt::CardBox;
use crate::models::SectionId;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Inner height of the viewport in CSS pixels.
pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Find an element by id and cast it to `HtmlElement`.
pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Viewport-relative vertical bounds of an element.
pub fn rect_of(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.top(), rect.height())
}

/// Viewport-relative box of an element, for pointer math.
pub fn card_box(element: &Element) -> CardBox {
    let rect = element.get_bounding_client_rect();
    CardBox::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Element children that are HTML elements, in document order.
pub fn children(element: &Element) -> Vec<HtmlElement> {
    let collection = element.children();
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Descendants matching `selector`, in document order.
pub fn query_all(element: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = element.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Set one inline style property.
pub fn set_style(element: &HtmlElement, name: &str, value: &str) {
    let _ = element.style().set_property(name, value);
}

/// Write a batch of CSS declarations as inline styles.
pub fn apply_declarations(element: &HtmlElement, declarations: &[(&str, String)]) {
    let style = element.style();
    for (name, value) in declarations {
        let _ = style.set_property(name, value);
    }
}

/// Smoothly scroll so `section` sits `offset` pixels below the viewport top.
///
/// Returns `false` if the section is not in the document.
pub fn scroll_to_section(section: SectionId, offset: f64) -> bool {
    let (Some(window), Some(element)) = (window(), element_by_id(section.dom_id())) else {
        return false;
    };
    let options = ScrollToOptions::new();
    options.set_top(crate::core::nav::scroll_target(
        f64::from(element.offset_top()),
        offset,
    ));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Navigate the current browsing context, e.g. to a `mailto:` link.
pub fn open_url(href: &str) -> bool {
    window().is_some_and(|w| w.location().set_href(href).is_ok())
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
