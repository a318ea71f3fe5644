//! Pointer tilt for cards.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::use_event_listener;
use web_sys::HtmlElement;

use crate::core::tilt::{Tilt, TiltConfig};
use crate::utils::dom;

fn render(card: &HtmlElement, tilt: &Tilt, config: &TiltConfig) {
    dom::set_style(
        card,
        "transition",
        &format!(
            "transform {ms}ms ease-out, box-shadow {ms}ms ease-out",
            ms = config.reset_ms
        ),
    );
    dom::set_style(card, "transform", &tilt.transform(config));
    if config.shadow {
        dom::set_style(card, "box-shadow", &tilt.shadow());
    }
    if let Some(selector) = config.drift {
        for (index, child) in dom::query_all(card, selector).iter().enumerate() {
            dom::set_style(child, "transform", &tilt.drift_transform(index));
        }
    }
}

/// Tilt `card` toward the pointer while it hovers, and ease it back to
/// neutral when the pointer leaves.
///
/// The listeners live as long as the calling component. The returned
/// closure detaches them; calling it more than once is harmless.
pub fn use_tilt(
    card: NodeRef<Div>,
    config: TiltConfig,
) -> impl Fn() + Clone + Send + Sync + 'static {
    let stop_move = use_event_listener(card, ev::mousemove, move |event| {
        let Some(element) = card.get_untracked() else {
            return;
        };
        let element: HtmlElement = element.into();
        let tilt = Tilt::at_pointer(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            dom::card_box(&element),
            &config,
        );
        render(&element, &tilt, &config);
    });

    let stop_leave = use_event_listener(card, ev::mouseleave, move |_| {
        if let Some(element) = card.get_untracked() {
            render(&element.into(), &Tilt::NEUTRAL, &config);
        }
    });

    move || {
        stop_move();
        stop_leave();
    }
}
