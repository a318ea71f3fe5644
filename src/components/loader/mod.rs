//! Splash screen shown while the page is loading.

use leptos::html::{Div, H1};
use leptos::prelude::*;

use crate::components::motion::{html, use_scenes, SceneSpec};
use crate::core::scenes::splash;
use crate::models::Accent;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/loader/loader.module.css");

const DOTS: [Accent; 5] = [
    Accent::Rosewater,
    Accent::Mauve,
    Accent::Blue,
    Accent::Teal,
    Accent::Green,
];

/// Full-screen splash with the owner's name and a row of pulsing dots.
#[component]
pub fn Loader(name: String) -> impl IntoView {
    let text = NodeRef::<H1>::new();
    let dots = NodeRef::<Div>::new();

    use_scenes(move || {
        let (Some(text), Some(dots)) = (html(text.get()), html(dots.get())) else {
            return Ok(Vec::new());
        };
        let dots = dom::children(&dots);
        let intro = splash::intro(dots.len());

        let mut targets = vec![vec![text]];
        targets.extend(dots.into_iter().map(|dot| vec![dot]));
        Ok(vec![SceneSpec::new(intro, targets)])
    });

    view! {
        <div class=css::loader role="status" aria-live="polite">
            <div class=css::stack>
                <h1 class=css::name node_ref=text>{name}</h1>
                <div class=css::dots node_ref=dots>
                    {DOTS
                        .iter()
                        .map(|accent| {
                            view! { <span class=css::dot style:background-color=accent.css_var()></span> }
                        })
                        .collect_view()}
                </div>
            </div>
            <p class=css::caption>"Loading Portfolio..."</p>
        </div>
    }
}
