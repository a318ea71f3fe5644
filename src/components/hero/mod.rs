//! Landing section: greeting, tagline, calls to action and floating shapes.

use leptos::ev;
use leptos::html::{Div, Section, Span, H1, P};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::motion::{html, use_scenes, SceneSpec};
use crate::config::nav;
use crate::core::scenes::hero;
use crate::models::{Profile, SectionId};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

/// Decorative blobs: position class and tint.
const SHAPES: [(&str, &str); 4] = [
    (css::shapeOne, "var(--ctp-mauve)"),
    (css::shapeTwo, "var(--ctp-blue)"),
    (css::shapeThree, "var(--ctp-pink)"),
    (css::shapeFour, "var(--ctp-teal)"),
];

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let content = NodeRef::<Div>::new();
    let title = NodeRef::<H1>::new();
    let subtitle = NodeRef::<P>::new();
    let cta = NodeRef::<Div>::new();
    let shapes = NodeRef::<Div>::new();
    let hand = NodeRef::<Span>::new();

    use_scenes(move || {
        let (
            Some(section),
            Some(content),
            Some(title),
            Some(subtitle),
            Some(cta),
            Some(shapes),
            Some(hand),
        ) = (
            html(section.get()),
            html(content.get()),
            html(title.get()),
            html(subtitle.get()),
            html(cta.get()),
            html(shapes.get()),
            html(hand.get()),
        )
        else {
            return Ok(Vec::new());
        };

        // Wrappers scale in; the blobs inside them drift.
        let wrappers = dom::children(&shapes);
        let blobs = dom::query_all(&shapes, "[data-blob]");

        Ok(vec![
            SceneSpec::new(
                hero::entrance(wrappers.len()),
                vec![vec![title], vec![subtitle], vec![cta], wrappers],
            ),
            SceneSpec::new(hero::float(blobs.len()), vec![blobs]),
            SceneSpec::new(hero::wave(), vec![vec![hand]]),
            SceneSpec::new(hero::parallax()?, vec![vec![content]]).triggered_by(section),
        ])
    });

    let jump = |target: SectionId| {
        move |ev: ev::MouseEvent| {
            ev.prevent_default();
            if !dom::scroll_to_section(target, nav::CTA_OFFSET) {
                warn!("hero: section #{} not found", target.dom_id());
            }
        }
    };

    view! {
        <section id=SectionId::Home.dom_id() class=css::hero node_ref=section>
            <div class=css::shapes node_ref=shapes aria-hidden="true">
                {SHAPES
                    .iter()
                    .map(|&(position, tint)| {
                        view! {
                            <div class=format!("{} {}", css::shape, position)>
                                <div class=css::blob style:background-color=tint data-blob=""></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class=css::content node_ref=content>
                <h1 class=css::title node_ref=title>
                    <span class=css::greeting>{profile.greeting}</span>
                    " "
                    <span class=css::hand node_ref=hand>"👋"</span>
                    <br />
                    <span class=css::name>"I'm " {profile.name}</span>
                </h1>
                <p class=css::tagline node_ref=subtitle>{profile.tagline}</p>
                <div class=css::actions node_ref=cta>
                    <a
                        href=SectionId::About.href()
                        class=css::primary
                        on:click=jump(SectionId::About)
                    >
                        "About Me"
                    </a>
                    <a
                        href=SectionId::Contact.href()
                        class=css::secondary
                        on:click=jump(SectionId::Contact)
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>

            <a
                href=SectionId::About.href()
                class=css::scrollHint
                aria-label="Scroll to About"
                on:click=jump(SectionId::About)
            >
                <Icon icon=ic::ARROW_DOWN />
            </a>
        </section>
    }
}
