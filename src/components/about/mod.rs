//! About section: biography paragraphs beside a tilting highlights card.

use leptos::html::{Div, Section, H2};
use leptos::prelude::*;

use crate::components::motion::{html, use_scenes, use_tilt, SceneSpec};
use crate::config::tilt;
use crate::core::scenes;
use crate::models::{About as AboutContent, Highlight, SectionId};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/about/about.module.css");

/// Render `text` with the first occurrence of `name` emphasized.
fn emphasize(text: String, name: &str) -> AnyView {
    if let Some((before, after)) = text.split_once(name).filter(|_| !name.is_empty()) {
        return view! {
            {before.to_string()}
            <span class=css::highlight>{name.to_string()}</span>
            {after.to_string()}
        }
        .into_any();
    }
    text.into_any()
}

#[component]
fn HighlightTile(highlight: Highlight) -> impl IntoView {
    view! {
        <div class=css::tile>
            <h4 class=css::tileTitle style:color=highlight.accent.css_var()>{highlight.title}</h4>
            <p class=css::tileDetail>{highlight.detail}</p>
        </div>
    }
}

#[component]
pub fn About(
    about: AboutContent,
    /// Owner's name, emphasized where it appears in the copy.
    name: String,
) -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let backdrop = NodeRef::<Div>::new();
    let heading = NodeRef::<H2>::new();
    let copy = NodeRef::<Div>::new();
    let frame = NodeRef::<Div>::new();
    let card = NodeRef::<Div>::new();

    let detach = use_tilt(card, tilt::ABOUT_CARD);
    on_cleanup(detach);

    use_scenes(move || {
        let (Some(section), Some(backdrop), Some(heading), Some(copy), Some(frame)) = (
            html(section.get()),
            html(backdrop.get()),
            html(heading.get()),
            html(copy.get()),
            html(frame.get()),
        ) else {
            return Ok(Vec::new());
        };
        let paragraphs = dom::children(&copy);

        Ok(vec![
            SceneSpec::new(
                scenes::about::entrance(paragraphs.len())?,
                vec![vec![heading], paragraphs, vec![frame]],
            )
            .triggered_by(section.clone()),
            SceneSpec::new(scenes::about::backdrop()?, vec![vec![backdrop]]).triggered_by(section),
        ])
    });

    let AboutContent {
        paragraphs,
        card_title,
        education,
        highlights,
    } = about;

    view! {
        <section id=SectionId::About.dom_id() class=css::about node_ref=section>
            <div class=css::backdrop node_ref=backdrop aria-hidden="true"></div>

            <div class=css::container>
                <h2 class=css::heading node_ref=heading>
                    "About " <span class=css::accent>"Me"</span>
                </h2>

                <div class=css::columns>
                    <div class=css::copy node_ref=copy>
                        {paragraphs
                            .into_iter()
                            .map(|paragraph| {
                                view! { <p class=css::paragraph>{emphasize(paragraph, &name)}</p> }
                            })
                            .collect_view()}
                        <div class=css::education>
                            <h3 class=css::educationTitle>"Education"</h3>
                            <p class=css::degree>{education.degree}</p>
                            <p class=css::status>{education.status}</p>
                        </div>
                    </div>

                    <div class=css::frame node_ref=frame>
                        <div class=css::card node_ref=card>
                            <h3 class=css::cardTitle>{card_title}</h3>
                            <div class=css::tiles>
                                {highlights
                                    .into_iter()
                                    .map(|highlight| view! { <HighlightTile highlight=highlight /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
