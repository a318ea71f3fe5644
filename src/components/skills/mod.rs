//! Skills section: a grid of tilting technology cards.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::motion::{html, use_scenes, use_tilt, SceneSpec};
use crate::config::tilt;
use crate::core::scenes;
use crate::models::{SectionId, Skill, Skills as SkillsContent};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/skills/skills.module.css");

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    let card = NodeRef::<Div>::new();
    let detach = use_tilt(card, tilt::SKILL_CARD);
    on_cleanup(detach);

    // The outer slot takes the entrance tween, the inner card the tilt.
    view! {
        <div class=css::slot>
            <div class=css::card node_ref=card>
                <div
                    class=css::badge
                    style:background-color=skill.accent.css_var()
                    inner_html=skill.icon
                ></div>
                <h3 class=css::name>{skill.name}</h3>
            </div>
        </div>
    }
}

#[component]
pub fn Skills(skills: SkillsContent) -> impl IntoView {
    let title = NodeRef::<Div>::new();
    let grid = NodeRef::<Div>::new();

    use_scenes(move || {
        let (Some(title), Some(grid)) = (html(title.get()), html(grid.get())) else {
            return Ok(Vec::new());
        };
        let cards = dom::children(&grid);

        Ok(vec![
            SceneSpec::new(scenes::skills::title()?, vec![vec![title.clone()]]).triggered_by(title),
            SceneSpec::new(scenes::skills::cards(cards.len())?, vec![cards]).triggered_by(grid),
        ])
    });

    view! {
        <section id=SectionId::Skills.dom_id() class=css::skills>
            <div class=css::container>
                <div class=css::titleBlock node_ref=title>
                    <h2 class=css::heading>
                        "My " <span class=css::accent>"Skills"</span>
                    </h2>
                    <p class=css::intro>{skills.intro}</p>
                </div>

                <div class=css::grid node_ref=grid>
                    {skills
                        .items
                        .into_iter()
                        .map(|skill| view! { <SkillCard skill=skill /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
