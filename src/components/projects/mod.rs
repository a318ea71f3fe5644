//! Projects section: cards that tilt in 3D, with tags drifting in parallax.

use leptos::html::{Div, Section, H2};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::motion::{html, use_scenes, use_tilt, SceneSpec};
use crate::config::tilt;
use crate::core::scenes;
use crate::models::{Project, Projects as ProjectsContent, SectionId};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/projects/projects.module.css");

const BACKGROUND_SHAPES: [&str; 3] = [css::shapeOne, css::shapeTwo, css::shapeThree];

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let card = NodeRef::<Div>::new();
    let detach = use_tilt(card, tilt::PROJECT_CARD);
    on_cleanup(detach);

    let Project {
        title,
        description,
        tags,
        status,
    } = project;
    let card_class = if status.is_current() {
        format!("{} {}", css::card, css::current)
    } else {
        css::card.to_string()
    };
    let badge_class = if status.is_current() {
        format!("{} {}", css::badge, css::badgeActive)
    } else {
        css::badge.to_string()
    };

    view! {
        <div class=css::slot>
            <div class=card_class node_ref=card>
                <header class=css::cardHeader>
                    <h3 class=css::cardTitle>{title}</h3>
                    <span class=badge_class>{status.label()}</span>
                </header>
                <p class=css::description>{description}</p>
                <div class=css::tags>
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class=css::tag data-drift="">{tag}</span> })
                        .collect_view()}
                </div>
                <footer class=css::cardFooter>
                    <span class=css::details>
                        "View Details" <Icon icon=ic::ARROW_RIGHT />
                    </span>
                </footer>
            </div>
        </div>
    }
}

#[component]
pub fn Projects(projects: ProjectsContent) -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let heading = NodeRef::<H2>::new();
    let grid = NodeRef::<Div>::new();
    let shapes = NodeRef::<Div>::new();

    use_scenes(move || {
        let (Some(section), Some(heading), Some(grid), Some(shapes)) = (
            html(section.get()),
            html(heading.get()),
            html(grid.get()),
            html(shapes.get()),
        ) else {
            return Ok(Vec::new());
        };
        let cards = dom::children(&grid);
        let shapes: Vec<Vec<_>> = dom::children(&shapes)
            .into_iter()
            .map(|shape| vec![shape])
            .collect();

        Ok(vec![
            SceneSpec::new(
                scenes::projects::entrance(cards.len())?,
                vec![vec![heading], cards],
            )
            .triggered_by(section.clone()),
            SceneSpec::new(scenes::projects::shapes(shapes.len())?, shapes).triggered_by(section),
        ])
    });

    let ProjectsContent {
        intro,
        outro,
        items,
    } = projects;

    view! {
        <section id=SectionId::Projects.dom_id() class=css::projects node_ref=section>
            <div class=css::shapes node_ref=shapes aria-hidden="true">
                {BACKGROUND_SHAPES
                    .iter()
                    .map(|&position| view! { <div class=format!("{} {}", css::shape, position)></div> })
                    .collect_view()}
            </div>

            <div class=css::container>
                <h2 class=css::heading node_ref=heading>
                    "My " <span class=css::accent>"Projects"</span>
                </h2>
                <p class=css::intro>{intro}</p>

                <div class=css::grid node_ref=grid>
                    {items
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </div>

                <div class=css::outro>
                    <p>{outro}</p>
                    <button class=css::soon disabled=true>"Check Back Later"</button>
                </div>
            </div>
        </section>
    }
}
