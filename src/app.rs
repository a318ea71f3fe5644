//! Root application module.
//!
//! [`App`] parses the embedded site content behind an error boundary.
//! `Site` owns the animation stage and the loading gate, and swaps the
//! splash screen for the page once the gate opens.

use gloo_timers::callback::Timeout;
use leptos::html::Main;
use leptos::logging::log;
use leptos::prelude::*;

use crate::components::motion::{html, use_scenes, MotionRoot, SceneSpec};
use crate::components::{About, Contact, Hero, Loader, Navbar, Projects, Skills};
use crate::config::{theme, timing, APP_NAME, APP_VERSION};
use crate::core::LoaderGate;
use crate::core::scenes::page;
use crate::models::SiteContent;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// Content that fails to parse is a startup error: the boundary shows the
/// reason and offers a reload.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class=css::failure style=theme::css_variables()>
                    <h1 class=css::failureTitle>"Something went wrong"</h1>
                    <p class=css::failureText>
                        "The page could not be built. Please try reloading."
                    </p>
                    <details class=css::failureDetails>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </details>
                    <button
                        class=css::reload
                        on:click=move |_| {
                            if let Some(window) = dom::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        }>
            {SiteContent::load().map(|content| view! { <Site content=content /> })}
        </ErrorBoundary>
    }
}

/// Loader first, then the page.
#[component]
fn Site(content: SiteContent) -> impl IntoView {
    let gate = RwSignal::new(LoaderGate::new());

    // Dropped, and so cancelled, if the site unmounts before it fires.
    let timer = StoredValue::new_local(None::<Timeout>);
    timer.set_value(Some(Timeout::new(timing::LOADER_MS, move || {
        if gate.try_update(LoaderGate::dismiss) == Some(true) {
            log!("{APP_NAME} v{APP_VERSION}: loader dismissed");
        }
    })));

    let name = content.profile.name.clone();

    view! {
        <MotionRoot>
            <div class=css::site style=theme::css_variables()>
                <Show
                    when=move || gate.with(LoaderGate::is_loading)
                    fallback=move || view! { <Page content=content.clone() /> }
                >
                    <Loader name=name.clone() />
                </Show>
            </div>
        </MotionRoot>
    }
}

/// Navbar, the five sections and the footer.
#[component]
fn Page(content: SiteContent) -> impl IntoView {
    let main = NodeRef::<Main>::new();

    // Each section rises into view as it is first scrolled to.
    use_scenes(move || {
        let Some(main) = html(main.get()) else {
            return Ok(Vec::new());
        };
        dom::query_all(&main, ":scope > section")
            .into_iter()
            .map(|section| {
                Ok(SceneSpec::new(page::reveal()?, vec![vec![section.clone()]])
                    .triggered_by(section))
            })
            .collect()
    });

    let SiteContent {
        profile,
        about,
        skills,
        projects,
        contact,
    } = content;
    let monogram = profile.monogram();
    let owner = profile.name.clone();
    let year = dom::current_year();

    view! {
        <Navbar monogram=monogram />
        <main node_ref=main>
            <Hero profile=profile.clone() />
            <About about=about name=profile.name.clone() />
            <Skills skills=skills />
            <Projects projects=projects />
            <Contact contact=contact profile=profile />
        </main>
        <footer class=css::footer>
            <p>"© " {year} " " {owner} ". All rights reserved."</p>
        </footer>
    }
}
