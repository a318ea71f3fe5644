//! Fixed header with section links.
//!
//! Tracks which section sits under the header and highlights its link.
//! On narrow viewports the links collapse into a burger menu whose sheet
//! slides in and fades out.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html::{Button, Header, Nav, A};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons as ic;
use crate::components::motion::{html, use_scenes, SceneSpec};
use crate::config::nav;
use crate::core::nav::{active_section, is_scrolled, MenuState};
use crate::core::scenes::navbar;
use crate::models::SectionId;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

fn link_class(base: &str, active: bool) -> String {
    if active {
        format!("{} {}", base, css::active)
    } else {
        base.to_string()
    }
}

/// Mobile link sheet. Slides in on mount and fades out while the menu is
/// closing.
#[component]
fn MenuSheet(menu: RwSignal<MenuState>, children: Children) -> impl IntoView {
    let sheet = NodeRef::<Nav>::new();

    use_scenes(move || {
        let Some(sheet) = html(sheet.get()) else {
            return Ok(Vec::new());
        };
        let links = dom::children(&sheet);
        Ok(vec![SceneSpec::new(
            navbar::sheet(links.len()),
            vec![vec![sheet], links],
        )])
    });

    use_scenes(move || {
        let closing = menu.get() == MenuState::Closing;
        match html(sheet.get()) {
            Some(sheet) if closing => Ok(vec![SceneSpec::new(
                navbar::sheet_exit(),
                vec![vec![sheet]],
            )]),
            _ => Ok(Vec::new()),
        }
    });

    view! {
        <nav class=css::sheet node_ref=sheet>
            {children()}
        </nav>
    }
}

#[component]
pub fn Navbar(
    /// Brand mark as (accented initial, rest).
    monogram: (String, String),
) -> impl IntoView {
    let active = RwSignal::new(SectionId::Home);
    let scrolled = RwSignal::new(false);
    let menu = RwSignal::new(MenuState::Closed);
    let is_mobile = use_media_query(nav::MOBILE_QUERY);

    let header = NodeRef::<Header>::new();
    let brand = NodeRef::<A>::new();
    let inline = NodeRef::<Nav>::new();
    let burger = NodeRef::<Button>::new();

    use_scenes(move || {
        let (Some(header), Some(brand)) = (html(header.get()), html(brand.get())) else {
            return Ok(Vec::new());
        };
        let mut controls = vec![brand];
        controls.extend(html(burger.get()));
        let links = html(inline.get())
            .map(|row| dom::children(&row))
            .unwrap_or_default();
        let entrance = navbar::entrance(controls.len(), links.len());
        Ok(vec![SceneSpec::new(entrance, vec![vec![header], controls, links])])
    });

    let step_menu = move |step: fn(MenuState) -> MenuState| {
        let current = menu.get_untracked();
        let next = step(current);
        if next != current {
            menu.set(next);
        }
    };

    // The sheet stays mounted until its fade-out has played.
    let exit = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        let pending = (menu.get() == MenuState::Closing).then(|| {
            Timeout::new(nav::MENU_EXIT_MS, move || step_menu(MenuState::settle))
        });
        exit.set_value(pending);
    });
    on_cleanup(move || {
        exit.try_update_value(|pending| pending.take());
    });

    let track = move || {
        scrolled.set(is_scrolled(dom::scroll_y(), nav::SCROLLED_THRESHOLD));

        let sections = SectionId::ALL.into_iter().filter_map(|section| {
            dom::element_by_id(section.dom_id()).map(|el| (section, dom::rect_of(&el)))
        });
        // Keep the previous highlight when the marker falls between sections.
        if let Some(section) = active_section(sections, nav::MARKER_LINE) {
            if active.get_untracked() != section {
                active.set(section);
            }
        }
    };

    let handle = window_event_listener(ev::scroll, move |_| track());
    on_cleanup(move || handle.remove());

    // Sync once after mount, in case the page was restored mid-scroll.
    Effect::new(move |_| track());

    // Leaving the mobile layout removes the sheet outright.
    Effect::new(move |_| {
        if !is_mobile.get() && menu.get_untracked() != MenuState::Closed {
            menu.set(MenuState::Closed);
        }
    });

    let go = move |section: SectionId| {
        if !dom::scroll_to_section(section, nav::HEADER_OFFSET) {
            warn!("navbar: section #{} not found", section.dom_id());
        }
        step_menu(MenuState::close);
    };

    let links = move |base: &'static str| {
        SectionId::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <a
                        href=section.href()
                        class=move || link_class(base, active.get() == section)
                        on:click=move |ev: ev::MouseEvent| {
                            ev.prevent_default();
                            go(section);
                        }
                    >
                        {section.label()}
                    </a>
                }
            })
            .collect_view()
    };

    let (initial, rest) = monogram;
    let header_class = move || {
        if scrolled.get() {
            format!("{} {}", css::header, css::scrolled)
        } else {
            css::header.to_string()
        }
    };
    let toggle_icon = Signal::derive(move || {
        if menu.get().is_open() { ic::CLOSE } else { ic::MENU }
    });

    view! {
        <header class=header_class node_ref=header>
            <div class=css::inner>
                <a
                    href=SectionId::Home.href()
                    class=css::brand
                    node_ref=brand
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        go(SectionId::Home);
                    }
                >
                    <span class=css::initial>{initial}</span>
                    {rest}
                </a>

                <Show
                    when=move || !is_mobile.get()
                    fallback=move || {
                        view! {
                            <button
                                class=css::burger
                                node_ref=burger
                                aria-label="Toggle menu"
                                aria-expanded=move || menu.get().is_open().to_string()
                                on:click=move |_| step_menu(MenuState::toggle)
                            >
                                <Icon icon=toggle_icon />
                            </button>
                        }
                    }
                >
                    <nav class=css::links node_ref=inline>
                        {links(css::link)}
                    </nav>
                </Show>
            </div>

            <Show when=move || menu.get().is_mounted()>
                <MenuSheet menu=menu>{links(css::sheetLink)}</MenuSheet>
            </Show>
        </header>
    }
}
