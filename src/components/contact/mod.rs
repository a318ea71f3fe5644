//! Contact section: profile links beside a form that hands off to the
//! visitor's mail client.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html::{Div, Section};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::motion::{html, use_scenes, SceneSpec};
use crate::config::contact as labels;
use crate::core::{scenes, ContactForm, SubmitPhase};
use crate::models::{Contact as ContactContent, Profile, SectionId, SocialKind, SocialLink};
use crate::utils::{dom, validate_profile_url};

stylance::import_crate_style!(css, "src/components/contact/contact.module.css");

/// Form rows that rise in on scroll. The submit button is animated through
/// its wrapper so its own opacity stays free for the disabled state.
const CONTROLS: &str = "[data-control]";

/// Keep only links whose URL points at an allowed profile host.
fn vetted(link: &SocialLink) -> Option<SocialLink> {
    match validate_profile_url(&link.url) {
        Ok(_) => Some(link.clone()),
        Err(err) => {
            warn!("contact: dropping {} link: {err}", link.label);
            None
        }
    }
}

#[component]
fn MessageForm(
    /// Address the composed message is sent to.
    recipient: String,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let error = RwSignal::new(None::<String>);
    let timer = StoredValue::new_local(None::<Timeout>);

    // Walk the cosmetic phases. Replacing the handle drops, and so cancels,
    // whatever was pending.
    Effect::new(move |_| {
        let current = phase.get();
        let next = current.delay_ms().map(|ms| {
            Timeout::new(ms, move || {
                if current.clears_form_on_exit() {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                phase.set(current.advance());
            })
        });
        timer.set_value(next);
    });
    on_cleanup(move || {
        timer.try_update_value(|pending| pending.take());
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let next = match phase.get_untracked().submit() {
            Ok(next) => next,
            Err(err) => {
                warn!("contact: {err}");
                return;
            }
        };
        let form = ContactForm::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );
        match form.mailto(&recipient) {
            Ok(href) => {
                error.set(None);
                phase.set(next);
                if !dom::open_url(&href) {
                    warn!("contact: could not hand off to the mail client");
                }
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let button_label = move || {
        if phase.get().is_submitting() {
            labels::SUBMITTING_LABEL
        } else {
            labels::SUBMIT_LABEL
        }
    };

    view! {
        <form class=css::form on:submit=on_submit novalidate=true>
            <label class=css::field>
                <span class=css::label>"Name"</span>
                <input
                    class=css::input
                    data-control=""
                    type="text"
                    name="name"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class=css::field>
                <span class=css::label>"Email"</span>
                <input
                    class=css::input
                    data-control=""
                    type="email"
                    name="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class=css::field>
                <span class=css::label>"Message"</span>
                <textarea
                    class=css::input
                    data-control=""
                    name="message"
                    rows="5"
                    placeholder="What would you like to talk about?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>

            {move || error.get().map(|text| view! { <p class=css::error role="alert">{text}</p> })}

            <div class=css::actions data-control="">
                <button
                    class=css::submit
                    type="submit"
                    disabled=move || phase.get().is_submitting()
                >
                    {button_label}
                </button>
            </div>

            <Show when=move || phase.get() == SubmitPhase::Succeeded>
                <p class=css::notice role="status">{labels::SUCCESS_NOTICE}</p>
            </Show>
        </form>
    }
}

#[component]
pub fn Contact(contact: ContactContent, profile: Profile) -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let panel = NodeRef::<Div>::new();
    let fields = NodeRef::<Div>::new();
    let social = NodeRef::<Div>::new();

    use_scenes(move || {
        let (Some(section), Some(panel), Some(fields), Some(social)) = (
            html(section.get()),
            html(panel.get()),
            html(fields.get()),
            html(social.get()),
        ) else {
            return Ok(Vec::new());
        };
        let controls = dom::query_all(&fields, CONTROLS);

        Ok(vec![
            SceneSpec::new(scenes::contact::panel()?, vec![vec![panel]])
                .triggered_by(section.clone()),
            SceneSpec::new(scenes::contact::controls(controls.len())?, vec![controls])
                .triggered_by(fields),
            SceneSpec::new(scenes::contact::social()?, vec![vec![social.clone()]])
                .triggered_by(social),
            SceneSpec::new(scenes::contact::backdrop()?, vec![vec![section.clone()]])
                .triggered_by(section),
        ])
    });

    let linkedin = contact.link(SocialKind::Linkedin).and_then(vetted);
    let icon_links: Vec<SocialLink> = contact.icon_links().filter_map(vetted).collect();
    let mailto = profile.mailto();
    let email = profile.email.clone();

    view! {
        <section id=SectionId::Contact.dom_id() class=css::contact node_ref=section>
            <div class=css::container node_ref=panel>
                <h2 class=css::heading>
                    "Get In " <span class=css::accent>"Touch"</span>
                </h2>
                <p class=css::intro>{contact.intro}</p>

                <div class=css::columns>
                    <div class=css::social node_ref=social>
                        <h3 class=css::socialTitle>"Let's Connect"</h3>
                        <p class=css::pitch>{contact.pitch}</p>

                        <ul class=css::details>
                            {linkedin
                                .map(|link| {
                                    view! {
                                        <li class=css::detail>
                                            <span class=css::detailIcon>
                                                <Icon icon=ic::LINKEDIN />
                                            </span>
                                            <a
                                                href=link.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                {link.label}
                                            </a>
                                        </li>
                                    }
                                })}
                            <li class=css::detail>
                                <span class=css::detailIcon>
                                    <Icon icon=ic::MAIL />
                                </span>
                                <a href=mailto>{email}</a>
                            </li>
                            <li class=css::detail>
                                <span class=css::detailIcon>
                                    <Icon icon=ic::LOCATION />
                                </span>
                                <span>{profile.location}</span>
                            </li>
                        </ul>

                        <div class=css::iconRow>
                            {icon_links
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            class=css::iconLink
                                            style=format!("--hover-accent: {}", link.kind.hover_accent().css_var())
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                        >
                                            <Icon icon=ic::social(link.kind) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class=css::formPanel node_ref=fields>
                        <MessageForm recipient=profile.email />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlButtonElement, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn host() -> HtmlElement {
        let document = dom::window().unwrap().document().unwrap();
        let host = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    #[wasm_bindgen_test]
    fn submit_button_is_animated_through_its_wrapper() {
        let host = host();
        let _handle = mount_to(host.clone(), || {
            view! { <MessageForm recipient="me@example.com".to_string() /> }
        });

        let controls = dom::query_all(&host, CONTROLS);
        assert_eq!(controls.len(), 4);
        assert!(controls.iter().all(|control| control.tag_name() != "BUTTON"));

        let button = dom::query_all(&host, "button").remove(0);
        assert!(controls[3].contains(Some(button.as_ref())));
        assert!(!button.unchecked_ref::<HtmlButtonElement>().disabled());
    }
}
