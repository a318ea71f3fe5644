//! Page-wide animation stage and the hook sections use to join it.

use leptos::ev;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::core::error::MotionError;
use crate::core::motion::{Rect, SceneId, Stage, Target};
use crate::core::scenes::Choreography;
use crate::utils::dom;

impl Target for HtmlElement {
    fn render(&self, declarations: &[(&'static str, String)]) {
        dom::apply_declarations(self, declarations);
    }
}

/// A choreography bound to the elements it animates.
pub struct SceneSpec {
    pub choreography: Choreography,
    /// Elements per timeline slot.
    pub targets: Vec<Vec<HtmlElement>>,
    /// Element whose position drives the scroll trigger.
    pub trigger: Option<HtmlElement>,
}

impl SceneSpec {
    pub fn new(choreography: Choreography, targets: Vec<Vec<HtmlElement>>) -> Self {
        Self {
            choreography,
            targets,
            trigger: None,
        }
    }

    pub fn triggered_by(mut self, element: HtmlElement) -> Self {
        self.trigger = Some(element);
        self
    }
}

/// Handle to the page's animation [`Stage`].
///
/// Provided at the root by [`MotionRoot`]; sections join it through
/// [`use_scenes`].
#[derive(Clone, Copy)]
pub struct MotionContext {
    stage: StoredValue<Stage<HtmlElement>, LocalStorage>,
}

impl MotionContext {
    pub fn new() -> Self {
        Self {
            stage: StoredValue::new_local(Stage::new()),
        }
    }

    /// Mount a scene. Scenes whose trigger element is missing are skipped.
    pub fn add(&self, spec: SceneSpec) -> Option<SceneId> {
        let SceneSpec {
            choreography,
            targets,
            trigger,
        } = spec;

        let trigger = match (choreography.trigger, trigger) {
            (None, _) => None,
            (Some(spec), Some(element)) => {
                let measure: Box<dyn Fn() -> Option<Rect>> =
                    Box::new(move || element.is_connected().then(|| dom::rect_of(&element)));
                Some((spec, measure))
            }
            (Some(_), None) => {
                warn!("scroll trigger element missing; scene skipped");
                return None;
            }
        };

        self.stage.try_update_value(|stage| {
            let id = stage.add(choreography.timeline, targets, trigger);
            stage.refresh(dom::viewport_height());
            id
        })
    }

    pub fn remove(&self, id: SceneId) {
        self.stage.try_update_value(|stage| stage.remove(id));
    }

    /// Re-measure triggers against the current viewport.
    pub fn refresh(&self) {
        let height = dom::viewport_height();
        self.stage.try_update_value(|stage| stage.refresh(height));
    }

    pub fn tick(&self, seconds: f64) {
        self.stage.try_update_value(|stage| stage.tick(seconds));
    }

    pub fn clear(&self) {
        self.stage.try_update_value(|stage| stage.clear());
    }
}

impl Default for MotionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the animation stage for everything below it.
///
/// Drives every mounted scene from one animation-frame loop and re-measures
/// scroll triggers on scroll and resize.
#[component]
pub fn MotionRoot(children: Children) -> impl IntoView {
    let motion = MotionContext::new();
    provide_context(motion);

    let scroll = window_event_listener(ev::scroll, move |_| motion.refresh());
    let resize = window_event_listener(ev::resize, move |_| motion.refresh());
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| motion.tick(args.delta / 1000.0));

    on_cleanup(move || {
        scroll.remove();
        resize.remove();
        motion.clear();
        log!("motion stage cleared");
    });

    children()
}

/// Mount scenes once the component's elements exist, and unmount them with
/// the component.
///
/// `build` runs after render. Returning an empty list means the elements are
/// not attached yet; it runs again when they are.
pub fn use_scenes<F>(build: F)
where
    F: Fn() -> Result<Vec<SceneSpec>, MotionError> + 'static,
{
    let Some(motion) = use_context::<MotionContext>() else {
        warn!("no MotionRoot above this component; animations disabled");
        return;
    };
    let mounted = StoredValue::new_local(Vec::<SceneId>::new());
    let built = StoredValue::new_local(false);

    Effect::new(move |_| {
        if built.get_value() {
            return;
        }
        match build() {
            Ok(specs) if specs.is_empty() => {}
            Ok(specs) => {
                built.set_value(true);
                let ids: Vec<SceneId> = specs.into_iter().filter_map(|s| motion.add(s)).collect();
                mounted.update_value(|mounted| mounted.extend(ids));
            }
            Err(err) => {
                built.set_value(true);
                warn!("animation not mounted: {err}");
            }
        }
    });

    on_cleanup(move || {
        if let Some(ids) = mounted.try_get_value() {
            for id in ids {
                motion.remove(id);
            }
        }
    });
}

/// Cast a node ref's element to a plain `HtmlElement`.
pub fn html<E: JsCast>(element: Option<E>) -> Option<HtmlElement> {
    element.map(JsCast::unchecked_into)
}
