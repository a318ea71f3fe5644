//! Timeline animation engine.
//!
//! Pure and DOM-free: poses are interpolated here and rendered to CSS
//! declarations; `components::motion` samples them on animation frames and
//! writes the result to elements.
//!
//! - [`Ease`] - easing curves
//! - [`Pose`], [`Prop`] - animated property sets
//! - [`Tween`] - one interpolation over staggered targets
//! - [`Timeline`] - ordered tweens with position parameters
//! - [`ScrollTrigger`], [`TriggerSpec`] - scroll boundaries to playback actions
//! - [`TriggerRegistry`] - the page-wide set of live triggers
//! - [`Playhead`] - playback clock
//! - [`Stage`] - mounted timelines bound to their triggers

mod ease;
mod playhead;
mod pose;
mod registry;
mod stage;
mod timeline;
mod trigger;
mod tween;

pub use ease::Ease;
pub use playhead::{Direction, Playhead};
pub use pose::{Pose, Prop};
pub(crate) use pose::num;
pub use registry::{TriggerId, TriggerRegistry};
pub use stage::{SceneId, Stage, Target};
pub use timeline::{Frame, Position, Step, Timeline};
pub use trigger::{Action, Boundary, Edge, Rect, ReplayPolicy, ScrollTrigger, TriggerMode, TriggerSpec};
pub use tween::{Repeat, Tween};
