//! Browser side of the animation engine.
//!
//! - [`MotionRoot`] - owns the page's stage and drives it every frame
//! - [`use_scenes`] - mounts a section's timelines for its lifetime
//! - [`use_tilt`] - pointer tilt for cards

mod context;
mod tilt;

pub use context::{html, use_scenes, MotionRoot, SceneSpec};
pub use tilt::use_tilt;
