//! Ordered sequences of tweens.

use super::pose::Pose;
use super::tween::Tween;

/// Where a step is placed relative to what is already on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Start when everything before it has finished.
    Sequence,
    /// Start this many seconds before everything before it has finished
    /// (the `"-=0.4"` form). Never earlier than time zero.
    Overlap(f64),
    /// Start at an absolute time.
    At(f64),
}

/// A tween placed on a timeline, driving the targets in `slot`.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub slot: usize,
    pub start: f64,
    pub tween: Tween,
}

impl Step {
    pub fn end(&self) -> f64 {
        self.start + self.tween.total_duration()
    }
}

/// The sampled pose of one target.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub slot: usize,
    pub index: usize,
    pub pose: Pose,
}

/// A sequence of steps sharing one clock.
///
/// Slots are opaque indices chosen by the caller; the DOM layer maps each
/// slot to a list of elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    delay: f64,
    steps: Vec<Step>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait `delay` seconds before the first step.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    #[cfg(test)]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append a step and return its start time.
    pub fn push(&mut self, slot: usize, tween: Tween, position: Position) -> f64 {
        let end = self.end();
        let start = match position {
            Position::Sequence => end,
            Position::Overlap(seconds) => (end - seconds).max(0.0),
            Position::At(seconds) => seconds.max(0.0),
        };
        self.steps.push(Step { slot, start, tween });
        start
    }

    /// Builder form of [`Timeline::push`].
    pub fn then(mut self, slot: usize, tween: Tween, position: Position) -> Self {
        self.push(slot, tween, position);
        self
    }

    /// End of the last finite step, excluding the initial delay.
    fn end(&self) -> f64 {
        self.steps
            .iter()
            .map(Step::end)
            .filter(|end| end.is_finite())
            .fold(0.0, f64::max)
    }

    /// Total running time including the delay. Infinite if any step repeats
    /// forever.
    pub fn duration(&self) -> f64 {
        if self.steps.iter().any(|s| s.tween.is_infinite()) {
            f64::INFINITY
        } else {
            self.delay + self.end()
        }
    }

    /// Sample every target at `time` seconds.
    ///
    /// Frames are returned in step order. A step that has not started yet
    /// still renders its `from` pose, unless an earlier step drives the same
    /// slot: that earlier step owns the targets until the later one begins.
    pub fn sample(&self, time: f64) -> Vec<Frame> {
        let local = time - self.delay;
        let mut frames = Vec::new();
        let mut claimed: Vec<usize> = Vec::new();

        for step in &self.steps {
            let started = local >= step.start;
            if !started && claimed.contains(&step.slot) {
                continue;
            }
            if !claimed.contains(&step.slot) {
                claimed.push(step.slot);
            }
            for index in 0..step.tween.targets {
                frames.push(Frame {
                    slot: step.slot,
                    index,
                    pose: step.tween.sample(local - step.start, index),
                });
            }
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::{Ease, Prop};

    fn rise(distance: f64, duration: f64) -> Tween {
        Tween::from_to(
            Pose::new().opacity(0.0).y(distance),
            Pose::new().opacity(1.0).y(0.0),
            duration,
        )
        .ease(Ease::Linear)
    }

    #[test]
    fn test_sequence_and_overlap() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.push(0, rise(40.0, 1.2), Position::Sequence), 0.0);
        let subtitle = timeline.push(1, rise(20.0, 1.0), Position::Overlap(0.8));
        assert!((subtitle - 0.4).abs() < 1e-12);
        let cta = timeline.push(2, rise(10.0, 0.8), Position::Overlap(0.6));
        assert!((cta - 0.8).abs() < 1e-12);
        assert!((timeline.duration() - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_never_negative() {
        let mut timeline = Timeline::new();
        let start = timeline.push(0, rise(10.0, 0.2), Position::Overlap(5.0));
        assert_eq!(start, 0.0);
    }

    #[test]
    fn test_delay_shifts_everything() {
        let timeline = Timeline::new()
            .with_delay(0.3)
            .then(0, rise(40.0, 1.0), Position::Sequence);
        assert!((timeline.duration() - 1.3).abs() < 1e-12);
        let frames = timeline.sample(0.25);
        assert_eq!(frames[0].pose.get(Prop::Y), Some(40.0));
        let frames = timeline.sample(0.8);
        assert!((frames[0].pose.value(Prop::Y) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_pending_steps_render_from_pose() {
        let timeline = Timeline::new()
            .then(0, rise(40.0, 1.0), Position::Sequence)
            .then(1, rise(20.0, 1.0), Position::Sequence);
        let frames = timeline.sample(0.0);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].slot, 1);
        assert_eq!(frames[1].pose.get(Prop::Opacity), Some(0.0));
    }

    #[test]
    fn test_later_step_on_same_slot_waits() {
        let timeline = Timeline::new()
            .then(0, rise(40.0, 1.0), Position::Sequence)
            .then(
                0,
                Tween::to(Pose::new().scale(2.0), 1.0).ease(Ease::Linear),
                Position::Sequence,
            );
        let early = timeline.sample(0.5);
        assert_eq!(early.len(), 1);
        assert_eq!(early[0].pose.get(Prop::Y), Some(20.0));

        let late = timeline.sample(1.5);
        assert_eq!(late.len(), 2);
        assert_eq!(late[1].pose.get(Prop::Scale), Some(1.5));
    }

    #[test]
    fn test_staggered_step_emits_frame_per_target() {
        let timeline = Timeline::new().then(
            3,
            rise(20.0, 0.8).targets(4).stagger(0.15),
            Position::Sequence,
        );
        let frames = timeline.sample(0.0);
        assert_eq!(frames.len(), 4);
        assert!(frames.iter().all(|f| f.slot == 3));
        assert_eq!(
            frames.iter().map(|f| f.index).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
        assert!((timeline.duration() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_infinite_step() {
        let timeline = Timeline::new().then(
            0,
            Tween::to(Pose::new().rotate(10.0), 4.0).repeat(crate::core::motion::Repeat::Forever),
            Position::At(0.0),
        );
        assert!(timeline.duration().is_infinite());
    }
}
