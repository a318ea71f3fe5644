//! A single from/to interpolation over one or more targets.

use super::ease::Ease;
use super::pose::Pose;

/// How many extra times a tween plays after its first run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Never,
    Count(u32),
    Forever,
}

/// Interpolation from one [`Pose`] to another.
///
/// A tween may drive several targets; target `i` starts `i * stagger`
/// seconds after target `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    /// Duration of one run, in seconds.
    pub duration: f64,
    pub ease: Ease,
    pub targets: usize,
    pub stagger: f64,
    pub delay: f64,
    pub repeat: Repeat,
    /// Alternate direction on every repeat.
    pub yoyo: bool,
}

impl Tween {
    pub fn from_to(from: Pose, to: Pose, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease: Ease::default(),
            targets: 1,
            stagger: 0.0,
            delay: 0.0,
            repeat: Repeat::Never,
            yoyo: false,
        }
    }

    /// Tween from the neutral state to `to`.
    pub fn to(to: Pose, duration: f64) -> Self {
        Self::from_to(Pose::new(), to, duration)
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn targets(mut self, targets: usize) -> Self {
        self.targets = targets.max(1);
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger.max(0.0);
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Number of runs per target, `None` when repeating forever.
    fn runs(&self) -> Option<u32> {
        match self.repeat {
            Repeat::Never => Some(1),
            Repeat::Count(n) => Some(n.saturating_add(1)),
            Repeat::Forever => None,
        }
    }

    /// Time one target is animated, including repeats.
    pub fn target_duration(&self) -> f64 {
        match self.runs() {
            Some(runs) => self.duration * f64::from(runs),
            None => f64::INFINITY,
        }
    }

    /// Time from the tween's start until its last target settles.
    pub fn total_duration(&self) -> f64 {
        let spread = self.stagger * self.targets.saturating_sub(1) as f64;
        self.delay + spread + self.target_duration()
    }

    pub fn is_infinite(&self) -> bool {
        self.repeat == Repeat::Forever
    }

    /// Pose of target `index` at `time` seconds after the tween starts.
    ///
    /// Before a target starts it holds the `from` pose; after it finishes it
    /// holds the final pose of its last run.
    pub fn sample(&self, time: f64, index: usize) -> Pose {
        let local = time - self.delay - self.stagger * index as f64;
        let progress = if local <= 0.0 {
            0.0
        } else {
            self.ease.apply(self.run_progress(local))
        };
        Pose::lerp(&self.from, &self.to, progress)
    }

    /// Linear progress inside the current run, accounting for yoyo.
    fn run_progress(&self, local: f64) -> f64 {
        let last_run = self.runs().map(|runs| runs - 1);

        if self.duration <= 0.0 || local >= self.target_duration() {
            let reversed = self.yoyo && last_run.is_some_and(|run| run % 2 == 1);
            return if reversed { 0.0 } else { 1.0 };
        }

        let position = local / self.duration;
        let run = position.floor();
        let fraction = position - run;
        if self.yoyo && (run as u64) % 2 == 1 {
            1.0 - fraction
        } else {
            fraction
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::Prop;

    fn fade_up() -> Tween {
        Tween::from_to(
            Pose::new().opacity(0.0).y(40.0),
            Pose::new().opacity(1.0).y(0.0),
            1.0,
        )
        .ease(Ease::Linear)
    }

    #[test]
    fn test_holds_from_before_start() {
        let tween = fade_up().delay(0.5);
        let pose = tween.sample(0.2, 0);
        assert_eq!(pose.get(Prop::Opacity), Some(0.0));
        assert_eq!(pose.get(Prop::Y), Some(40.0));
    }

    #[test]
    fn test_progress_and_end() {
        let tween = fade_up();
        assert_eq!(tween.sample(0.5, 0).get(Prop::Y), Some(20.0));
        assert_eq!(tween.sample(1.0, 0).get(Prop::Y), Some(0.0));
        assert_eq!(tween.sample(9.0, 0).get(Prop::Opacity), Some(1.0));
    }

    #[test]
    fn test_stagger_offsets_targets() {
        let tween = fade_up().targets(3).stagger(0.25);
        assert_eq!(tween.total_duration(), 1.5);
        assert_eq!(tween.sample(0.5, 0).get(Prop::Y), Some(20.0));
        assert_eq!(tween.sample(0.5, 1).get(Prop::Y), Some(30.0));
        assert_eq!(tween.sample(0.5, 2).get(Prop::Y), Some(40.0));
    }

    #[test]
    fn test_yoyo_returns_to_start() {
        let pulse = Tween::to(Pose::new().scale(1.2), 0.5)
            .ease(Ease::Linear)
            .repeat(Repeat::Count(1))
            .yoyo(true);
        assert_eq!(pulse.total_duration(), 1.0);
        assert!((pulse.sample(0.5, 0).value(Prop::Scale) - 1.2).abs() < 1e-12);
        assert!((pulse.sample(0.75, 0).value(Prop::Scale) - 1.1).abs() < 1e-12);
        assert_eq!(pulse.sample(2.0, 0).value(Prop::Scale), 1.0);
    }

    #[test]
    fn test_forever_never_settles() {
        let wave = Tween::to(Pose::new().rotate(14.0), 0.3)
            .ease(Ease::Linear)
            .repeat(Repeat::Forever)
            .yoyo(true);
        assert!(wave.is_infinite());
        assert_eq!(wave.total_duration(), f64::INFINITY);
        let at = wave.sample(3.0 + 0.15, 0).value(Prop::Rotate);
        assert!((at - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let tween = Tween::from_to(Pose::new().x(0.0), Pose::new().x(10.0), 0.0);
        assert_eq!(tween.sample(0.01, 0).get(Prop::X), Some(10.0));
    }
}
