//! Playback clock for a timeline.

use super::trigger::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
    Paused,
}

/// Current time within a timeline and which way it is moving.
#[derive(Clone, Debug, PartialEq)]
pub struct Playhead {
    time: f64,
    duration: f64,
    direction: Direction,
}

impl Playhead {
    /// A paused playhead at time zero.
    pub fn new(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration: duration.max(0.0),
            direction: Direction::Paused,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    #[cfg(test)]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.direction != Direction::Paused
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
    }

    /// Jump to `progress` (clamped to `[0, 1]`) of the duration and pause.
    ///
    /// Has no effect on timelines that never end.
    pub fn seek(&mut self, progress: f64) {
        if self.duration.is_finite() {
            self.time = self.duration * progress.clamp(0.0, 1.0);
            self.direction = Direction::Paused;
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play => self.play(),
            Action::Reverse => self.reverse(),
            Action::Seek(progress) => self.seek(progress),
        }
    }

    /// Move the clock by `dt` seconds. Returns `true` if the time changed.
    ///
    /// The playhead pauses itself on reaching either end.
    pub fn advance(&mut self, dt: f64) -> bool {
        let before = self.time;
        match self.direction {
            Direction::Paused => return false,
            Direction::Forward => {
                self.time = (self.time + dt).min(self.duration);
                if self.time >= self.duration {
                    self.direction = Direction::Paused;
                }
            }
            Direction::Reverse => {
                self.time = (self.time - dt).max(0.0);
                if self.time <= 0.0 {
                    self.direction = Direction::Paused;
                }
            }
        }
        self.time != before
    }
}
