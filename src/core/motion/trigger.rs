//! Scroll-position triggers.
//!
//! A trigger watches one element's bounding box against the viewport and
//! turns scroll movement into playback [`Action`]s.

use std::str::FromStr;

use crate::core::error::MotionError;

/// Vertical extent of an element, relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the horizontal line at `y` crosses this rect (edges inclusive).
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom() >= y
    }
}

/// A point along an element or the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    Percent(f64),
    Pixels(f64),
}

impl Edge {
    /// Offset of this point from the top of something `extent` pixels tall.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => extent / 2.0,
            Self::Bottom => extent,
            Self::Percent(percent) => extent * percent / 100.0,
            Self::Pixels(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = |digits: &str| {
            digits
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| MotionError::InvalidEdge(s.to_string()))
        };

        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => {
                if let Some(digits) = s.strip_suffix('%') {
                    number(digits).map(Self::Percent)
                } else if let Some(digits) = s.strip_suffix("px") {
                    number(digits).map(Self::Pixels)
                } else {
                    Err(MotionError::InvalidEdge(s.to_string()))
                }
            }
        }
    }
}

/// `"<element edge> <viewport edge>"`, e.g. `"top 80%"`: the moment the
/// element's top reaches 80% down the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub element: Edge,
    pub viewport: Edge,
}

impl Boundary {
    /// How far the element point still has to travel up to meet the viewport
    /// point. Positive before the boundary is crossed, zero or negative after.
    pub fn distance(&self, rect: Rect, viewport_height: f64) -> f64 {
        rect.top + self.element.resolve(rect.height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for Boundary {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(MotionError::InvalidBoundary(s.to_string())),
        }
    }
}

/// What a toggle trigger does when scrolled back above its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Play forward the first time the start is crossed, then never again.
    PlayOnce,
    /// Play forward on enter, reverse when scrolled back above the start.
    PlayReverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    /// Fire timed playback when the start boundary is crossed.
    Toggle(ReplayPolicy),
    /// Tie playback progress linearly to the scroll position between start
    /// and end.
    Scrub,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerSpec {
    pub start: Boundary,
    pub end: Boundary,
    pub mode: TriggerMode,
}

impl TriggerSpec {
    /// Default end boundary: the element's bottom leaves the viewport top.
    pub const DEFAULT_END: Boundary = Boundary {
        element: Edge::Bottom,
        viewport: Edge::Top,
    };

    pub fn toggle(start: &str, policy: ReplayPolicy) -> Result<Self, MotionError> {
        Ok(Self {
            start: start.parse()?,
            end: Self::DEFAULT_END,
            mode: TriggerMode::Toggle(policy),
        })
    }

    pub fn scrub(start: &str, end: &str) -> Result<Self, MotionError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
            mode: TriggerMode::Scrub,
        })
    }

    pub fn until(mut self, end: &str) -> Result<Self, MotionError> {
        self.end = end.parse()?;
        Ok(self)
    }
}

/// Playback instruction produced by a trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Play,
    Reverse,
    /// Jump to this fraction of the timeline.
    Seek(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    Before,
    Inside,
    After,
}

/// Runtime state of one trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    spec: TriggerSpec,
    zone: Option<Zone>,
    fired: bool,
    progress: Option<f64>,
}

impl ScrollTrigger {
    pub fn new(spec: TriggerSpec) -> Self {
        Self {
            spec,
            zone: None,
            fired: false,
            progress: None,
        }
    }

    /// A play-once trigger that already fired has nothing left to do.
    pub fn is_spent(&self) -> bool {
        self.fired && self.spec.mode == TriggerMode::Toggle(ReplayPolicy::PlayOnce)
    }

    /// Linear position between the start and end boundaries, in `[0, 1]`.
    pub fn progress(&self, rect: Rect, viewport_height: f64) -> f64 {
        let to_start = self.spec.start.distance(rect, viewport_height);
        let to_end = self.spec.end.distance(rect, viewport_height);
        let span = to_end - to_start;
        if span <= 0.0 {
            return if to_start <= 0.0 { 1.0 } else { 0.0 };
        }
        (-to_start / span).clamp(0.0, 1.0)
    }

    fn zone(&self, rect: Rect, viewport_height: f64) -> Zone {
        if self.spec.start.distance(rect, viewport_height) > 0.0 {
            Zone::Before
        } else if self.spec.end.distance(rect, viewport_height) > 0.0 {
            Zone::Inside
        } else {
            Zone::After
        }
    }

    /// Feed a new measurement; returns the action to take, if any.
    ///
    /// The first measurement counts as entering when the page loads already
    /// scrolled past the start.
    pub fn update(&mut self, rect: Rect, viewport_height: f64) -> Option<Action> {
        match self.spec.mode {
            TriggerMode::Scrub => {
                let progress = self.progress(rect, viewport_height);
                if self.progress == Some(progress) {
                    return None;
                }
                self.progress = Some(progress);
                Some(Action::Seek(progress))
            }
            TriggerMode::Toggle(policy) => {
                if self.is_spent() {
                    return None;
                }
                let zone = self.zone(rect, viewport_height);
                let previous = self.zone.replace(zone);
                let was_before = previous.is_none_or(|z| z == Zone::Before);

                match (was_before, zone) {
                    (true, Zone::Inside | Zone::After) => {
                        self.fired = true;
                        Some(Action::Play)
                    }
                    (false, Zone::Before) => match policy {
                        ReplayPolicy::PlayReverse => Some(Action::Reverse),
                        ReplayPolicy::PlayOnce => None,
                    },
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn section_at(top: f64) -> Rect {
        Rect::new(top, 600.0)
    }

    #[test]
    fn test_parse_boundary() {
        let b: Boundary = "top 80%".parse().unwrap();
        assert_eq!(b.element, Edge::Top);
        assert_eq!(b.viewport, Edge::Percent(80.0));

        let b: Boundary = "center  120px".parse().unwrap();
        assert_eq!(b.element, Edge::Center);
        assert_eq!(b.viewport, Edge::Pixels(120.0));

        let b: Boundary = "bottom top".parse().unwrap();
        assert_eq!(b, TriggerSpec::DEFAULT_END);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "top".parse::<Boundary>(),
            Err(MotionError::InvalidBoundary(_))
        ));
        assert!(matches!(
            "top 80% extra".parse::<Boundary>(),
            Err(MotionError::InvalidBoundary(_))
        ));
        assert!(matches!(
            "middle 80%".parse::<Boundary>(),
            Err(MotionError::InvalidEdge(_))
        ));
        assert!(matches!(
            "top abc%".parse::<Boundary>(),
            Err(MotionError::InvalidEdge(_))
        ));
    }

    #[test]
    fn test_rect_straddles() {
        let rect = Rect::new(-50.0, 300.0);
        assert!(rect.straddles(100.0));
        assert!(rect.straddles(-50.0));
        assert!(rect.straddles(250.0));
        assert!(!rect.straddles(251.0));
    }

    #[test]
    fn test_play_once_fires_a_single_time() {
        let spec = TriggerSpec::toggle("top 80%", ReplayPolicy::PlayOnce).unwrap();
        let mut trigger = ScrollTrigger::new(spec);

        assert_eq!(trigger.update(section_at(900.0), VH), None);
        assert_eq!(trigger.update(section_at(790.0), VH), Some(Action::Play));
        assert!(trigger.is_spent());
        assert_eq!(trigger.update(section_at(900.0), VH), None);
        assert_eq!(trigger.update(section_at(700.0), VH), None);
    }

    #[test]
    fn test_play_reverse_on_leave_back() {
        let spec = TriggerSpec::toggle("top 80%", ReplayPolicy::PlayReverse).unwrap();
        let mut trigger = ScrollTrigger::new(spec);

        assert_eq!(trigger.update(section_at(900.0), VH), None);
        assert_eq!(trigger.update(section_at(500.0), VH), Some(Action::Play));
        assert_eq!(trigger.update(section_at(400.0), VH), None);
        assert_eq!(trigger.update(section_at(850.0), VH), Some(Action::Reverse));
        assert_eq!(trigger.update(section_at(700.0), VH), Some(Action::Play));
    }

    #[test]
    fn test_loaded_past_start_plays_immediately() {
        let spec = TriggerSpec::toggle("top 80%", ReplayPolicy::PlayOnce).unwrap();
        let mut trigger = ScrollTrigger::new(spec);
        assert_eq!(trigger.update(section_at(-2000.0), VH), Some(Action::Play));
    }

    #[test]
    fn test_scrub_progress_is_linear() {
        // Section 600px tall, "top bottom" to "bottom top": 1600px of travel.
        let spec = TriggerSpec::scrub("top bottom", "bottom top").unwrap();
        let mut trigger = ScrollTrigger::new(spec);

        assert_eq!(trigger.update(section_at(1000.0), VH), Some(Action::Seek(0.0)));
        assert_eq!(trigger.update(section_at(600.0), VH), Some(Action::Seek(0.25)));
        assert_eq!(trigger.update(section_at(200.0), VH), Some(Action::Seek(0.5)));
        assert_eq!(trigger.update(section_at(-600.0), VH), Some(Action::Seek(1.0)));
        assert_eq!(trigger.update(section_at(-900.0), VH), None);
        assert_eq!(trigger.update(section_at(1500.0), VH), Some(Action::Seek(0.0)));
    }

    #[test]
    fn test_until_overrides_end() {
        let spec = TriggerSpec::toggle("top 80%", ReplayPolicy::PlayOnce)
            .and_then(|s| s.until("top 30%"))
            .unwrap();
        assert_eq!(spec.end.viewport, Edge::Percent(30.0));
        assert!(TriggerSpec::scrub("top top", "nowhere").is_err());
    }
}
