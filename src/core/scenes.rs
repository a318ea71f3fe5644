//! Choreography for every animated part of the page.
//!
//! Each function returns a [`Choreography`]: a timeline plus the scroll
//! trigger that starts it (or none, for timelines that play on mount).
//! Slots are named per section; the components bind each slot to the
//! elements it animates.

use crate::core::error::MotionError;
use crate::core::motion::{
    Ease, Pose, Position, ReplayPolicy, Repeat, Timeline, TriggerSpec, Tween,
};

/// A timeline and what starts it.
#[derive(Clone, Debug, PartialEq)]
pub struct Choreography {
    pub timeline: Timeline,
    pub trigger: Option<TriggerSpec>,
}

impl Choreography {
    /// Plays as soon as it is mounted.
    pub fn autoplay(timeline: Timeline) -> Self {
        Self {
            timeline,
            trigger: None,
        }
    }

    /// Driven by a scroll trigger.
    pub fn on_scroll(timeline: Timeline, trigger: TriggerSpec) -> Self {
        Self {
            timeline,
            trigger: Some(trigger),
        }
    }

    #[cfg(test)]
    pub fn autoplays(&self) -> bool {
        self.trigger.is_none()
    }
}

fn rise(distance: f64, duration: f64) -> Tween {
    Tween::from_to(
        Pose::new().opacity(0.0).y(distance),
        Pose::new().opacity(1.0).y(0.0),
        duration,
    )
}

fn entrance(start: &str, end: Option<&str>) -> Result<TriggerSpec, MotionError> {
    let spec = TriggerSpec::toggle(start, ReplayPolicy::PlayOnce)?;
    match end {
        Some(end) => spec.until(end),
        None => Ok(spec),
    }
}

fn single(slot: usize, tween: Tween) -> Timeline {
    Timeline::new().then(slot, tween, Position::Sequence)
}

/// Splash screen name and pulsing dots.
pub mod splash {
    use super::*;

    pub const TEXT: usize = 0;
    /// Dot `i` uses slot `DOT + i`.
    pub const DOT: usize = 1;

    pub fn intro(dots: usize) -> Choreography {
        let text = Tween::from_to(
            Pose::new().opacity(0.0).y(32.0),
            Pose::new().opacity(1.0).y(0.0),
            1.5,
        )
        .ease(Ease::Power3Out);

        let mut timeline = Timeline::new();
        timeline.push(TEXT, text, Position::Sequence);
        for i in 0..dots {
            let pulse = Tween::from_to(
                Pose::new().opacity(0.2).scale(0.0),
                Pose::new().opacity(1.0).scale(1.2),
                0.5,
            )
            .ease(Ease::Power1InOut)
            .yoyo(true)
            .repeat(Repeat::Count(1))
            .delay(i as f64 * 0.2);
            timeline.push(DOT + i, pulse, Position::Overlap(0.4));
        }
        Choreography::autoplay(timeline)
    }
}

/// Reveal applied to every top-level section.
pub mod page {
    use super::*;

    pub const SECTION: usize = 0;

    pub fn reveal() -> Result<Choreography, MotionError> {
        let lift = Tween::from_to(Pose::new().opacity(1.0).y(50.0), Pose::new().y(0.0), 1.2)
            .ease(Ease::Power3Out);
        Ok(Choreography::on_scroll(
            single(SECTION, lift),
            entrance("top 80%", Some("top 30%"))?,
        ))
    }
}

/// Header slide-in and the mobile menu sheet.
pub mod navbar {
    use super::*;

    pub const HEADER: usize = 0;
    /// Brand mark and, on narrow screens, the menu button.
    pub const CONTROLS: usize = 1;
    pub const LINKS: usize = 2;

    pub const SHEET: usize = 0;
    pub const SHEET_LINKS: usize = 1;

    /// Seconds the sheet takes to fade out before it is removed.
    pub const SHEET_EXIT: f64 = 0.3;

    fn fade_in() -> Tween {
        Tween::from_to(Pose::new().opacity(0.0), Pose::new().opacity(1.0), 0.3)
    }

    /// Header drops in from above; brand and button fade in after it
    /// starts, and each desktop link slides down 0.1s after the previous.
    pub fn entrance(controls: usize, links: usize) -> Choreography {
        let header = Tween::from_to(Pose::new().y(-100.0), Pose::new().y(0.0), 0.5);
        let links = rise(-20.0, 0.3).targets(links).stagger(0.1);
        let timeline = Timeline::new()
            .then(HEADER, header, Position::At(0.0))
            .then(CONTROLS, fade_in().targets(controls), Position::At(0.3))
            .then(LINKS, links, Position::At(0.1));
        Choreography::autoplay(timeline)
    }

    /// Sheet slides down into place while its links rise in one by one.
    pub fn sheet(links: usize) -> Choreography {
        let timeline = Timeline::new()
            .then(SHEET, rise(-20.0, 0.3), Position::At(0.0))
            .then(
                SHEET_LINKS,
                rise(20.0, 0.3).targets(links).stagger(0.1),
                Position::At(0.0),
            );
        Choreography::autoplay(timeline)
    }

    /// Reverse of the sheet's slide, played while it closes.
    pub fn sheet_exit() -> Choreography {
        let leave = Tween::from_to(
            Pose::new().opacity(1.0).y(0.0),
            Pose::new().opacity(0.0).y(-20.0),
            SHEET_EXIT,
        );
        Choreography::autoplay(single(SHEET, leave))
    }
}

pub mod hero {
    use super::*;

    pub const TITLE: usize = 0;
    pub const SUBTITLE: usize = 1;
    pub const CTA: usize = 2;
    pub const SHAPES: usize = 3;

    pub fn entrance(shapes: usize) -> Choreography {
        let timeline = Timeline::new()
            .with_delay(0.3)
            .then(TITLE, rise(40.0, 1.2).ease(Ease::Power2Out), Position::Sequence)
            .then(
                SUBTITLE,
                rise(20.0, 1.0).ease(Ease::Power2Out),
                Position::Overlap(0.8),
            )
            .then(CTA, rise(10.0, 0.8).ease(Ease::Power2Out), Position::Overlap(0.6))
            .then(
                SHAPES,
                Tween::from_to(
                    Pose::new().opacity(0.0).scale(0.0),
                    Pose::new().opacity(0.9).scale(1.0),
                    1.2,
                )
                .ease(Ease::ELASTIC_OUT)
                .targets(shapes)
                .stagger(0.15),
                Position::Overlap(0.7),
            );
        Choreography::autoplay(timeline)
    }

    /// Endless drift of the decorative shapes.
    pub fn float(shapes: usize) -> Choreography {
        let drift = Tween::from_to(
            Pose::new().x(-15.0).y(-15.0).rotate(-10.0),
            Pose::new().x(15.0).y(15.0).rotate(10.0),
            4.0,
        )
        .ease(Ease::SineInOut)
        .yoyo(true)
        .repeat(Repeat::Forever)
        .targets(shapes)
        .stagger(0.3);
        Choreography::autoplay(single(0, drift))
    }

    pub fn wave() -> Choreography {
        let wave = Tween::to(Pose::new().rotate(14.0), 0.3)
            .ease(Ease::SineInOut)
            .yoyo(true)
            .repeat(Repeat::Forever);
        Choreography::autoplay(single(0, wave))
    }

    /// Content sinks and fades while the hero scrolls away.
    pub fn parallax() -> Result<Choreography, MotionError> {
        let sink = Tween::to(Pose::new().y(200.0).opacity(0.7), 1.0).ease(Ease::Linear);
        Ok(Choreography::on_scroll(
            single(0, sink),
            TriggerSpec::scrub("top top", "bottom top")?,
        ))
    }
}

pub mod about {
    use super::*;

    pub const HEADING: usize = 0;
    pub const PARAGRAPHS: usize = 1;
    pub const CARD: usize = 2;

    pub fn entrance(paragraphs: usize) -> Result<Choreography, MotionError> {
        let timeline = Timeline::new()
            .then(HEADING, rise(40.0, 1.0).ease(Ease::Power2Out), Position::Sequence)
            .then(
                PARAGRAPHS,
                rise(20.0, 0.8)
                    .ease(Ease::Power2Out)
                    .targets(paragraphs)
                    .stagger(0.15),
                Position::Overlap(0.6),
            )
            .then(
                CARD,
                Tween::from_to(
                    Pose::new().opacity(0.0).scale(0.85),
                    Pose::new().opacity(1.0).scale(1.0),
                    1.0,
                )
                .ease(Ease::BACK_OUT),
                Position::Overlap(0.4),
            );
        Ok(Choreography::on_scroll(
            timeline,
            super::entrance("top 80%", Some("bottom 20%"))?,
        ))
    }

    pub fn backdrop() -> Result<Choreography, MotionError> {
        let glide = Tween::from_to(Pose::new().y_percent(-10.0), Pose::new().y_percent(10.0), 1.0)
            .ease(Ease::Linear);
        Ok(Choreography::on_scroll(
            single(0, glide),
            TriggerSpec::scrub("top bottom", "bottom top")?,
        ))
    }
}

pub mod skills {
    use super::*;

    pub fn title() -> Result<Choreography, MotionError> {
        Ok(Choreography::on_scroll(
            single(0, rise(50.0, 0.8).ease(Ease::Power3Out)),
            entrance("top 80%", Some("bottom 20%"))?,
        ))
    }

    pub fn cards(count: usize) -> Result<Choreography, MotionError> {
        let cards = rise(30.0, 0.5).targets(count).stagger(0.1);
        Ok(Choreography::on_scroll(
            single(0, cards),
            entrance("top 80%", None)?,
        ))
    }
}

pub mod projects {
    use super::*;

    pub const HEADING: usize = 0;
    pub const CARDS: usize = 1;

    pub fn entrance(cards: usize) -> Result<Choreography, MotionError> {
        let timeline = Timeline::new()
            .then(HEADING, rise(30.0, 0.7).ease(Ease::Power3Out), Position::Sequence)
            .then(
                CARDS,
                Tween::from_to(
                    Pose::new()
                        .opacity(0.0)
                        .y(50.0)
                        .rotate_x(15.0)
                        .rotate_y(-10.0)
                        .scale(0.9),
                    Pose::new()
                        .opacity(1.0)
                        .y(0.0)
                        .rotate_x(0.0)
                        .rotate_y(0.0)
                        .scale(1.0),
                    0.8,
                )
                .ease(Ease::Power2Out)
                .targets(cards)
                .stagger(0.15),
                Position::Overlap(0.3),
            );
        Ok(Choreography::on_scroll(
            timeline,
            super::entrance("top 70%", Some("center center"))?,
        ))
    }

    /// Background shapes drift 100px, alternating up and down. Shape `i`
    /// uses slot `i`.
    pub fn shapes(count: usize) -> Result<Choreography, MotionError> {
        let mut timeline = Timeline::new();
        for i in 0..count {
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            let drift = Tween::to(Pose::new().y(direction * 100.0), 1.0).ease(Ease::Linear);
            timeline.push(i, drift, Position::At(0.0));
        }
        Ok(Choreography::on_scroll(
            timeline,
            TriggerSpec::scrub("top bottom", "bottom top")?,
        ))
    }
}

pub mod contact {
    use super::*;

    pub fn panel() -> Result<Choreography, MotionError> {
        Ok(Choreography::on_scroll(
            single(0, rise(50.0, 1.0).ease(Ease::Power3Out)),
            entrance("top 80%", Some("bottom 20%"))?,
        ))
    }

    pub fn controls(count: usize) -> Result<Choreography, MotionError> {
        let controls = rise(20.0, 0.8)
            .ease(Ease::BACK_OUT)
            .targets(count)
            .stagger(0.2);
        Ok(Choreography::on_scroll(
            single(0, controls),
            entrance("top 80%", None)?,
        ))
    }

    pub fn social() -> Result<Choreography, MotionError> {
        let slide = Tween::from_to(
            Pose::new().opacity(0.0).x(-30.0),
            Pose::new().opacity(1.0).x(0.0),
            1.0,
        )
        .ease(Ease::Power2Out);
        Ok(Choreography::on_scroll(
            single(0, slide),
            entrance("top 90%", None)?,
        ))
    }

    pub fn backdrop() -> Result<Choreography, MotionError> {
        let pan = Tween::from_to(Pose::new().background_y(50.0), Pose::new().background_y(0.0), 1.0)
            .ease(Ease::Linear);
        Ok(Choreography::on_scroll(
            single(0, pan),
            TriggerSpec::scrub("top bottom", "bottom top")?,
        ))
    }
}
