//! The set of mounted timelines and the triggers that drive them.

use super::playhead::Playhead;
use super::registry::{TriggerId, TriggerRegistry};
use super::timeline::Timeline;
use super::trigger::{Rect, TriggerSpec};

/// Something a frame can be rendered onto.
pub trait Target {
    fn render(&self, declarations: &[(&'static str, String)]);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(u64);

struct Scene<T> {
    id: SceneId,
    timeline: Timeline,
    playhead: Playhead,
    /// Targets per timeline slot.
    targets: Vec<Vec<T>>,
    trigger: Option<TriggerId>,
    stale: bool,
}

impl<T: Target> Scene<T> {
    fn render(&self) {
        for frame in self.timeline.sample(self.playhead.time()) {
            if let Some(target) = self
                .targets
                .get(frame.slot)
                .and_then(|slot| slot.get(frame.index))
            {
                target.render(&frame.pose.declarations());
            }
        }
    }
}

/// Mounted scenes, each a timeline with its own playhead, optionally bound
/// to a scroll trigger.
pub struct Stage<T> {
    next_id: u64,
    scenes: Vec<Scene<T>>,
    registry: TriggerRegistry,
}

impl<T> Default for Stage<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            scenes: Vec::new(),
            registry: TriggerRegistry::new(),
        }
    }
}

impl<T: Target> Stage<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a timeline and render its first frame.
    ///
    /// Without a trigger the scene starts playing immediately; with one it
    /// waits for the trigger's first action.
    pub fn add(
        &mut self,
        timeline: Timeline,
        targets: Vec<Vec<T>>,
        trigger: Option<(TriggerSpec, Box<dyn Fn() -> Option<Rect>>)>,
    ) -> SceneId {
        let id = SceneId(self.next_id);
        self.next_id += 1;

        let mut playhead = Playhead::new(timeline.duration());
        let trigger = match trigger {
            Some((spec, measure)) => Some(self.registry.register(spec, measure)),
            None => {
                playhead.play();
                None
            }
        };

        let scene = Scene {
            id,
            timeline,
            playhead,
            targets,
            trigger,
            stale: false,
        };
        scene.render();
        self.scenes.push(scene);
        id
    }

    /// Unmount a scene and kill its trigger. Returns `false` if unknown.
    pub fn remove(&mut self, id: SceneId) -> bool {
        let Some(pos) = self.scenes.iter().position(|scene| scene.id == id) else {
            return false;
        };
        let scene = self.scenes.remove(pos);
        if let Some(trigger) = scene.trigger {
            self.registry.kill(trigger);
        }
        true
    }

    /// Unmount everything.
    pub fn clear(&mut self) {
        self.scenes.clear();
        self.registry.kill_all();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Number of live scroll triggers.
    #[cfg(test)]
    pub fn trigger_count(&self) -> usize {
        self.registry.len()
    }

    #[cfg(test)]
    pub fn playhead(&self, id: SceneId) -> Option<&Playhead> {
        self.scenes
            .iter()
            .find(|scene| scene.id == id)
            .map(|scene| &scene.playhead)
    }

    /// Re-measure trigger elements after a scroll or resize and apply the
    /// resulting actions.
    pub fn refresh(&mut self, viewport_height: f64) {
        for (trigger, action) in self.registry.refresh(viewport_height) {
            if let Some(scene) = self
                .scenes
                .iter_mut()
                .find(|scene| scene.trigger == Some(trigger))
            {
                scene.playhead.apply(action);
                scene.stale = true;
            }
        }
    }

    /// Advance every playing scene by `dt` seconds and render the scenes
    /// whose time changed.
    pub fn tick(&mut self, dt: f64) {
        for scene in &mut self.scenes {
            let moved = scene.playhead.advance(dt);
            if moved || scene.stale {
                scene.render();
                scene.stale = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::{Direction, Ease, Pose, Position, ReplayPolicy, Tween};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Records the last declarations rendered onto it.
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(&'static str, String)>>>);

    impl Recorder {
        fn get(&self, name: &str) -> Option<String> {
            self.0
                .borrow()
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone())
        }
    }

    impl Target for Recorder {
        fn render(&self, declarations: &[(&'static str, String)]) {
            *self.0.borrow_mut() = declarations.to_vec();
        }
    }

    fn fade_in() -> Timeline {
        Timeline::new().then(
            0,
            Tween::from_to(Pose::new().opacity(0.0), Pose::new().opacity(1.0), 1.0)
                .ease(Ease::Linear),
            Position::Sequence,
        )
    }

    fn element_at(top: Rc<Cell<f64>>) -> Box<dyn Fn() -> Option<Rect>> {
        Box::new(move || Some(Rect::new(top.get(), 400.0)))
    }

    #[test]
    fn test_autoplay_renders_from_pose_then_plays() {
        let mut stage = Stage::new();
        let recorder = Recorder::default();
        let id = stage.add(fade_in(), vec![vec![recorder.clone()]], None);

        assert_eq!(recorder.get("opacity").as_deref(), Some("0"));
        assert_eq!(stage.playhead(id).unwrap().direction(), Direction::Forward);

        stage.tick(0.5);
        assert_eq!(recorder.get("opacity").as_deref(), Some("0.5"));
        stage.tick(5.0);
        assert_eq!(recorder.get("opacity").as_deref(), Some("1"));
        assert!(!stage.playhead(id).unwrap().is_playing());
    }

    #[test]
    fn test_triggered_scene_waits_for_scroll() {
        let mut stage = Stage::new();
        let recorder = Recorder::default();
        let top = Rc::new(Cell::new(1500.0));
        let spec = TriggerSpec::toggle("top 80%", ReplayPolicy::PlayOnce).unwrap();
        let id = stage.add(
            fade_in(),
            vec![vec![recorder.clone()]],
            Some((spec, element_at(top.clone()))),
        );

        stage.refresh(1000.0);
        stage.tick(0.5);
        assert_eq!(recorder.get("opacity").as_deref(), Some("0"));

        top.set(700.0);
        stage.refresh(1000.0);
        stage.tick(0.25);
        assert_eq!(recorder.get("opacity").as_deref(), Some("0.25"));
        assert!(stage.playhead(id).unwrap().is_playing());
    }

    #[test]
    fn test_scrub_seeks_without_playing() {
        let mut stage = Stage::new();
        let recorder = Recorder::default();
        let top = Rc::new(Cell::new(1000.0));
        let spec = TriggerSpec::scrub("top bottom", "bottom top").unwrap();
        stage.add(
            fade_in(),
            vec![vec![recorder.clone()]],
            Some((spec, element_at(top.clone()))),
        );

        // Halfway through a 1400px travel (1000px viewport + 400px element).
        top.set(300.0);
        stage.refresh(1000.0);
        stage.tick(0.0);
        assert_eq!(recorder.get("opacity").as_deref(), Some("0.5"));
    }

    #[test]
    fn test_missing_slot_is_ignored() {
        let mut stage: Stage<Recorder> = Stage::new();
        stage.add(fade_in(), Vec::new(), None);
        stage.tick(0.5);
        assert_eq!(stage.len(), 1);
    }

    #[test]
    fn test_remove_kills_trigger() {
        let mut stage = Stage::new();
        let spec = TriggerSpec::toggle("top 80%", ReplayPolicy::PlayOnce).unwrap();
        let a = stage.add(
            fade_in(),
            vec![vec![Recorder::default()]],
            Some((spec, element_at(Rc::new(Cell::new(0.0))))),
        );
        let b = stage.add(fade_in(), vec![vec![Recorder::default()]], None);
        assert_eq!(stage.trigger_count(), 1);

        assert!(stage.remove(a));
        assert!(!stage.remove(a));
        assert_eq!(stage.trigger_count(), 0);
        assert_eq!(stage.len(), 1);

        assert!(stage.remove(b));
        assert!(stage.is_empty());
    }

    #[test]
    fn test_remount_does_not_accumulate() {
        let mut stage = Stage::new();
        for _ in 0..3 {
            let ids: Vec<SceneId> = (0..4)
                .map(|_| {
                    let spec = TriggerSpec::toggle("top 80%", ReplayPolicy::PlayOnce).unwrap();
                    stage.add(
                        fade_in(),
                        vec![vec![Recorder::default()]],
                        Some((spec, element_at(Rc::new(Cell::new(0.0))))),
                    )
                })
                .collect();
            assert_eq!(stage.trigger_count(), 4);
            for id in ids {
                stage.remove(id);
            }
            assert_eq!(stage.trigger_count(), 0);
            assert!(stage.is_empty());
        }
    }

    #[test]
    fn test_clear() {
        let mut stage = Stage::new();
        let spec = TriggerSpec::toggle("top 80%", ReplayPolicy::PlayOnce).unwrap();
        stage.add(
            fade_in(),
            vec![vec![Recorder::default()]],
            Some((spec, element_at(Rc::new(Cell::new(0.0))))),
        );
        stage.add(fade_in(), vec![vec![Recorder::default()]], None);
        stage.clear();
        assert!(stage.is_empty());
        assert_eq!(stage.trigger_count(), 0);
    }
}
