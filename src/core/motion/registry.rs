//! Explicit registry of live scroll triggers.
//!
//! The registry is owned by the page root and shared with sections through
//! context. Sections register triggers on mount and kill them on unmount, so
//! remounting never accumulates stale triggers.

use super::trigger::{Action, Rect, ScrollTrigger, TriggerSpec};

/// Handle to a registered trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(u64);

type Measure = Box<dyn Fn() -> Option<Rect>>;

struct Entry {
    id: TriggerId,
    trigger: ScrollTrigger,
    measure: Measure,
}

#[derive(Default)]
pub struct TriggerRegistry {
    next_id: u64,
    entries: Vec<Entry>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger.
    ///
    /// `measure` reports the trigger element's current rect, or `None` if the
    /// element is gone, in which case the trigger is skipped on refresh.
    pub fn register(
        &mut self,
        spec: TriggerSpec,
        measure: impl Fn() -> Option<Rect> + 'static,
    ) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            trigger: ScrollTrigger::new(spec),
            measure: Box::new(measure),
        });
        id
    }

    /// Remove one trigger. Returns `false` if it was not registered.
    pub fn kill(&mut self, id: TriggerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn kill_all(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub fn contains(&self, id: TriggerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Measure every trigger and collect the actions they produce.
    pub fn refresh(&mut self, viewport_height: f64) -> Vec<(TriggerId, Action)> {
        self.entries
            .iter_mut()
            .filter(|entry| !entry.trigger.is_spent())
            .filter_map(|entry| {
                let rect = (entry.measure)()?;
                let action = entry.trigger.update(rect, viewport_height)?;
                Some((entry.id, action))
            })
            .collect()
    }
}
