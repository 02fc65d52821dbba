use bevy::prelude::*;

use crate::engine::population::PhotoId;

/// Currently selected photo, if any, and when it was selected.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    active: Option<PhotoId>,
    activated_at_ms: f64,
}

/// Outcome of one trigger against the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionTransition {
    /// Idle → Active, or Active → Active with a different photo.
    Activated(PhotoId),
    /// Active → Idle.
    Deselected(PhotoId),
    /// Trigger arrived inside the lock window and was dropped.
    Ignored,
    /// Idle and nothing under the pointer.
    Unchanged,
}

impl SelectionState {
    pub fn active(&self) -> Option<PhotoId> {
        self.active
    }

    pub fn activated_at_ms(&self) -> f64 {
        self.activated_at_ms
    }

    pub fn is_locked(&self, now_ms: f64, lock_ms: f64) -> bool {
        self.active.is_some() && now_ms - self.activated_at_ms < lock_ms
    }

    /// Applies a trigger whose nearest in-threshold panel is `hit`.
    pub fn apply_trigger(
        &mut self,
        hit: Option<PhotoId>,
        now_ms: f64,
        lock_ms: f64,
    ) -> SelectionTransition {
        match self.active {
            None => match hit {
                Some(id) => self.activate(id, now_ms),
                None => SelectionTransition::Unchanged,
            },
            Some(_) if self.is_locked(now_ms, lock_ms) => SelectionTransition::Ignored,
            Some(current) => match hit {
                Some(id) if id != current => self.activate(id, now_ms),
                _ => {
                    self.active = None;
                    SelectionTransition::Deselected(current)
                }
            },
        }
    }

    fn activate(&mut self, id: PhotoId, now_ms: f64) -> SelectionTransition {
        self.active = Some(id);
        self.activated_at_ms = now_ms;
        SelectionTransition::Activated(id)
    }
}

/// Remembers the last trigger count seen so each tap is handled once.
#[derive(Resource, Debug, Clone, Default)]
pub struct SelectionResolver {
    last_trigger: u64,
}

impl SelectionResolver {
    /// True when `trigger_count` moved since the last call. Several
    /// increments between two calls count as one trigger.
    pub fn take_trigger(&mut self, trigger_count: u64) -> bool {
        if trigger_count == self.last_trigger {
            return false;
        }
        self.last_trigger = trigger_count;
        true
    }
}

/// Sent whenever the active photo changes.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SelectionChanged {
    pub active: Option<PhotoId>,
    pub activated_at_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCK: f64 = 3000.0;

    #[test]
    fn idle_selects_hit() {
        let mut state = SelectionState::default();
        assert_eq!(
            state.apply_trigger(Some(PhotoId(4)), 100.0, LOCK),
            SelectionTransition::Activated(PhotoId(4))
        );
        assert_eq!(state.active(), Some(PhotoId(4)));
        assert_eq!(state.activated_at_ms(), 100.0);
    }

    #[test]
    fn idle_miss_stays_idle() {
        let mut state = SelectionState::default();
        assert_eq!(
            state.apply_trigger(None, 100.0, LOCK),
            SelectionTransition::Unchanged
        );
        assert_eq!(state.active(), None);
    }

    #[test]
    fn lock_ignores_every_trigger() {
        let mut state = SelectionState::default();
        state.apply_trigger(Some(PhotoId(1)), 1000.0, LOCK);
        for hit in [None, Some(PhotoId(1)), Some(PhotoId(2))] {
            assert_eq!(
                state.apply_trigger(hit, 3999.0, LOCK),
                SelectionTransition::Ignored
            );
            assert_eq!(state.active(), Some(PhotoId(1)));
            assert_eq!(state.activated_at_ms(), 1000.0);
        }
    }

    #[test]
    fn after_lock_same_photo_deselects() {
        let mut state = SelectionState::default();
        state.apply_trigger(Some(PhotoId(1)), 0.0, LOCK);
        assert_eq!(
            state.apply_trigger(Some(PhotoId(1)), 3000.0, LOCK),
            SelectionTransition::Deselected(PhotoId(1))
        );
        assert_eq!(state.active(), None);
    }

    #[test]
    fn after_lock_other_photo_switches() {
        let mut state = SelectionState::default();
        state.apply_trigger(Some(PhotoId(1)), 0.0, LOCK);
        assert_eq!(
            state.apply_trigger(Some(PhotoId(2)), 5000.0, LOCK),
            SelectionTransition::Activated(PhotoId(2))
        );
        assert_eq!(state.activated_at_ms(), 5000.0);
    }

    #[test]
    fn after_lock_empty_space_deselects() {
        let mut state = SelectionState::default();
        state.apply_trigger(Some(PhotoId(1)), 0.0, LOCK);
        assert_eq!(
            state.apply_trigger(None, 4000.0, LOCK),
            SelectionTransition::Deselected(PhotoId(1))
        );
    }

    #[test]
    fn resolver_consumes_each_count_once() {
        let mut resolver = SelectionResolver::default();
        assert!(!resolver.take_trigger(0));
        assert!(resolver.take_trigger(3));
        assert!(!resolver.take_trigger(3));
        assert!(resolver.take_trigger(4));
    }
}
