//! One-shot reveal of marked elements as they enter the viewport.
//!
//! Every element collected at load starts `Pending`. The first intersection
//! notification reporting it as intersecting moves it to `Appeared` and asks
//! the host to add the appear class and stop watching it. `Appeared` is
//! terminal: later notifications for the element are ignored, and
//! non-intersecting notifications never change state.

use crate::action::Action;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Position of an element in the set collected at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Appeared,
}

/// One entry of an intersection notification batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionSample {
    pub id: RevealId,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    #[must_use]
    pub fn new(id: RevealId, is_intersecting: bool) -> Self {
        Self { id, is_intersecting }
    }
}

/// Per-element reveal state for the set collected at load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    /// Track `count` elements, all pending.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { states: vec![RevealState::Pending; count] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Ids of every tracked element, in collection order.
    pub fn ids(&self) -> impl Iterator<Item = RevealId> + '_ {
        (0..self.states.len()).map(RevealId)
    }

    /// State of `id`, or `None` if it was never collected.
    #[must_use]
    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.states.get(id.0).copied()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Pending).count()
    }

    /// True once every tracked element has appeared.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pending_count() == 0
    }

    /// Process one notification batch.
    ///
    /// Returns `Reveal` followed by `Unobserve` for each element that appears
    /// in this batch, in batch order.
    pub fn on_intersections(&mut self, samples: &[IntersectionSample]) -> Vec<Action> {
        let mut actions = Vec::new();
        for sample in samples {
            if !sample.is_intersecting {
                continue;
            }
            let Some(state) = self.states.get_mut(sample.id.0) else {
                log::warn!("intersection for unknown reveal element {}", sample.id.0);
                continue;
            };
            if *state == RevealState::Appeared {
                continue;
            }
            *state = RevealState::Appeared;
            actions.push(Action::Reveal(sample.id));
            actions.push(Action::Unobserve(sample.id));
        }
        if !actions.is_empty() {
            log::debug!("revealed {} element(s), {} pending", actions.len() / 2, self.pending_count());
        }
        actions
    }
}
