//! The slide-navigation state machine.
//!
//! `Navigator` owns the deck and the current index, and is the only place
//! the index is mutated. States are `{0 .. len-1}` (the singleton `0` for an
//! empty deck); transitions are `next`, `previous`, `go_to`, and
//! `sync_from_fragment`. Invalid input never signals an error: out-of-range
//! requests are ignored and malformed fragments resolve to slide 0.

use tracing::debug;

use crate::deck::{Deck, Slide};
use crate::fragment::{self, Fragment};

pub struct Navigator {
    deck: Deck,
    current: usize,
}

impl Navigator {
    /// Creates a navigator positioned at the first slide.
    pub fn new(deck: Deck) -> Self {
        Self { deck, current: 0 }
    }

    /// Creates a navigator with its initial position taken from a fragment.
    pub fn with_fragment(deck: Deck, raw: &str) -> Self {
        let mut navigator = Self::new(deck);
        navigator.sync_from_fragment(raw);
        navigator
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The slide at the current position; `None` only for an empty deck.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.current)
    }

    /// Moves to `index` if it is in range and differs from the current
    /// position. Out-of-range or unchanged requests are silent no-ops.
    /// Returns whether the position changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.deck.len() || index == self.current {
            return false;
        }
        debug!(from = self.current, to = index, "navigate");
        self.current = index;
        true
    }

    /// Advances one slide; a call at the last slide is a no-op.
    pub fn next(&mut self) -> bool {
        match self.current.checked_add(1) {
            Some(target) => self.go_to(target),
            None => false,
        }
    }

    /// Retreats one slide; a call at the first slide is a no-op.
    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(target) => self.go_to(target),
            None => false,
        }
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.current + 1 >= self.deck.len()
    }

    /// The fragment encoding the current position.
    pub fn fragment(&self) -> Fragment {
        Fragment::new(self.current, self.deck.len())
    }

    /// Re-enters the state machine from an externally supplied fragment.
    ///
    /// A 1-based number strictly within the deck navigates there; anything
    /// else resolves to slide 0. Returns whether the position changed.
    pub fn sync_from_fragment(&mut self, raw: &str) -> bool {
        let target = fragment::resolve(raw, self.deck.len());
        self.go_to(target)
    }
}
