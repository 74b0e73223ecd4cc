//! Interaction state machine and listener registry
//!
//! A container is in exactly one of four interaction states at any instant.
//! State is owned by the container and mutated only through its setter, which
//! validates the transition against the table below and notifies listeners
//! strictly *after* the field update, so observers always see consistent
//! state.
//!
//! Transition table:
//! - Idle -> Dragging (drag threshold crossed along the active axis)
//! - Idle | Dragging -> Flinging (release at or above the fling floor)
//! - any -> Animating (programmatic scroll; prior driver cancelled first)
//! - any -> Idle (completion, interception, or external stop)

use smallvec::SmallVec;

/// The four interaction states. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No gesture or driver owns the position
    #[default]
    Idle,
    /// A direct-input gesture is feeding deltas
    Dragging,
    /// A programmatic waypoint animation owns the position
    Animating,
    /// A ballistic fling driver is feeding simulated deltas
    Flinging,
}

impl InteractionState {
    /// Whether a gesture or driver currently owns the position
    pub fn is_active(self) -> bool {
        !matches!(self, InteractionState::Idle)
    }

    /// Whether the machine may move from `self` to `next`.
    ///
    /// Same-state "transitions" are allowed but treated as no-ops by the
    /// setter (no notification fires).
    pub fn can_transition_to(self, next: InteractionState) -> bool {
        use InteractionState::*;
        match (self, next) {
            (from, to) if from == to => true,
            (_, Idle) => true,
            (_, Animating) => true,
            (Idle, Dragging) => true,
            (Idle | Dragging, Flinging) => true,
            _ => false,
        }
    }
}

// ============================================================================
// Listeners
// ============================================================================

/// Observer of container state and position changes.
///
/// Both callbacks fire synchronously after the field they report on has been
/// updated, and only when the value actually changed.
pub trait ScrollListener {
    fn on_state_changed(&mut self, _from: InteractionState, _to: InteractionState) {}
    fn on_position_changed(&mut self, _old: i32, _new: i32) {}
}

/// Listener registry with deterministic (registration-order) notification
#[derive(Default)]
pub struct ListenerSet {
    listeners: SmallVec<[Box<dyn ScrollListener>; 2]>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: impl ScrollListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify_state_changed(&mut self, from: InteractionState, to: InteractionState) {
        for listener in self.listeners.iter_mut() {
            listener.on_state_changed(from, to);
        }
    }

    pub fn notify_position_changed(&mut self, old: i32, new: i32) {
        for listener in self.listeners.iter_mut() {
            listener.on_position_changed(old, new);
        }
    }
}
