//! Scroll propagation channel
//!
//! The platform exposes "an ancestor wants to pre-consume/consume my delta"
//! and "a descendant can take leftovers" through [`ScrollParticipant`]
//! handles. Participants apply their own consumed share autonomously; the
//! engine only records what they report. All defaults are zero-consumption,
//! so an absent or passive participant never blocks motion.

use std::sync::{Arc, Mutex};

use crate::axis::{Delta, Velocity};
use crate::gesture::DispatchType;

/// An external scroll participant (ancestor above or descendant below the
/// container in the propagation chain).
pub trait ScrollParticipant {
    /// Offered the full delta before self consumes; returns the portion the
    /// participant took.
    fn pre_scroll(&mut self, _delta: Delta, _ty: DispatchType) -> Delta {
        Delta::ZERO
    }

    /// Offered what remains after self's consumption attempt, together with
    /// what self consumed for context; returns the portion taken.
    fn scroll(&mut self, _consumed_by_self: Delta, _unconsumed: Delta, _ty: DispatchType) -> Delta {
        Delta::ZERO
    }

    /// Offered the release velocity before a fling starts; `true` intercepts
    /// the fling entirely.
    fn pre_fling(&mut self, _velocity: Velocity) -> bool {
        false
    }

    /// Notified of a fling the container did (`consumed = true`) or could
    /// not (`consumed = false`) take; `true` means the participant handled
    /// it.
    fn fling(&mut self, _velocity: Velocity, _consumed: bool) -> bool {
        false
    }
}

/// Shared handle to a participant. The container holds these only as lookup
/// references; lifetime belongs to the view tree.
pub type ParticipantHandle = Arc<Mutex<dyn ScrollParticipant>>;

/// Transient association between the container and the participants eligible
/// for the current gesture or fling. Bound when a gesture begins inside the
/// container's bounds, cleared when the gesture/fling ends.
#[derive(Clone, Default)]
pub struct NestedScrollLink {
    ancestor: Option<ParticipantHandle>,
    descendant: Option<ParticipantHandle>,
}

impl NestedScrollLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(
        &mut self,
        ancestor: Option<ParticipantHandle>,
        descendant: Option<ParticipantHandle>,
    ) {
        self.ancestor = ancestor;
        self.descendant = descendant;
    }

    pub fn clear(&mut self) {
        self.ancestor = None;
        self.descendant = None;
    }

    pub fn is_bound(&self) -> bool {
        self.ancestor.is_some() || self.descendant.is_some()
    }

    /// Ancestor pre-scroll offer; zero if no ancestor is linked
    pub fn pre_scroll(&mut self, delta: Delta, ty: DispatchType) -> Delta {
        match &self.ancestor {
            Some(handle) => handle.lock().unwrap().pre_scroll(delta, ty),
            None => Delta::ZERO,
        }
    }

    /// Descendant post-scroll offer; zero if no descendant is linked
    pub fn scroll_descendant(
        &mut self,
        consumed_by_self: Delta,
        unconsumed: Delta,
        ty: DispatchType,
    ) -> Delta {
        match &self.descendant {
            Some(handle) => handle.lock().unwrap().scroll(consumed_by_self, unconsumed, ty),
            None => Delta::ZERO,
        }
    }

    /// Ancestor post-scroll offer; zero if no ancestor is linked
    pub fn scroll_ancestor(
        &mut self,
        consumed_by_self: Delta,
        unconsumed: Delta,
        ty: DispatchType,
    ) -> Delta {
        match &self.ancestor {
            Some(handle) => handle.lock().unwrap().scroll(consumed_by_self, unconsumed, ty),
            None => Delta::ZERO,
        }
    }

    /// `true` if a linked ancestor intercepts the fling
    pub fn pre_fling(&mut self, velocity: Velocity) -> bool {
        match &self.ancestor {
            Some(handle) => handle.lock().unwrap().pre_fling(velocity),
            None => false,
        }
    }

    /// `true` if a linked ancestor handled the fling
    pub fn fling(&mut self, velocity: Velocity, consumed: bool) -> bool {
        match &self.ancestor {
            Some(handle) => handle.lock().unwrap().fling(velocity, consumed),
            None => false,
        }
    }
}
