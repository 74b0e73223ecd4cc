//! The scroll container
//!
//! Owns the `(position, range, state)` triple exclusively. Collaborators -
//! the dispatch policy, the ancestor and descendant participants - only
//! observe or are offered deltas; the engine applies self-consumption on the
//! container's behalf through the clamped axis model. Everything runs on the
//! single logical thread that delivers gesture samples and redraw ticks.

use luge_animation::DriverScheduler;
use luge_core::{
    DefaultDispatchPolicy, Delta, DispatchPolicy, InteractionState, ListenerSet,
    NestedScrollLink, ParticipantHandle, ScrollAxis, ScrollConfig, ScrollError, ScrollListener,
    ScrollRange,
};

use crate::driver::ActiveDriver;

/// A scrollable container coordinating motion across a nested chain
pub struct ScrollContainer {
    pub(crate) axis: ScrollAxis,
    pub(crate) position: i32,
    pub(crate) range: ScrollRange,
    pub(crate) state: InteractionState,
    pub(crate) config: ScrollConfig,
    pub(crate) policy: Box<dyn DispatchPolicy>,
    pub(crate) listeners: ListenerSet,
    /// Participants configured by the host view tree
    pub(crate) ancestor: Option<ParticipantHandle>,
    pub(crate) descendant: Option<ParticipantHandle>,
    /// Transient per-gesture/fling association
    pub(crate) link: NestedScrollLink,
    pub(crate) scheduler: DriverScheduler,
    pub(crate) driver: Option<ActiveDriver>,
    /// Accumulated motion before the drag threshold is crossed
    pub(crate) drag_accum: Delta,
    pub(crate) gesture_active: bool,
}

impl ScrollContainer {
    pub fn new() -> Self {
        Self::with_config(ScrollConfig::default())
    }

    pub fn with_config(config: ScrollConfig) -> Self {
        Self {
            axis: ScrollAxis::None,
            position: 0,
            range: ScrollRange::ZERO,
            state: InteractionState::Idle,
            config,
            policy: Box::new(DefaultDispatchPolicy),
            listeners: ListenerSet::new(),
            ancestor: None,
            descendant: None,
            link: NestedScrollLink::new(),
            scheduler: DriverScheduler::new(),
            driver: None,
            drag_accum: Delta::ZERO,
            gesture_active: false,
        }
    }

    /// Replace the dispatch policy (builder pattern)
    pub fn with_policy(mut self, policy: impl DispatchPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn set_policy(&mut self, policy: impl DispatchPolicy + 'static) {
        self.policy = Box::new(policy);
    }

    pub fn register_listener(&mut self, listener: impl ScrollListener + 'static) {
        self.listeners.register(listener);
    }

    pub fn set_ancestor(&mut self, handle: ParticipantHandle) {
        self.ancestor = Some(handle);
    }

    pub fn detach_ancestor(&mut self) {
        self.ancestor = None;
    }

    pub fn set_descendant(&mut self, handle: ParticipantHandle) {
        self.descendant = Some(handle);
    }

    pub fn detach_descendant(&mut self) {
        self.descendant = None;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn range(&self) -> ScrollRange {
        self.range
    }

    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Whether the transient nested-scroll link is currently bound
    pub fn link_bound(&self) -> bool {
        self.link.is_bound()
    }

    // =========================================================================
    // Layout provider interface
    // =========================================================================

    /// Called once per layout pass with the legal scroll range. The first
    /// call fixes the container's axis for its lifetime; later calls may
    /// only update the range. The position is re-clamped immediately.
    pub fn on_layout_complete(&mut self, axis: ScrollAxis, range: ScrollRange) {
        if self.axis == ScrollAxis::None {
            self.axis = axis;
        } else if axis != self.axis {
            tracing::warn!(
                current = ?self.axis,
                requested = ?axis,
                "scroll axis is fixed after the first layout pass"
            );
        }
        self.range = range;
        self.set_position(self.position);
    }

    /// Jump to a position immediately (clamped). Cancels any active driver
    /// so there is never more than one position writer.
    pub fn scroll_to(&mut self, position: i32) {
        if self.cancel_driver() {
            self.transition(InteractionState::Idle);
        }
        self.set_position(position);
    }

    /// External stop request: synchronously halt any driver (its completion
    /// never fires), drop the gesture, and settle to Idle.
    pub fn stop(&mut self) {
        self.cancel_driver();
        self.gesture_active = false;
        self.drag_accum = Delta::ZERO;
        self.link.clear();
        self.transition(InteractionState::Idle);
    }

    // =========================================================================
    // State and position mutation
    // =========================================================================

    /// Validated state setter. Notifies listeners strictly after the field
    /// update; a same-state set is a silent no-op.
    pub(crate) fn set_state(&mut self, to: InteractionState) -> Result<(), ScrollError> {
        if self.state == to {
            return Ok(());
        }
        if !self.state.can_transition_to(to) {
            return Err(ScrollError::IllegalTransition {
                from: self.state,
                to,
            });
        }
        let from = self.state;
        self.state = to;
        tracing::debug!(?from, ?to, "interaction state changed");
        self.listeners.notify_state_changed(from, to);
        Ok(())
    }

    /// Infallible wrapper for transitions that are legal by construction;
    /// an illegal one indicates an engine bug and is reported, not applied.
    pub(crate) fn transition(&mut self, to: InteractionState) {
        if let Err(err) = self.set_state(to) {
            tracing::error!(error = %err, "rejected interaction state transition");
        }
    }

    /// Clamp into range, store, and notify listeners if the value moved
    pub(crate) fn set_position(&mut self, position: i32) {
        let clamped = self.range.clamp(position);
        if clamped == self.position {
            return;
        }
        let old = self.position;
        self.position = clamped;
        self.listeners.notify_position_changed(old, clamped);
    }

    /// Snapshot the configured participants into the transient link
    pub(crate) fn bind_link(&mut self) {
        self.link
            .bind(self.ancestor.clone(), self.descendant.clone());
    }
}

impl Default for ScrollContainer {
    fn default() -> Self {
        Self::new()
    }
}
