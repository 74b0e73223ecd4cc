//! Gesture handling
//!
//! Translates raw pointer samples into container behavior: touch-down
//! catches any running driver, movement accumulates against the drag
//! threshold before entering Dragging, and release arbitrates between
//! settling and launching a fling. The policy's direct-dispatch hook is
//! consulted first on every sample and may seize or drop the whole stream.

use luge_core::{Delta, DispatchType, GesturePhase, GestureSample, InteractionState, Velocity};

use crate::container::ScrollContainer;

impl ScrollContainer {
    /// Feed one gesture sample through the container. Returns `true` when
    /// the sample was taken (by the policy or the engine), `false` when it
    /// was dropped or absorbed without effect.
    pub fn handle_gesture(&mut self, sample: GestureSample) -> bool {
        match self.policy.handle_direct_dispatch(&sample).decided() {
            Some(true) => {
                // The policy routes this stream itself; the engine stands
                // aside but reports the sample as taken.
                tracing::trace!(?sample, "gesture sample seized by policy");
                true
            }
            Some(false) => {
                tracing::trace!(?sample, "gesture sample dropped by policy");
                false
            }
            None => match sample.phase {
                GesturePhase::Start => {
                    self.begin_gesture();
                    true
                }
                GesturePhase::Move => self.move_gesture(sample.delta),
                GesturePhase::End { velocity } => {
                    self.end_gesture(velocity);
                    true
                }
            },
        }
    }

    /// Touch-down. Catches (cancels) any running driver and arms the drag
    /// accumulator; the container sits in Idle until the slop is crossed.
    pub(crate) fn begin_gesture(&mut self) {
        if self.cancel_driver() {
            self.transition(InteractionState::Idle);
        }
        self.gesture_active = true;
        self.drag_accum = Delta::ZERO;
        self.bind_link();
        tracing::trace!(position = self.position, "gesture started");
    }

    /// Pointer movement. Below the drag threshold samples accumulate
    /// silently; once motion along the active axis exceeds both the
    /// threshold and the cross-axis travel, the container enters Dragging
    /// and the accumulated delta is dispatched in one piece.
    pub(crate) fn move_gesture(&mut self, delta: Delta) -> bool {
        if !self.gesture_active {
            tracing::warn!("move sample without an active gesture, ignoring");
            return false;
        }
        if !self.axis.is_scrollable() {
            // Nothing to drag here; the chain still sees the motion.
            self.dispatch(delta, DispatchType::DirectInput);
            return true;
        }
        if self.state == InteractionState::Dragging {
            self.dispatch(delta, DispatchType::DirectInput);
            return true;
        }

        self.drag_accum += delta;
        let along = self.drag_accum.along(self.axis).abs();
        let cross = self.drag_accum.cross(self.axis).abs();
        if along > self.config.drag_threshold && along > cross {
            self.transition(InteractionState::Dragging);
            let pending = self.drag_accum;
            self.drag_accum = Delta::ZERO;
            self.dispatch(pending, DispatchType::DirectInput);
            true
        } else {
            false
        }
    }

    /// Release. Arbitrates the fling: below the velocity floor the
    /// container settles, a linked ancestor may intercept via `pre_fling`,
    /// otherwise a ballistic driver launches and the ancestor is notified
    /// of the outcome.
    pub(crate) fn end_gesture(&mut self, velocity: Velocity) {
        self.gesture_active = false;
        self.drag_accum = Delta::ZERO;

        if !self.axis.is_scrollable() {
            self.link.fling(velocity, false);
            self.link.clear();
            return;
        }

        let release_speed = velocity.along(self.axis).abs();
        if release_speed < self.config.fling_velocity_floor {
            tracing::trace!(release_speed, "release below fling floor, settling");
            self.transition(InteractionState::Idle);
            self.link.clear();
            return;
        }

        if self.link.pre_fling(velocity) {
            tracing::debug!(?velocity, "fling intercepted by ancestor");
            self.transition(InteractionState::Idle);
            self.link.clear();
            return;
        }

        let flinging = self.start_fling(velocity);
        let handled_upstream = self.link.fling(velocity, flinging);
        if !flinging {
            self.link.clear();
        }
        tracing::trace!(?velocity, flinging, handled_upstream, "gesture released");
    }
}
