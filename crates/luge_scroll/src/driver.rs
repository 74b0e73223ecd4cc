//! Driver lifecycle
//!
//! At most one driver owns the container's position at a time: either a
//! ballistic fling feeding integer deltas through the dispatch engine, or a
//! waypoint animation writing absolute positions directly. Starting a new
//! driver, a drag, or a programmatic jump cancels the incumbent; a cancelled
//! driver's completion callback is dropped unfired. Completion fires exactly
//! once, after the container has settled to Idle and the nested link is
//! released.

use luge_animation::{DriverId, DriverSim, Easing, FlingSimulation, WaypointTimeline};
use luge_core::{DispatchType, InteractionState, ScrollError, Velocity};

use crate::container::ScrollContainer;

/// Which kind of simulation the active driver runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    Fling,
    Animation,
}

/// The container's record of its single running driver
pub(crate) struct ActiveDriver {
    pub(crate) id: DriverId,
    pub(crate) kind: DriverKind,
    pub(crate) on_complete: Option<Box<dyn FnOnce()>>,
}

impl ScrollContainer {
    /// Kind of the currently running driver, if any
    pub fn active_driver(&self) -> Option<DriverKind> {
        self.driver.as_ref().map(|active| active.kind)
    }

    // =========================================================================
    // Fling
    // =========================================================================

    /// Launch a ballistic fling from `velocity`. Returns `false` when the
    /// container cannot fling (no scrollable axis, or the clamped velocity
    /// is already below the stop threshold); the container is left Idle in
    /// that case.
    pub fn start_fling(&mut self, velocity: Velocity) -> bool {
        self.start_fling_inner(velocity, None)
    }

    /// [`start_fling`](Self::start_fling) with a completion callback. The
    /// callback fires only if the fling runs to rest on its own.
    pub fn start_fling_with(
        &mut self,
        velocity: Velocity,
        on_complete: impl FnOnce() + 'static,
    ) -> bool {
        self.start_fling_inner(velocity, Some(Box::new(on_complete)))
    }

    fn start_fling_inner(
        &mut self,
        velocity: Velocity,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> bool {
        if !self.axis.is_scrollable() {
            return false;
        }
        if self.cancel_driver() {
            // The incumbent's state is vacated before the fling enters.
            self.transition(InteractionState::Idle);
        }

        let velocity = velocity.clamped(self.config.max_fling_velocity);
        let sim = FlingSimulation::new(velocity, self.config.deceleration, self.config.stop_velocity);
        if sim.is_finished() {
            tracing::debug!(?velocity, "release velocity below stop threshold, not flinging");
            self.transition(InteractionState::Idle);
            return false;
        }

        if !self.link.is_bound() {
            self.bind_link();
        }
        let id = self.scheduler.add_fling(sim);
        if let Err(err) = self.install_driver(id, DriverKind::Fling, on_complete) {
            tracing::error!(error = %err, "failed to install fling driver");
            self.scheduler.remove(id);
            return false;
        }
        self.transition(InteractionState::Flinging);
        tracing::debug!(?velocity, position = self.position, "fling started");
        true
    }

    // =========================================================================
    // Programmatic animation
    // =========================================================================

    /// Animate to `target` over the configured duration with the default
    /// ease-in-out curve.
    pub fn smooth_scroll_to(&mut self, target: i32) -> bool {
        let target = self.range.clamp(target);
        self.animate_to_waypoints(&[target], self.config.animation_duration, Easing::EaseInOutCubic)
    }

    /// Animate through `waypoints` in order over `duration` seconds.
    /// Malformed input (empty list, non-finite or non-positive duration) is
    /// a no-op returning `false`; a driver already running keeps running.
    pub fn animate_to_waypoints(
        &mut self,
        waypoints: &[i32],
        duration: f32,
        easing: Easing,
    ) -> bool {
        self.animate_inner(waypoints, duration, easing, None)
    }

    /// [`animate_to_waypoints`](Self::animate_to_waypoints) with a
    /// completion callback, fired only on natural finish.
    pub fn animate_to_waypoints_with(
        &mut self,
        waypoints: &[i32],
        duration: f32,
        easing: Easing,
        on_complete: impl FnOnce() + 'static,
    ) -> bool {
        self.animate_inner(waypoints, duration, easing, Some(Box::new(on_complete)))
    }

    fn animate_inner(
        &mut self,
        waypoints: &[i32],
        duration: f32,
        easing: Easing,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> bool {
        if !self.axis.is_scrollable() {
            return false;
        }
        // Validate before touching the incumbent so bad input cannot kill a
        // running driver.
        let Some(timeline) = WaypointTimeline::new(self.position, waypoints, duration, easing)
        else {
            return false;
        };

        self.cancel_driver();
        let id = self.scheduler.add_timeline(timeline);
        if let Err(err) = self.install_driver(id, DriverKind::Animation, on_complete) {
            tracing::error!(error = %err, "failed to install animation driver");
            self.scheduler.remove(id);
            return false;
        }
        self.transition(InteractionState::Animating);
        tracing::debug!(?waypoints, duration, "waypoint animation started");
        true
    }

    // =========================================================================
    // Ticking
    // =========================================================================

    /// Advance the active driver by `dt` seconds. Returns `true` while the
    /// driver still has motion left, so hosts can keep requesting frames.
    pub fn tick(&mut self, dt: f32) -> bool {
        let (id, kind) = match &self.driver {
            Some(active) => (active.id, active.kind),
            None => return false,
        };

        match kind {
            DriverKind::Fling => {
                let (delta, finished) = match self.scheduler.get_mut(id) {
                    Some(DriverSim::Fling(sim)) => {
                        let delta = sim.tick(dt);
                        (delta, sim.is_finished())
                    }
                    _ => {
                        self.abandon_lost_driver(id);
                        return false;
                    }
                };
                if !delta.is_zero() {
                    self.dispatch(delta, DispatchType::Simulated);
                }
                if finished {
                    self.finish_driver();
                }
                !finished
            }
            DriverKind::Animation => {
                let (sampled, finished) = match self.scheduler.get_mut(id) {
                    Some(DriverSim::Timeline(timeline)) => {
                        let sampled = timeline.tick(dt);
                        (sampled, timeline.is_finished())
                    }
                    _ => {
                        self.abandon_lost_driver(id);
                        return false;
                    }
                };
                // Timelines carry absolute positions; they never route
                // through delta dispatch.
                self.set_position(sampled);
                if finished {
                    self.finish_driver();
                }
                !finished
            }
        }
    }

    // =========================================================================
    // Lifecycle internals
    // =========================================================================

    /// Record the driver. Exclusivity is an invariant, not a request queue:
    /// callers cancel the incumbent first.
    pub(crate) fn install_driver(
        &mut self,
        id: DriverId,
        kind: DriverKind,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> Result<(), ScrollError> {
        if self.driver.is_some() {
            return Err(ScrollError::DriverActive { state: self.state });
        }
        self.driver = Some(ActiveDriver {
            id,
            kind,
            on_complete,
        });
        Ok(())
    }

    /// Tear down the active driver without completing it. The completion
    /// callback is dropped unfired. Returns whether a driver was running.
    /// Interaction state is left for the caller to settle.
    pub(crate) fn cancel_driver(&mut self) -> bool {
        match self.driver.take() {
            Some(active) => {
                self.scheduler.remove(active.id);
                tracing::debug!(kind = ?active.kind, "driver cancelled");
                true
            }
            None => false,
        }
    }

    /// Natural end of the active driver: settle to Idle, release the nested
    /// link, then fire the completion callback exactly once.
    fn finish_driver(&mut self) {
        let Some(active) = self.driver.take() else {
            return;
        };
        self.scheduler.remove(active.id);
        self.transition(InteractionState::Idle);
        self.link.clear();
        if let Some(on_complete) = active.on_complete {
            on_complete();
        }
        tracing::debug!(kind = ?active.kind, position = self.position, "driver finished");
    }

    /// The driver record points at a simulation the scheduler no longer
    /// holds. This is an engine bug; recover by settling.
    fn abandon_lost_driver(&mut self, id: DriverId) {
        tracing::error!(?id, "active driver has no simulation, abandoning");
        self.driver = None;
        self.link.clear();
        self.transition(InteractionState::Idle);
    }
}
