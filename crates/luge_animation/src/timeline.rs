//! Waypoint timelines for programmatic scrolls
//!
//! A timeline interpolates the scroll position from its starting value
//! through an ordered list of waypoints over a fixed duration. Timeline
//! positions are absolute: the container applies them directly instead of
//! routing them through delta dispatch.

use luge_core::ScrollRange;

use crate::easing::Easing;

/// An eased sweep through ordered waypoint positions
#[derive(Debug, Clone)]
pub struct WaypointTimeline {
    /// Waypoint chain including the starting position at index 0
    points: Vec<i32>,
    /// Total duration in seconds, guaranteed finite and positive
    duration: f32,
    easing: Easing,
    elapsed: f32,
    finished: bool,
}

impl WaypointTimeline {
    /// Returns `None` for malformed input (empty waypoint list, non-finite
    /// or non-positive duration) so callers can degrade to a no-op instead
    /// of starting a broken animation.
    pub fn new(start: i32, waypoints: &[i32], duration: f32, easing: Easing) -> Option<Self> {
        if waypoints.is_empty() || !duration.is_finite() || duration <= 0.0 {
            tracing::warn!(
                waypoints = waypoints.len(),
                duration,
                "rejecting malformed waypoint timeline"
            );
            return None;
        }
        let mut points = Vec::with_capacity(waypoints.len() + 1);
        points.push(start);
        points.extend_from_slice(waypoints);
        Some(Self {
            points,
            duration,
            easing,
            elapsed: 0.0,
            finished: false,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Final waypoint, clamped to `range`
    pub fn target(&self, range: ScrollRange) -> i32 {
        range.clamp(*self.points.last().expect("timeline has at least two points"))
    }

    /// Advance by `dt` seconds and return the sampled absolute position.
    /// Non-finite or negative `dt` leaves the clock untouched.
    pub fn tick(&mut self, dt: f32) -> i32 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        let progress = (self.elapsed / self.duration).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.finished = true;
        }
        self.sample(progress)
    }

    /// Sample the eased waypoint chain at raw progress `t`
    fn sample(&self, t: f32) -> i32 {
        let segments = self.points.len() - 1;
        let scaled = self.easing.apply(t) * segments as f32;
        let index = (scaled.floor() as usize).min(segments - 1);
        let frac = (scaled - index as f32).clamp(0.0, 1.0);
        let a = self.points[index] as f32;
        let b = self.points[index + 1] as f32;
        (a + (b - a) * frac).round() as i32
    }
}
