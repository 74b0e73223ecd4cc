//! Ballistic fling simulation
//!
//! Simulates a free-decelerating trajectory tick-by-tick. Each tick advances
//! a continuous position by the current velocity, then decays the velocity
//! linearly toward zero. Emitted deltas are integers; the fractional part of
//! the trajectory accumulates internally so no motion is lost to rounding.

use luge_core::{Delta, Velocity};

/// A two-axis decelerating trajectory
#[derive(Debug, Clone)]
pub struct FlingSimulation {
    velocity: Velocity,
    deceleration: f32,
    stop_velocity: f32,
    /// Continuous trajectory since the fling started
    travelled: (f32, f32),
    /// Integer deltas already handed out
    emitted: (i32, i32),
    finished: bool,
}

impl FlingSimulation {
    /// `deceleration` is in pixels/second²; the simulation settles once both
    /// axis velocities drop below `stop_velocity`. A velocity already below
    /// the stop threshold yields an immediately-finished simulation.
    pub fn new(velocity: Velocity, deceleration: f32, stop_velocity: f32) -> Self {
        let finished =
            velocity.x.abs() < stop_velocity.abs() && velocity.y.abs() < stop_velocity.abs();
        Self {
            velocity,
            deceleration: deceleration.abs(),
            stop_velocity: stop_velocity.abs(),
            travelled: (0.0, 0.0),
            emitted: (0, 0),
            finished,
        }
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Stop the trajectory immediately; subsequent ticks emit nothing
    pub fn halt(&mut self) {
        self.velocity = Velocity::ZERO;
        self.finished = true;
    }

    /// Advance the trajectory by `dt` seconds, returning the integer delta
    /// travelled since the last tick. Non-finite or non-positive `dt`
    /// degrades to a zero delta.
    pub fn tick(&mut self, dt: f32) -> Delta {
        if self.finished || !dt.is_finite() || dt <= 0.0 {
            return Delta::ZERO;
        }

        self.travelled.0 += self.velocity.x * dt;
        self.travelled.1 += self.velocity.y * dt;

        let decay = self.deceleration * dt;
        self.velocity.x = decay_toward_zero(self.velocity.x, decay);
        self.velocity.y = decay_toward_zero(self.velocity.y, decay);

        if self.velocity.x.abs() < self.stop_velocity {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < self.stop_velocity {
            self.velocity.y = 0.0;
        }
        self.finished = self.velocity.x == 0.0 && self.velocity.y == 0.0;

        let total_x = self.travelled.0.round() as i32;
        let total_y = self.travelled.1.round() as i32;
        let delta = Delta::new(total_x - self.emitted.0, total_y - self.emitted.1);
        self.emitted = (total_x, total_y);
        delta
    }
}

fn decay_toward_zero(velocity: f32, decay: f32) -> f32 {
    if velocity > 0.0 {
        (velocity - decay).max(0.0)
    } else if velocity < 0.0 {
        (velocity + decay).min(0.0)
    } else {
        0.0
    }
}
