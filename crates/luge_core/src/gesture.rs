//! Gesture samples and dispatch tagging
//!
//! The gesture source (touch interception, platform plumbing) is an external
//! collaborator; it hands the engine a flat stream of samples. Slop
//! thresholds and multi-touch bookkeeping happen upstream of these types.

use crate::axis::{Delta, Velocity};

/// Distinguishes user touch-driven deltas from fling/programmatic ones.
///
/// Consulted by policy hooks only; the clamping arithmetic never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchType {
    DirectInput,
    Simulated,
}

/// Where in the gesture stream a sample sits
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    /// Finger down inside the container's bounds
    Start,
    /// Finger moved; `GestureSample::delta` carries the motion
    Move,
    /// Finger lifted with the tracked release velocity
    End { velocity: Velocity },
}

/// One unit of gesture input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub delta: Delta,
    pub phase: GesturePhase,
}

impl GestureSample {
    pub fn start() -> Self {
        Self {
            delta: Delta::ZERO,
            phase: GesturePhase::Start,
        }
    }

    pub fn moved(delta: Delta) -> Self {
        Self {
            delta,
            phase: GesturePhase::Move,
        }
    }

    pub fn released(velocity: Velocity) -> Self {
        Self {
            delta: Delta::ZERO,
            phase: GesturePhase::End { velocity },
        }
    }
}
