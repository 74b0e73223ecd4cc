//! Scroll axis primitives and clamped delta arithmetic
//!
//! Positions and deltas are integer pixels; velocities are float pixels per
//! second. The central piece is [`apply_delta`], which applies a signed delta
//! to a position while clamping to the scroll range *on the side of zero the
//! position started on* - a single delta can land exactly on zero but never
//! jump across it when the range spans both signs (the overscroll /
//! rubber-band shape, `min < 0 < max`).

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// ============================================================================
// Axis
// ============================================================================

/// The axis a container scrolls along. Fixed after the first layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAxis {
    /// Not scrollable; deltas are forwarded through the chain untouched
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl ScrollAxis {
    /// Whether the container consumes motion itself on this axis
    pub fn is_scrollable(self) -> bool {
        !matches!(self, ScrollAxis::None)
    }
}

// ============================================================================
// Range
// ============================================================================

/// Legal scroll positions, recomputed every layout pass.
///
/// The only invariant is `min <= max`; the range is *not* required to
/// straddle zero. Construction normalizes swapped bounds instead of
/// panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollRange {
    pub min: i32,
    pub max: i32,
}

impl ScrollRange {
    pub const ZERO: ScrollRange = ScrollRange { min: 0, max: 0 };

    pub fn new(min: i32, max: i32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamp a position into the range
    pub fn clamp(&self, position: i32) -> i32 {
        position.clamp(self.min, self.max)
    }

    pub fn contains(&self, position: i32) -> bool {
        position >= self.min && position <= self.max
    }

    /// Total scrollable distance
    pub fn extent(&self) -> i32 {
        self.max - self.min
    }
}

// ============================================================================
// Delta
// ============================================================================

/// A two-axis signed scroll delta in integer pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delta {
    pub x: i32,
    pub y: i32,
}

impl Delta {
    pub const ZERO: Delta = Delta { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Component along the given axis (zero for [`ScrollAxis::None`])
    pub fn along(&self, axis: ScrollAxis) -> i32 {
        match axis {
            ScrollAxis::Horizontal => self.x,
            ScrollAxis::Vertical => self.y,
            ScrollAxis::None => 0,
        }
    }

    /// Component perpendicular to the given axis
    pub fn cross(&self, axis: ScrollAxis) -> i32 {
        match axis {
            ScrollAxis::Horizontal => self.y,
            ScrollAxis::Vertical => self.x,
            ScrollAxis::None => 0,
        }
    }

    /// Copy with the component along `axis` replaced by `value`
    pub fn with_along(self, axis: ScrollAxis, value: i32) -> Self {
        match axis {
            ScrollAxis::Horizontal => Self { x: value, ..self },
            ScrollAxis::Vertical => Self { y: value, ..self },
            ScrollAxis::None => self,
        }
    }
}

impl Add for Delta {
    type Output = Delta;
    fn add(self, rhs: Delta) -> Delta {
        Delta::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Delta {
    fn add_assign(&mut self, rhs: Delta) {
        *self = *self + rhs;
    }
}

impl Sub for Delta {
    type Output = Delta;
    fn sub(self, rhs: Delta) -> Delta {
        Delta::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Delta {
    fn sub_assign(&mut self, rhs: Delta) {
        *self = *self - rhs;
    }
}

impl Neg for Delta {
    type Output = Delta;
    fn neg(self) -> Delta {
        Delta::new(-self.x, -self.y)
    }
}

// ============================================================================
// Velocity
// ============================================================================

/// Release velocity vector in pixels per second
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along the given axis (zero for [`ScrollAxis::None`])
    pub fn along(&self, axis: ScrollAxis) -> f32 {
        match axis {
            ScrollAxis::Horizontal => self.x,
            ScrollAxis::Vertical => self.y,
            ScrollAxis::None => 0.0,
        }
    }

    /// Per-axis clamp of the velocity magnitude
    pub fn clamped(self, max: f32) -> Self {
        Self {
            x: self.x.clamp(-max, max),
            y: self.y.clamp(-max, max),
        }
    }
}

// ============================================================================
// Clamped delta application
// ============================================================================

/// Result of applying a delta to a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The position after clamping
    pub position: i32,
    /// How much of the delta actually took effect (`new - old`)
    pub consumed: i32,
}

/// Apply `delta` to `position`, clamping into `range` on the same side of
/// zero the position started on.
///
/// A position past zero on the positive side moves freely within
/// `[max(min, 0), max]`; past zero on the negative side within
/// `[min, min(max, 0)]`; exactly at zero the full range is available. The
/// consumed amount has the sign of `delta` or is zero, and a zero delta is
/// always a no-op.
pub fn apply_delta(position: i32, delta: i32, range: ScrollRange) -> Applied {
    if delta == 0 {
        return Applied {
            position,
            consumed: 0,
        };
    }

    let (lo, hi) = if position > 0 {
        (range.min.max(0), range.max)
    } else if position < 0 {
        (range.min, range.max.min(0))
    } else {
        (range.min, range.max)
    };
    // A position outside the range can produce inverted bounds; normalize
    // rather than panic in clamp().
    let (lo, hi) = (lo.min(hi), hi.max(lo));

    let target = position.saturating_add(delta);
    let new_position = target.clamp(lo, hi);

    Applied {
        position: new_position,
        consumed: new_position - position,
    }
}
