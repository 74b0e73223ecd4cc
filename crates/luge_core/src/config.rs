//! Scroll behavior configuration

/// Tunable scroll behavior, overridable per container instance
#[derive(Debug, Clone, Copy)]
pub struct ScrollConfig {
    /// Distance in pixels a gesture must travel along the active axis
    /// before the container enters Dragging
    pub drag_threshold: i32,
    /// Minimum release velocity (pixels/second) for a fling to start
    pub fling_velocity_floor: f32,
    /// Release velocity is clamped per axis to this magnitude
    pub max_fling_velocity: f32,
    /// Ballistic deceleration rate in pixels/second²
    pub deceleration: f32,
    /// A fling settles once simulated velocity drops below this (pixels/second)
    pub stop_velocity: f32,
    /// Default duration in seconds for programmatic waypoint animations
    pub animation_duration: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            // Touch slop matching common platform conventions (~8dp)
            drag_threshold: 8,
            fling_velocity_floor: 50.0,
            max_fling_velocity: 8_000.0,
            deceleration: 1_500.0,
            stop_velocity: 10.0,
            animation_duration: 0.3,
        }
    }
}

impl ScrollConfig {
    /// Config where releases never fling; gestures always settle on lift
    pub fn no_fling() -> Self {
        Self {
            fling_velocity_floor: f32::INFINITY,
            ..Default::default()
        }
    }

    /// Config with a heavier deceleration for short, snappy flings
    pub fn snappy() -> Self {
        Self {
            deceleration: 4_000.0,
            animation_duration: 0.15,
            ..Default::default()
        }
    }
}
