//! Luge Animation System
//!
//! Ballistic fling simulation, eased waypoint timelines, and a slotmap-keyed
//! scheduler for running driver instances.
//!
//! # Features
//!
//! - **Fling**: linear-deceleration ballistic trajectories emitting integer
//!   per-tick deltas (fractional positions accumulate internally)
//! - **Timelines**: ordered waypoint lists sampled over a duration with easing
//! - **Scheduler**: keyed storage so a container can hold a driver id and
//!   cancel or poll it across ticks

pub mod easing;
pub mod fling;
pub mod scheduler;
pub mod timeline;

pub use easing::Easing;
pub use fling::FlingSimulation;
pub use scheduler::{DriverId, DriverScheduler, DriverSim};
pub use timeline::WaypointTimeline;
