//! Driver scheduler
//!
//! Keyed storage for running fling/timeline instances. A container holds at
//! most one [`DriverId`] at a time; superseding a driver removes its
//! simulation here so a stale id can never tick again.

use slotmap::{new_key_type, SlotMap};

use crate::fling::FlingSimulation;
use crate::timeline::WaypointTimeline;

new_key_type! {
    pub struct DriverId;
}

/// A running driver instance
#[derive(Debug, Clone)]
pub enum DriverSim {
    Fling(FlingSimulation),
    Timeline(WaypointTimeline),
}

impl DriverSim {
    pub fn is_finished(&self) -> bool {
        match self {
            DriverSim::Fling(sim) => sim.is_finished(),
            DriverSim::Timeline(tl) => tl.is_finished(),
        }
    }
}

/// Storage for driver simulations, polled by the container each host tick
#[derive(Default)]
pub struct DriverScheduler {
    sims: SlotMap<DriverId, DriverSim>,
}

impl DriverScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_fling(&mut self, sim: FlingSimulation) -> DriverId {
        self.sims.insert(DriverSim::Fling(sim))
    }

    pub fn add_timeline(&mut self, timeline: WaypointTimeline) -> DriverId {
        self.sims.insert(DriverSim::Timeline(timeline))
    }

    pub fn get(&self, id: DriverId) -> Option<&DriverSim> {
        self.sims.get(id)
    }

    pub fn get_mut(&mut self, id: DriverId) -> Option<&mut DriverSim> {
        self.sims.get_mut(id)
    }

    pub fn remove(&mut self, id: DriverId) -> Option<DriverSim> {
        self.sims.remove(id)
    }

    pub fn contains(&self, id: DriverId) -> bool {
        self.sims.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sims.is_empty()
    }

    /// Whether any stored simulation still has motion left
    pub fn has_active(&self) -> bool {
        self.sims.iter().any(|(_, sim)| !sim.is_finished())
    }
}
