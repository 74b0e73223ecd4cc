//! Error surface
//!
//! No error kind crosses the dispatch boundary; dispatch always reports a
//! consumption breakdown and malformed input degrades to a no-op. The
//! variants here flag programming errors in driver/state ownership, which
//! are reported rather than silently tolerated.

use thiserror::Error;

use crate::state::InteractionState;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScrollError {
    /// A state change not present in the transition table was requested
    #[error("illegal interaction state transition: {from:?} -> {to:?}")]
    IllegalTransition {
        from: InteractionState,
        to: InteractionState,
    },

    /// A new driver was installed while another still owned the position
    #[error("a scroll driver is already active in state {state:?}")]
    DriverActive { state: InteractionState },
}
