//! Luge Core
//!
//! Foundational primitives for the Luge nested-scroll coordination engine:
//!
//! - **Clamped axis arithmetic**: side-of-zero aware delta application
//! - **Interaction states**: the Idle/Dragging/Animating/Flinging machine
//! - **Dispatch policy**: the tri-state priority hook contract
//! - **Propagation channel**: ancestor/descendant participant traits
//!
//! Everything here is pure data and contracts; the dispatch engine that
//! drives these types lives in `luge_scroll`.

pub mod axis;
pub mod channel;
pub mod config;
pub mod error;
pub mod gesture;
pub mod policy;
pub mod state;

pub use axis::{apply_delta, Applied, Delta, ScrollAxis, ScrollRange, Velocity};
pub use channel::{NestedScrollLink, ParticipantHandle, ScrollParticipant};
pub use config::ScrollConfig;
pub use error::ScrollError;
pub use gesture::{DispatchType, GesturePhase, GestureSample};
pub use policy::{DefaultDispatchPolicy, DispatchHint, DispatchPolicy};
pub use state::{InteractionState, ListenerSet, ScrollListener};
