//! Luge Scroll
//!
//! The scroll container at the center of the Luge engine. For every unit of
//! scroll motion - a drag sample, a fling tick, a programmatic animation -
//! it decides who consumes it: an ancestor above, the container itself, or a
//! descendant below, in a strict pre-scroll -> self -> post-scroll order that
//! a pluggable [`luge_core::DispatchPolicy`] may rebias.
//!
//! # Example
//!
//! ```rust
//! use luge_core::{Delta, DispatchType, ScrollAxis, ScrollRange};
//! use luge_scroll::ScrollContainer;
//!
//! let mut container = ScrollContainer::new();
//! container.on_layout_complete(ScrollAxis::Vertical, ScrollRange::new(0, 100));
//!
//! let outcome = container.dispatch(Delta::new(0, 30), DispatchType::DirectInput);
//! assert_eq!(outcome.consumed_by_self.y, 30);
//! assert_eq!(container.position(), 30);
//! ```

pub mod container;
pub mod dispatch;
pub mod driver;
pub mod gesture;

pub use container::ScrollContainer;
pub use dispatch::DispatchOutcome;
pub use driver::DriverKind;

pub mod prelude {
    pub use crate::container::ScrollContainer;
    pub use crate::dispatch::DispatchOutcome;
    pub use luge_animation::Easing;
    pub use luge_core::{
        Delta, DispatchHint, DispatchPolicy, DispatchType, GesturePhase, GestureSample,
        InteractionState, ScrollAxis, ScrollConfig, ScrollListener, ScrollParticipant,
        ScrollRange, Velocity,
    };
}
