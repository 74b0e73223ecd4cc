//! Dispatch policy contract
//!
//! A concrete layout plugs a [`DispatchPolicy`] into the container to bias
//! the default ancestor -> self -> descendant consumption order. Every hook
//! answers with a [`DispatchHint`]: a three-variant signal where
//! `Indifferent` is the explicit "defer to default" answer, distinguishable
//! from `Yes`/`No` at the type level (never a nullable boolean).
//!
//! Hooks must not reenter the dispatch engine synchronously; doing so is a
//! caller-contract violation with undefined behavior, not something the
//! engine guards against.

use crate::gesture::{DispatchType, GestureSample};

/// Tri-state answer from a policy hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchHint {
    /// Take the biased path
    Yes,
    /// Take the opposite path
    No,
    /// Defer to the engine's default behavior
    #[default]
    Indifferent,
}

impl DispatchHint {
    /// `Some(bool)` for a decided hint, `None` for `Indifferent`
    pub fn decided(self) -> Option<bool> {
        match self {
            DispatchHint::Yes => Some(true),
            DispatchHint::No => Some(false),
            DispatchHint::Indifferent => None,
        }
    }

    pub fn is_indifferent(self) -> bool {
        matches!(self, DispatchHint::Indifferent)
    }
}

/// The four hook points a layout may implement.
///
/// The engine only invokes a hook when there is a non-zero active-axis delta
/// for it to rule on, so implementations never see spurious zero-delta calls.
pub trait DispatchPolicy {
    /// Seize gesture handling before any default logic runs.
    ///
    /// `Yes`/`No` short-circuit the sample with that handled/unhandled
    /// result; `Indifferent` falls through to default handling.
    fn handle_direct_dispatch(&mut self, _sample: &GestureSample) -> DispatchHint {
        DispatchHint::Indifferent
    }

    /// Whether self consumes during the pre-scroll phase.
    ///
    /// `Yes`: self consumes right after the ancestor's pre-scroll pass and
    /// the default self phase is skipped. `No`: self defers entirely until
    /// after the descendant's post-scroll offer. `Indifferent`: self stays
    /// out of pre-scroll (ancestor only).
    fn handle_pre_scroll_priority(&mut self, _delta: i32, _ty: DispatchType) -> DispatchHint {
        DispatchHint::Indifferent
    }

    /// Whether self takes a second consumption pass in the post-scroll
    /// phase, before (`Yes`) or after (`No`) the descendant. `Indifferent`:
    /// no second pass.
    fn handle_scroll_priority(&mut self, _delta: i32, _ty: DispatchType) -> DispatchHint {
        DispatchHint::Indifferent
    }

    /// Override self-consumption: `Yes` treats the full requested delta as
    /// consumed without running the clamped axis model (the layout applies
    /// the motion its own way), `No` rejects it outright (0 consumed),
    /// `Indifferent` runs the default clamped consumption.
    fn handle_self_consume(&mut self, _delta: i32, _ty: DispatchType) -> DispatchHint {
        DispatchHint::Indifferent
    }
}

/// The all-`Indifferent` policy: standard nested-scroll-chain behavior
/// (ancestor pre-scroll, clamped self, descendant, ancestor).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDispatchPolicy;

impl DispatchPolicy for DefaultDispatchPolicy {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Delta;
    use crate::gesture::GestureSample;

    #[test]
    fn hint_decided_mapping() {
        assert_eq!(DispatchHint::Yes.decided(), Some(true));
        assert_eq!(DispatchHint::No.decided(), Some(false));
        assert_eq!(DispatchHint::Indifferent.decided(), None);
        assert!(DispatchHint::Indifferent.is_indifferent());
        assert_eq!(DispatchHint::default(), DispatchHint::Indifferent);
    }

    #[test]
    fn default_policy_defers_everywhere() {
        let mut policy = DefaultDispatchPolicy;
        let sample = GestureSample::moved(Delta::new(0, 4));
        assert!(policy.handle_direct_dispatch(&sample).is_indifferent());
        assert!(policy
            .handle_pre_scroll_priority(4, DispatchType::DirectInput)
            .is_indifferent());
        assert!(policy
            .handle_scroll_priority(4, DispatchType::Simulated)
            .is_indifferent());
        assert!(policy
            .handle_self_consume(4, DispatchType::DirectInput)
            .is_indifferent());
    }
}
