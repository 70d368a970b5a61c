//! Board properties that must survive every accepted move.
//!
//! Each property is a zero-sized type implementing [`Invariant`]; tuples of
//! them form an [`InvariantSet`]. The turn controller asserts
//! [`BoardInvariants`] in debug builds.

/// A property of `S` that is either true or violated.
pub trait Invariant<S> {
    /// True when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// What the property promises, used in violation reports.
    fn description() -> &'static str;

    /// The violation, if `state` breaks the property.
    fn check(state: &S) -> Option<InvariantViolation> {
        (!Self::holds(state)).then(|| InvariantViolation::new(Self::description()))
    }
}

/// A broken property.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// What the broken property promised.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a property description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked in one pass.
pub trait InvariantSet<S> {
    /// Every violation found, in tuple order.
    ///
    /// # Errors
    ///
    /// Returns the violations when at least one member fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member),+> InvariantSet<S> for ($($member,)+)
        where
            $($member: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> =
                    [$($member::check(state)),+].into_iter().flatten().collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);
impl_invariant_set!(A, B, C, D);

pub mod history_complete;
pub mod monotonic_grid;
pub mod state_consistent;

pub use history_complete::HistoryCompleteInvariant;
pub use monotonic_grid::MonotonicGridInvariant;
pub use state_consistent::StateConsistentInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (
    MonotonicGridInvariant,
    HistoryCompleteInvariant,
    StateConsistentInvariant,
);
