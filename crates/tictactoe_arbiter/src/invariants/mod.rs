//! First-class invariants for game records.
//!
//! Invariants are logical properties that must hold for every record the
//! engine hands out. State invariants look at one record; transition
//! invariants compare the record before and after a move. The engine checks
//! both as postconditions in debug builds, and storage collaborators can
//! run them over rehydrated records.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A logical property relating a state to its successor.
pub trait TransitionInvariant<S> {
    /// Checks if the invariant holds across `before -> after`.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Joins violation descriptions into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A set of state invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// A set of transition invariants that can be checked together.
pub trait TransitionInvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() { Ok(()) } else { Err(violations) }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        collect(violations)
    }
}

impl<S, T1, T2> TransitionInvariantSet<S> for (T1, T2)
where
    T1: TransitionInvariant<S>,
    T2: TransitionInvariant<S>,
{
    fn check_all(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !T1::holds(before, after) {
            violations.push(InvariantViolation::new(T1::description()));
        }

        if !T2::holds(before, after) {
            violations.push(InvariantViolation::new(T2::description()));
        }

        collect(violations)
    }
}

pub mod monotonic_board;
pub mod sign_balance;
pub mod status_consistent;
pub mod turn_count;
pub mod turn_step;

pub use monotonic_board::MonotonicBoardInvariant;
pub use sign_balance::SignBalanceInvariant;
pub use status_consistent::StatusConsistentInvariant;
pub use turn_count::TurnCountInvariant;
pub use turn_step::TurnStepInvariant;

/// All single-record invariants as a composable set.
pub type RecordInvariants = (TurnCountInvariant, SignBalanceInvariant, StatusConsistentInvariant);

/// All move-transition invariants as a composable set.
pub type TransitionInvariants = (MonotonicBoardInvariant, TurnStepInvariant);
