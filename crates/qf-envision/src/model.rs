//! QualitativeModel trait for pluggable qualitative systems.

use std::fmt;
use std::hash::Hash;

use qf_graph::TransitionKind;

/// A proposed successor of a state, before admissibility and dedup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<S> {
    pub state: S,
    pub justification: String,
    pub kind: TransitionKind,
}

impl<S> Candidate<S> {
    pub fn new(state: S, justification: impl Into<String>, kind: TransitionKind) -> Self {
        Self {
            state,
            justification: justification.into(),
            kind,
        }
    }
}

/// Trait for qualitative models the envisionment driver can explore.
///
/// A QualitativeModel must provide:
/// - State type (a value: cloned, compared and hashed for dedup)
/// - Candidate generation from a state (pure, in a fixed order)
/// - Admissibility of a state (pure predicate)
pub trait QualitativeModel {
    /// State type. Equality is the dedup key, so it must compare values.
    type State: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// Candidate successors of `state`, in rule order.
    ///
    /// Must not fail; a state no rule applies to yields an empty list.
    fn candidates(&self, state: &Self::State) -> Vec<Candidate<Self::State>>;

    /// Whether `state` satisfies every constraint of the model.
    fn is_admissible(&self, state: &Self::State) -> bool;
}
