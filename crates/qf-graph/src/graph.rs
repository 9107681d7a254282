//! Core graph data structures.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use qf_core::{EdgeId, StateId};

/// Category of a transition between two qualitative states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Abrupt qualitative change of a derivative upwards.
    Increase,
    /// Abrupt qualitative change of a derivative downwards.
    Decrease,
    /// Continuous (integration) step: a magnitude crosses a landmark.
    Time,
}

impl TransitionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionKind::Increase => "increase",
            TransitionKind::Decrease => "decrease",
            TransitionKind::Time => "time",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A retained state in the envisionment.
///
/// The state value itself is never mutated once retained; only its
/// successor list grows while the search is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNode<S> {
    pub id: StateId,
    pub state: S,
    /// Justification of the transition that discovered this state.
    pub description: String,
    /// Distinct successor ids in discovery order.
    pub successors: Vec<StateId>,
}

impl<S> StateNode<S> {
    /// True when no transition leaves this state (an equilibrium of the model).
    pub fn is_terminal(&self) -> bool {
        self.successors.is_empty()
    }
}

/// A directed, justified transition between two retained states.
///
/// Several transitions may join the same pair of states, each with its own
/// justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub id: EdgeId,
    pub from: StateId,
    pub to: StateId,
    pub justification: String,
    pub kind: TransitionKind,
}

/// The envisionment: a validated, immutable multigraph of retained states.
///
/// States and transitions are stored in vectors indexed by their ids, which
/// are contiguous and assigned in discovery order.
#[derive(Debug, Clone)]
pub struct EnvisionmentGraph<S> {
    pub(crate) states: Vec<StateNode<S>>,
    pub(crate) transitions: Vec<Transition>,
    /// Value-equality index: state value -> id.
    pub(crate) index: HashMap<S, StateId>,
}

impl<S> EnvisionmentGraph<S> {
    /// Return all states in id order.
    pub fn states(&self) -> &[StateNode<S>] {
        &self.states
    }

    /// Return all transitions in discovery order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Get a state by ID (returns None if ID out of bounds).
    pub fn state(&self, id: StateId) -> Option<&StateNode<S>> {
        self.states.get(id.slot())
    }

    /// Get a transition by ID (returns None if ID out of bounds).
    pub fn transition(&self, id: EdgeId) -> Option<&Transition> {
        self.transitions.get(id.slot())
    }

    /// The seed state of the search, if any.
    pub fn initial(&self) -> Option<&StateNode<S>> {
        self.states.first()
    }

    /// Transitions leaving `id`, in discovery order.
    pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().filter(move |t| t.from == id)
    }

    /// Transitions entering `id`, in discovery order.
    pub fn incoming(&self, id: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().filter(move |t| t.to == id)
    }

    /// States with no outgoing transition.
    pub fn terminal_states(&self) -> impl Iterator<Item = &StateNode<S>> + '_ {
        self.states.iter().filter(|n| n.is_terminal())
    }
}

impl<S: Eq + Hash> EnvisionmentGraph<S> {
    /// Id of the retained state value-equal to `state`.
    pub fn find(&self, state: &S) -> Option<StateId> {
        self.index.get(state).copied()
    }
}
