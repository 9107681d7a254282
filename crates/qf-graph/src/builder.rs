//! Incremental graph builder.

use std::collections::HashMap;
use std::hash::Hash;

use qf_core::{EdgeId, QfResult, StateId};

use crate::graph::{EnvisionmentGraph, StateNode, Transition, TransitionKind};
use crate::validate;

/// Builder for constructing an envisionment incrementally.
///
/// Use `find` to look up a value-equal retained state, `add_state` to retain a
/// new one and `add_transition` to connect them, then call `build()` to
/// validate and freeze it into an immutable `EnvisionmentGraph`.
#[derive(Debug)]
pub struct GraphBuilder<S> {
    states: Vec<StateNode<S>>,
    transitions: Vec<Transition>,
    index: HashMap<S, StateId>,
    next_state_id: u32,
    next_edge_id: u32,
}

impl<S> Default for GraphBuilder<S> {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            index: HashMap::new(),
            next_state_id: 0,
            next_edge_id: 0,
        }
    }
}

impl<S: Clone + Eq + Hash> GraphBuilder<S> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain a state and return its freshly assigned ID.
    ///
    /// Callers are expected to `find` first; a value-equal duplicate is
    /// reported by `build()`.
    pub fn add_state(&mut self, state: S, description: impl Into<String>) -> StateId {
        let id = StateId::from_index(self.next_state_id);
        self.next_state_id += 1;
        self.index.entry(state.clone()).or_insert(id);
        self.states.push(StateNode {
            id,
            state,
            description: description.into(),
            successors: Vec::new(),
        });
        id
    }

    /// Id of a retained state value-equal to `state`.
    pub fn find(&self, state: &S) -> Option<StateId> {
        self.index.get(state).copied()
    }

    /// Value of a retained state.
    pub fn state(&self, id: StateId) -> Option<&S> {
        self.states.get(id.slot()).map(|n| &n.state)
    }

    /// Record a transition and extend the source's successor list.
    pub fn add_transition(
        &mut self,
        from: StateId,
        to: StateId,
        justification: impl Into<String>,
        kind: TransitionKind,
    ) -> EdgeId {
        let id = EdgeId::from_index(self.next_edge_id);
        self.next_edge_id += 1;
        self.transitions.push(Transition {
            id,
            from,
            to,
            justification: justification.into(),
            kind,
        });

        if let Some(node) = self.states.get_mut(from.slot()) {
            if !node.successors.contains(&to) {
                node.successors.push(to);
            }
        }

        id
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Build and validate the graph, returning an immutable `EnvisionmentGraph`.
    pub fn build(self) -> QfResult<EnvisionmentGraph<S>> {
        validate::validate_structure(&self.states, &self.transitions)?;
        validate::validate_unique(&self.states)?;
        validate::validate_successors(&self.states, &self.transitions)?;

        Ok(EnvisionmentGraph {
            states: self.states,
            transitions: self.transitions,
            index: self.index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_state("a", "initial state");
        let b = builder.add_state("b", "step");
        let e = builder.add_transition(a, b, "step", TransitionKind::Time);

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(e.index(), 0);
        assert_eq!(builder.state_count(), 2);
        assert_eq!(builder.transition_count(), 1);
        assert_eq!(builder.find(&"b"), Some(b));
        assert_eq!(builder.state(a), Some(&"a"));
    }

    #[test]
    fn successors_are_distinct() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_state(1, "initial state");
        let b = builder.add_state(2, "up");
        builder.add_transition(a, b, "up", TransitionKind::Increase);
        builder.add_transition(a, b, "also up", TransitionKind::Time);

        assert_eq!(builder.states[0].successors, vec![b]);
        assert_eq!(builder.transition_count(), 2);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_state(10, "initial state");
        let b = builder.add_state(20, "grow");
        builder.add_transition(a, b, "grow", TransitionKind::Time);
        builder.add_transition(b, a, "shrink", TransitionKind::Time);

        let graph = builder.build().unwrap();
        assert_eq!(graph.states().len(), 2);
        assert_eq!(graph.outgoing(a).count(), 1);
        assert_eq!(graph.incoming(a).count(), 1);
        assert_eq!(graph.terminal_states().count(), 0);
    }

    #[test]
    fn build_rejects_duplicate_states() {
        let mut builder = GraphBuilder::new();
        builder.add_state(5, "initial state");
        builder.add_state(5, "again");
        let err = builder.build().unwrap_err();
        assert!(format!("{err}").contains("value-equal"));
    }
}
