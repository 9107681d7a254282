//! Graph validation logic.

use std::collections::HashMap;
use std::hash::Hash;

use qf_core::{QfResult, StateId};

use crate::error::GraphError;
use crate::graph::{StateNode, Transition};

/// Validate ids and references: ids are contiguous, transitions point at existing states.
pub(crate) fn validate_structure<S>(
    states: &[StateNode<S>],
    transitions: &[Transition],
) -> QfResult<()> {
    for (i, node) in states.iter().enumerate() {
        if node.id.slot() != i {
            return Err(GraphError::NonContiguousId {
                what: "State",
                expected: i as u32,
                actual: node.id.index(),
            }
            .into());
        }
    }

    for (i, t) in transitions.iter().enumerate() {
        if t.id.slot() != i {
            return Err(GraphError::NonContiguousId {
                what: "Transition",
                expected: i as u32,
                actual: t.id.index(),
            }
            .into());
        }
        for endpoint in [t.from, t.to] {
            if endpoint.slot() >= states.len() {
                return Err(GraphError::InvalidStateRef {
                    edge: t.id,
                    state: endpoint,
                }
                .into());
            }
        }
    }

    Ok(())
}

/// No two retained states may be value-equal.
pub(crate) fn validate_unique<S: Eq + Hash>(states: &[StateNode<S>]) -> QfResult<()> {
    let mut seen: HashMap<&S, StateId> = HashMap::with_capacity(states.len());
    for node in states {
        if let Some(&first) = seen.get(&node.state) {
            return Err(GraphError::DuplicateState {
                first,
                second: node.id,
            }
            .into());
        }
        seen.insert(&node.state, node.id);
    }
    Ok(())
}

/// Each successor list must equal the distinct targets of the state's
/// outgoing transitions, in discovery order.
pub(crate) fn validate_successors<S>(
    states: &[StateNode<S>],
    transitions: &[Transition],
) -> QfResult<()> {
    let mut expected: Vec<Vec<StateId>> = vec![Vec::new(); states.len()];
    for t in transitions {
        let list = &mut expected[t.from.slot()];
        if !list.contains(&t.to) {
            list.push(t.to);
        }
    }

    for (node, expected) in states.iter().zip(&expected) {
        if &node.successors != expected {
            return Err(GraphError::SuccessorMismatch { state: node.id }.into());
        }
    }

    Ok(())
}
