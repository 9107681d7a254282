//! Graph-specific error types.

use qf_core::{EdgeId, QfError, StateId};

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A transition refers to a state that doesn't exist.
    InvalidStateRef { edge: EdgeId, state: StateId },

    /// An id doesn't match its position in the backing vector.
    NonContiguousId {
        what: &'static str,
        expected: u32,
        actual: u32,
    },

    /// Two retained states are value-equal.
    DuplicateState { first: StateId, second: StateId },

    /// A state's successor list disagrees with its outgoing transitions.
    SuccessorMismatch { state: StateId },

    /// ID not found in the graph.
    IdNotFound { what: &'static str },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidStateRef { edge, state } => {
                write!(f, "Transition {} refers to non-existent state {}", edge, state)
            }
            GraphError::NonContiguousId {
                what,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} id {} found where id {} was expected",
                    what, actual, expected
                )
            }
            GraphError::DuplicateState { first, second } => {
                write!(f, "States {} and {} are value-equal", first, second)
            }
            GraphError::SuccessorMismatch { state } => {
                write!(
                    f,
                    "State {}'s successor list disagrees with its outgoing transitions",
                    state
                )
            }
            GraphError::IdNotFound { what } => {
                write!(f, "{} not found in graph", what)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for QfError {
    fn from(err: GraphError) -> Self {
        QfError::Invariant {
            what: err.to_string(),
        }
    }
}
