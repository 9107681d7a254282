//! Error types for envisionment search.

use thiserror::Error;

/// Errors encountered while building an envisionment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvisionError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("State limit of {limit} retained states exceeded")]
    StateLimit { limit: usize },

    #[error("Graph error: {message}")]
    Graph { message: String },

    #[error("Core error: {0}")]
    Core(#[from] qf_core::QfError),
}

pub type EnvisionResult<T> = Result<T, EnvisionError>;

impl From<qf_graph::GraphError> for EnvisionError {
    fn from(e: qf_graph::GraphError) -> Self {
        EnvisionError::Graph {
            message: e.to_string(),
        }
    }
}
