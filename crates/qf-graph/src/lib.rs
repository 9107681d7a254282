//! qf-graph: envisionment graph layer for qualiflow.
//!
//! Provides:
//! - Core graph data structures (StateNode, Transition, EnvisionmentGraph)
//! - Incremental graph builder with value-equality lookup and validation
//! - Export to a petgraph `DiGraph` and DOT text for external renderers
//!
//! The graph is generic over the state type; any `Clone + Eq + Hash` value
//! can be retained, and equality (not identity) is the dedup key.
//!
//! # Example
//!
//! ```
//! use qf_graph::{GraphBuilder, TransitionKind};
//!
//! let mut builder = GraphBuilder::new();
//! let empty = builder.add_state(0_u8, "initial state");
//! let full = builder.add_state(1_u8, "filled");
//! builder.add_transition(empty, full, "filled", TransitionKind::Time);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.states().len(), 2);
//! assert_eq!(graph.transitions().len(), 1);
//! assert_eq!(graph.find(&1), Some(full));
//! ```

pub mod builder;
pub mod error;
pub mod export;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::{EnvisionmentGraph, StateNode, Transition, TransitionKind};
