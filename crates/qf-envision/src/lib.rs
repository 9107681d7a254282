//! Envisionment search for qualiflow.
//!
//! Provides:
//! - `QualitativeModel` trait: rule application and admissibility for a state type
//! - Worklist driver that deduplicates states by value and assembles the graph
//! - Breadth-first or depth-first expansion, chosen explicitly in `SearchOptions`

pub mod error;
pub mod model;
pub mod search;

// Re-exports for public API
pub use error::{EnvisionError, EnvisionResult};
pub use model::{Candidate, QualitativeModel};
pub use search::{
    Envisionment, ExpansionOrder, INITIAL_DESCRIPTION, SearchOptions, SearchStats,
    run_envisionment,
};
