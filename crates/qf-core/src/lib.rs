//! qf-core: stable foundation for qualiflow.
//!
//! Contains:
//! - ids (compact ids for retained states and transitions)
//! - qspace (quantity spaces: ordered landmarks + stationarity)
//! - quantity (value-type quantities with saturating steps)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod qspace;
pub mod quantity;

// Re-exports: nice ergonomics for downstream crates
pub use error::{QfError, QfResult};
pub use ids::*;
pub use qspace::{
    Landmark, QuantitySpace, bounded_magnitude_space, derivative_space, magnitude_space,
};
pub use quantity::{Quantity, Step};
