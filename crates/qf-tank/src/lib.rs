//! qf-tank: qualitative model of a container with inflow and outflow.
//!
//! Provides:
//! - SystemState: six value-type quantities (inflow, volume, outflow × magnitude, derivative)
//! - RuleSet: the ordered qualitative-physics rule table
//! - Validator: boundary constraints rejecting impossible states
//! - TankModel: the `QualitativeModel` the envisionment driver explores
//! - Scenario files (YAML) and a serializable report of the resulting graph

pub mod entity;
pub mod model;
pub mod report;
pub mod rules;
pub mod scenario;
pub mod state;
pub mod validator;

pub use entity::{Entity, Role};
pub use model::TankModel;
pub use report::{TankReport, dot_label};
pub use rules::{Rule, RuleSet};
pub use scenario::{InitialState, QuantityPair, Scenario, SearchSection};
pub use state::{Delta, SystemState};
pub use validator::{Validator, Violation};

pub type TankResult<T> = Result<T, TankError>;

#[derive(thiserror::Error, Debug)]
pub enum TankError {
    #[error("Model error: {0}")]
    Core(#[from] qf_core::QfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
