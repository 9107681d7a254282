//! Scenario files: an initial state plus search settings, in YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use qf_envision::{ExpansionOrder, SearchOptions};

use crate::TankResult;
use crate::state::SystemState;
use crate::validator::Validator;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub initial: InitialState,
    #[serde(default)]
    pub search: SearchSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InitialState {
    pub inflow: QuantityPair,
    pub volume: QuantityPair,
    pub outflow: QuantityPair,
}

/// Landmark names of one entity's magnitude and derivative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuantityPair {
    pub magnitude: String,
    pub derivative: String,
}

impl QuantityPair {
    pub fn new(magnitude: &str, derivative: &str) -> Self {
        Self {
            magnitude: magnitude.to_string(),
            derivative: derivative.to_string(),
        }
    }

    fn as_array(&self) -> [&str; 2] {
        [self.magnitude.as_str(), self.derivative.as_str()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    pub order: ExpansionOrder,
    pub max_states: usize,
    pub strict_proportionality: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        let opts = SearchOptions::default();
        Self {
            order: opts.order,
            max_states: opts.max_states,
            strict_proportionality: Validator::default().strict_proportionality,
        }
    }
}

impl Scenario {
    /// Empty tank with inflow, volume and outflow all starting to rise.
    pub fn empty_tank() -> Self {
        Self {
            name: Some("empty-tank-filling".to_string()),
            initial: InitialState {
                inflow: QuantityPair::new("zero", "positive"),
                volume: QuantityPair::new("zero", "positive"),
                outflow: QuantityPair::new("zero", "positive"),
            },
            search: SearchSection::default(),
        }
    }

    pub fn from_yaml_str(content: &str) -> TankResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> TankResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn save(&self, path: &Path) -> TankResult<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve landmark names into a state.
    pub fn initial_state(&self) -> TankResult<SystemState> {
        let i = &self.initial;
        Ok(SystemState::from_landmarks(
            i.inflow.as_array(),
            i.volume.as_array(),
            i.outflow.as_array(),
        )?)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            order: self.search.order,
            max_states: self.search.max_states,
        }
    }

    pub fn validator(&self) -> Validator {
        Validator {
            strict_proportionality: self.search.strict_proportionality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_section_defaults() {
        let s = SearchSection::default();
        assert_eq!(s.order, ExpansionOrder::BreadthFirst);
        assert_eq!(s.max_states, 4096);
        assert!(s.strict_proportionality);
    }

    #[test]
    fn empty_tank_resolves() {
        let state = Scenario::empty_tank().initial_state().unwrap();
        assert_eq!(
            state.to_string(),
            "inflow(zero, positive) volume(zero, positive) outflow(zero, positive)"
        );
    }

    #[test]
    fn partial_search_section_keeps_defaults() {
        let yaml = r#"
initial:
  inflow: { magnitude: positive, derivative: zero }
  volume: { magnitude: positive, derivative: zero }
  outflow: { magnitude: positive, derivative: zero }
search:
  order: depth_first
"#;
        let scenario = Scenario::from_yaml_str(yaml).unwrap();
        assert_eq!(scenario.name, None);
        assert_eq!(scenario.search.order, ExpansionOrder::DepthFirst);
        assert_eq!(scenario.search.max_states, 4096);
        assert!(scenario.validator().strict_proportionality);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let yaml = r#"
initial:
  inflow: { magnitude: zero, derivative: zero, rate: 3 }
  volume: { magnitude: zero, derivative: zero }
  outflow: { magnitude: zero, derivative: zero }
"#;
        assert!(Scenario::from_yaml_str(yaml).is_err());
    }
}
