//! Serializable view of a tank envisionment, and node labels for DOT export.

use serde::Serialize;

use qf_envision::{Envisionment, SearchStats};
use qf_graph::StateNode;

use crate::TankResult;
use crate::state::SystemState;

#[derive(Debug, Clone, Serialize)]
pub struct TankReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub stats: SearchStats,
    pub states: Vec<StateRecord>,
    pub transitions: Vec<TransitionRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateRecord {
    pub id: u32,
    pub description: String,
    pub inflow: QuantityRecord,
    pub volume: QuantityRecord,
    pub outflow: QuantityRecord,
    pub successors: Vec<u32>,
    pub terminal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuantityRecord {
    pub magnitude: &'static str,
    pub derivative: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionRecord {
    pub id: u32,
    pub from: u32,
    pub to: u32,
    pub kind: &'static str,
    pub justification: String,
}

impl TankReport {
    pub fn from_envisionment(scenario: Option<&str>, env: &Envisionment<SystemState>) -> Self {
        let states = env
            .graph
            .states()
            .iter()
            .map(|node| {
                let [inflow, volume, outflow] = node.state.landmark_names().map(|[m, d]| {
                    QuantityRecord {
                        magnitude: m,
                        derivative: d,
                    }
                });
                StateRecord {
                    id: node.id.index(),
                    description: node.description.clone(),
                    inflow,
                    volume,
                    outflow,
                    successors: node.successors.iter().map(|s| s.index()).collect(),
                    terminal: node.is_terminal(),
                }
            })
            .collect();

        let transitions = env
            .graph
            .transitions()
            .iter()
            .map(|t| TransitionRecord {
                id: t.id.index(),
                from: t.from.index(),
                to: t.to.index(),
                kind: t.kind.as_str(),
                justification: t.justification.clone(),
            })
            .collect();

        Self {
            scenario: scenario.map(str::to_string),
            stats: env.stats,
            states,
            transitions,
        }
    }

    pub fn to_json(&self) -> TankResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Multi-line node label: id, then one line per entity.
pub fn dot_label(node: &StateNode<SystemState>) -> String {
    let [i, v, o] = node.state.landmark_names();
    format!(
        "S{}\ninflow: {} / {}\nvolume: {} / {}\noutflow: {} / {}",
        node.id, i[0], i[1], v[0], v[1], o[0], o[1]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TankModel;
    use crate::scenario::Scenario;
    use qf_envision::SearchOptions;

    fn empty_tank_report() -> TankReport {
        let scenario = Scenario::empty_tank();
        let env = TankModel::default()
            .envision(scenario.initial_state().unwrap(), &SearchOptions::default())
            .unwrap();
        TankReport::from_envisionment(scenario.name.as_deref(), &env)
    }

    #[test]
    fn report_mirrors_graph() {
        let report = empty_tank_report();
        assert_eq!(report.scenario.as_deref(), Some("empty-tank-filling"));
        assert_eq!(report.states.len(), report.stats.expanded);
        assert_eq!(report.states[0].description, "initial state");
        assert_eq!(report.states[0].inflow.magnitude, "zero");
        assert_eq!(report.states[0].successors, vec![1]);
        assert_eq!(report.transitions[0].kind, "time");
    }

    #[test]
    fn json_lists_states_and_transitions() {
        let report = empty_tank_report();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["states"].as_array().unwrap().len(),
            report.states.len()
        );
        assert_eq!(
            value["transitions"].as_array().unwrap().len(),
            report.transitions.len()
        );
        assert_eq!(value["states"][0]["volume"]["derivative"], "positive");
    }

    #[test]
    fn dot_label_lists_entities() {
        let report_env = TankModel::default()
            .envision(
                Scenario::empty_tank().initial_state().unwrap(),
                &SearchOptions::default(),
            )
            .unwrap();
        let label = dot_label(&report_env.graph.states()[0]);
        assert_eq!(
            label,
            "S0\ninflow: zero / positive\nvolume: zero / positive\noutflow: zero / positive"
        );
    }
}
