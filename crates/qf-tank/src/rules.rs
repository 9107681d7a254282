//! Qualitative physics of the tank as an ordered rule table.
//!
//! Each rule is a guarded production: when its guard holds over the current
//! state, its deltas are applied to a copy of the state to form one candidate.
//! Rules are evaluated in table order, which fixes the candidate order and so
//! the id assignment of the search.

use qf_envision::Candidate;
use qf_graph::TransitionKind;

use crate::entity::Entity::{Inflow, Outflow, Volume};
use crate::entity::Role::{Derivative, Magnitude};
use crate::entity::{Entity, Role};
use crate::state::{Delta, SystemState};

/// A guarded production over tank states.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Stable identifier.
    pub name: &'static str,
    /// Human-readable reason, attached to the produced transition.
    pub justification: &'static str,
    pub kind: TransitionKind,
    pub guard: fn(&SystemState) -> bool,
    pub deltas: Vec<Delta>,
}

impl Rule {
    /// Candidate produced by this rule from `state`, if the guard holds and
    /// at least one quantity actually moves.
    pub fn fire(&self, state: &SystemState) -> Option<Candidate<SystemState>> {
        if !(self.guard)(state) {
            return None;
        }
        let next = state.apply(&self.deltas);
        (next != *state).then(|| Candidate::new(next, self.justification, self.kind))
    }
}

/// Inflow regime, from inflow magnitude and trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Regime {
    Increasing,
    Steady,
    Decreasing,
    Closed,
}

fn regime(s: &SystemState) -> Option<Regime> {
    let open = !s.magnitude(Inflow).is_min();
    match (open, trend(s, Inflow)) {
        (true, t) if t > 0 => Some(Regime::Increasing),
        (true, 0) => Some(Regime::Steady),
        (true, _) => Some(Regime::Decreasing),
        (false, 0) => Some(Regime::Closed),
        (false, _) => None,
    }
}

fn trend(s: &SystemState, e: Entity) -> i32 {
    s.derivative(e).value()
}

/// At the interior "positive" landmark of a bounded magnitude.
fn at_positive(s: &SystemState, e: Entity) -> bool {
    let m = s.magnitude(e);
    !m.is_min() && !m.is_max()
}

/// No quantity, magnitude or derivative, rests on a stationary landmark.
fn nothing_stationary(s: &SystemState) -> bool {
    s.quantities().all(|(_, _, q)| !q.is_stationary())
}

fn up(e: Entity, r: Role) -> Delta {
    Delta::up(e, r)
}

fn down(e: Entity, r: Role) -> Delta {
    Delta::down(e, r)
}

/// The ordered rule table of the tank model.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::tank()
    }
}

impl RuleSet {
    /// Build a rule set from an explicit table.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every candidate successor of `state`, in rule order. Never mutates `state`.
    pub fn candidates(&self, state: &SystemState) -> Vec<Candidate<SystemState>> {
        self.rules.iter().filter_map(|r| r.fire(state)).collect()
    }

    /// Names of the rules whose guards hold for `state`.
    pub fn firing(&self, state: &SystemState) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| (r.guard)(state))
            .map(|r| r.name)
            .collect()
    }

    /// The inflow / volume / outflow rule catalogue.
    pub fn tank() -> Self {
        use TransitionKind::{Decrease, Increase, Time};

        let rules = vec![
            // Instantaneous rules: magnitudes follow a derivative already set.
            Rule {
                name: "outflow-leaves-zero",
                justification: "outflow rising from empty: volume and outflow become positive",
                kind: Time,
                guard: |s| s.magnitude(Outflow).is_min() && trend(s, Outflow) > 0,
                deltas: vec![up(Volume, Magnitude), up(Outflow, Magnitude)],
            },
            Rule {
                name: "inflow-opens",
                justification: "inflow rising from zero: inflow becomes positive",
                kind: Time,
                guard: |s| {
                    s.magnitude(Inflow).is_min()
                        && trend(s, Inflow) > 0
                        && !s.derivative(Outflow).is_stationary()
                },
                deltas: vec![up(Inflow, Magnitude)],
            },
            Rule {
                name: "inflow-opens-propagates",
                justification: "inflow rising from zero: inflow becomes positive, volume and outflow start rising",
                kind: Time,
                guard: |s| {
                    s.magnitude(Inflow).is_min()
                        && trend(s, Inflow) > 0
                        && s.derivative(Outflow).is_stationary()
                },
                deltas: vec![
                    up(Inflow, Magnitude),
                    up(Volume, Derivative),
                    up(Outflow, Derivative),
                ],
            },
            // Increasing inflow.
            Rule {
                name: "increasing-inflow-accelerates",
                justification: "inflow increasing: volume and outflow rise faster",
                kind: Increase,
                guard: |s| regime(s) == Some(Regime::Increasing) && !s.magnitude(Outflow).is_max(),
                deltas: vec![up(Volume, Derivative), up(Outflow, Derivative)],
            },
            Rule {
                name: "increasing-inflow-fills",
                justification: "inflow increasing: tank fills to maximum",
                kind: Time,
                guard: |s| {
                    regime(s) == Some(Regime::Increasing)
                        && at_positive(s, Outflow)
                        && trend(s, Outflow) > 0
                },
                deltas: vec![
                    up(Volume, Magnitude),
                    up(Outflow, Magnitude),
                    down(Volume, Derivative),
                    down(Outflow, Derivative),
                ],
            },
            Rule {
                name: "increasing-inflow-converges",
                justification: "outflow trend matches inflow trend: volume and outflow level off",
                kind: Decrease,
                guard: |s| {
                    regime(s) == Some(Regime::Increasing)
                        && s.derivative(Outflow) == s.derivative(Inflow)
                        && at_positive(s, Outflow)
                },
                deltas: vec![down(Volume, Derivative), down(Outflow, Derivative)],
            },
            // Steady inflow: outflow trend is driven back toward zero.
            Rule {
                name: "steady-inflow-decelerates",
                justification: "inflow steady: outflow stops rising",
                kind: Decrease,
                guard: |s| regime(s) == Some(Regime::Steady) && trend(s, Outflow) > 0,
                deltas: vec![down(Volume, Derivative), down(Outflow, Derivative)],
            },
            Rule {
                name: "steady-inflow-recovers",
                justification: "inflow steady: outflow stops falling",
                kind: Increase,
                guard: |s| regime(s) == Some(Regime::Steady) && trend(s, Outflow) < 0,
                deltas: vec![up(Volume, Derivative), up(Outflow, Derivative)],
            },
            Rule {
                name: "steady-inflow-fills",
                justification: "inflow steady: tank fills to maximum",
                kind: Time,
                guard: |s| {
                    regime(s) == Some(Regime::Steady)
                        && at_positive(s, Outflow)
                        && trend(s, Outflow) > 0
                },
                deltas: vec![
                    up(Volume, Magnitude),
                    up(Outflow, Magnitude),
                    down(Volume, Derivative),
                    down(Outflow, Derivative),
                ],
            },
            // Decreasing inflow.
            Rule {
                name: "decreasing-inflow-decelerates",
                justification: "inflow decreasing: volume and outflow fall",
                kind: Decrease,
                guard: |s| regime(s) == Some(Regime::Decreasing),
                deltas: vec![down(Volume, Derivative), down(Outflow, Derivative)],
            },
            Rule {
                name: "decreasing-inflow-exhausts",
                justification: "tank drains faster than inflow: inflow runs dry",
                kind: Time,
                guard: |s| {
                    regime(s) == Some(Regime::Decreasing)
                        && trend(s, Outflow) < 0
                        && !s.magnitude(Outflow).is_max()
                },
                deltas: vec![up(Inflow, Derivative), down(Inflow, Magnitude)],
            },
            Rule {
                name: "decreasing-inflow-collapses",
                justification: "inflow decreasing: tank drops below maximum",
                kind: Time,
                guard: |s| {
                    regime(s) == Some(Regime::Decreasing)
                        && s.magnitude(Outflow).is_max()
                        && trend(s, Outflow) < 0
                },
                deltas: vec![down(Volume, Magnitude), down(Outflow, Magnitude)],
            },
            Rule {
                name: "decreasing-inflow-resteadies",
                justification: "outflow trend matches inflow trend: volume and outflow steady again",
                kind: Increase,
                guard: |s| {
                    regime(s) == Some(Regime::Decreasing)
                        && s.derivative(Outflow) == s.derivative(Inflow)
                        && !s.magnitude(Outflow).is_stationary()
                },
                deltas: vec![up(Volume, Derivative), up(Outflow, Derivative)],
            },
            // Closed inflow.
            Rule {
                name: "closed-inflow-drains",
                justification: "inflow closed: tank drains",
                kind: Decrease,
                guard: |s| regime(s) == Some(Regime::Closed) && !s.magnitude(Outflow).is_min(),
                deltas: vec![down(Volume, Derivative), down(Outflow, Derivative)],
            },
            Rule {
                name: "closed-inflow-empties",
                justification: "inflow closed: tank finishes draining",
                kind: Time,
                guard: |s| {
                    regime(s) == Some(Regime::Closed)
                        && at_positive(s, Outflow)
                        && trend(s, Outflow) < 0
                },
                deltas: vec![
                    up(Volume, Derivative),
                    up(Outflow, Derivative),
                    down(Volume, Magnitude),
                    down(Outflow, Magnitude),
                ],
            },
            // Exogenous changes of the inflow trend.
            Rule {
                name: "inflow-trend-rises",
                justification: "inflow starts increasing",
                kind: Increase,
                guard: |s| trend(s, Inflow) == 0,
                deltas: vec![up(Inflow, Derivative)],
            },
            Rule {
                name: "inflow-trend-falls",
                justification: "inflow starts decreasing",
                kind: Decrease,
                guard: |s| trend(s, Inflow) == 0 && !s.magnitude(Inflow).is_min(),
                deltas: vec![down(Inflow, Derivative)],
            },
            Rule {
                name: "inflow-trend-levels-off",
                justification: "inflow stops increasing",
                kind: Decrease,
                guard: |s| trend(s, Inflow) > 0 && nothing_stationary(s),
                deltas: vec![down(Inflow, Derivative)],
            },
            Rule {
                name: "inflow-trend-bottoms-out",
                justification: "inflow stops decreasing",
                kind: Increase,
                guard: |s| trend(s, Inflow) < 0 && nothing_stationary(s),
                deltas: vec![up(Inflow, Derivative)],
            },
        ];

        Self::new(rules)
    }
}
