//! Integration test: envisionment of the tank model.
//!
//! Scenario: empty tank, inflow / volume / outflow all starting to rise. The
//! seed itself breaks a constraint (volume rising with no inflow yet) and is
//! expanded anyway.
//!
//! Checks that:
//! - the graph is finite, duplicate-free and every state past the seed is admissible
//! - terminal states are exactly the states with no valid non-self candidate
//! - inflow opens before the volume leaves zero
//! - a full tank never leads to a rising volume
//! - breadth-first and depth-first search retain the same states

use std::collections::HashSet;

use qf_envision::{Envisionment, ExpansionOrder, SearchOptions};
use qf_graph::TransitionKind;
use qf_tank::{Entity, Scenario, SystemState, TankModel, Validator};

fn empty_tank() -> SystemState {
    Scenario::empty_tank().initial_state().unwrap()
}

fn envision(model: &TankModel, initial: SystemState, order: ExpansionOrder) -> Envisionment<SystemState> {
    let opts = SearchOptions {
        order,
        ..SearchOptions::default()
    };
    model.envision(initial, &opts).unwrap()
}

#[test]
fn empty_tank_envisionment_shape() {
    let env = envision(&TankModel::default(), empty_tank(), ExpansionOrder::BreadthFirst);

    assert_eq!(env.graph.states().len(), 19);
    assert_eq!(env.graph.transitions().len(), 32);
    assert_eq!(env.stats.expanded, 19);
    assert_eq!(env.stats.generated, 33);
    assert_eq!(env.stats.rejected, 1);
    assert_eq!(env.stats.merged, 14);
    assert_eq!(env.stats.self_loops, 0);

    // Only equilibrium: full tank while inflow keeps rising
    let terminals: Vec<SystemState> = env.graph.terminal_states().map(|n| n.state).collect();
    assert_eq!(
        terminals,
        vec![
            SystemState::from_landmarks(
                ["positive", "positive"],
                ["maximum", "zero"],
                ["maximum", "zero"]
            )
            .unwrap()
        ]
    );
}

#[test]
fn inflow_opens_first() {
    let env = envision(&TankModel::default(), empty_tank(), ExpansionOrder::BreadthFirst);

    let first = &env.graph.transitions()[0];
    assert_eq!(first.from.index(), 0);
    assert_eq!(first.to.index(), 1);
    assert_eq!(first.kind, TransitionKind::Time);
    assert_eq!(first.justification, "inflow rising from zero: inflow becomes positive");

    let target = env.graph.state(first.to).unwrap().state;
    assert_eq!(target.magnitude(Entity::Inflow).name(), "positive");
    assert_eq!(target.magnitude(Entity::Volume).name(), "zero");

    // the seed's other candidate (volume rising with inflow still closed) was rejected
    assert_eq!(env.graph.state(first.from).unwrap().successors, vec![first.to]);
}

#[test]
fn no_duplicate_and_no_invalid_states() {
    let validator = Validator::default();
    assert!(!validator.is_valid(&empty_tank()));

    for order in [ExpansionOrder::BreadthFirst, ExpansionOrder::DepthFirst] {
        let env = envision(&TankModel::default(), empty_tank(), order);
        let distinct: HashSet<SystemState> = env.graph.states().iter().map(|n| n.state).collect();
        assert_eq!(distinct.len(), env.graph.states().len());

        let (seed, rest) = env.graph.states().split_first().unwrap();
        assert_eq!(seed.state, empty_tank());
        for node in rest {
            assert!(validator.is_valid(&node.state), "retained invalid state {}", node.state);
        }
    }
}

#[test]
fn terminal_detection_matches_rules() {
    let model = TankModel::default();
    let env = envision(&model, empty_tank(), ExpansionOrder::BreadthFirst);

    for node in env.graph.states() {
        let productive = model
            .rules
            .candidates(&node.state)
            .into_iter()
            .filter(|c| model.validator.is_valid(&c.state) && c.state != node.state)
            .count();
        assert_eq!(node.is_terminal(), productive == 0, "state {}", node.id);
        assert_eq!(node.is_terminal(), env.graph.outgoing(node.id).count() == 0);
    }
}

#[test]
fn full_tank_never_leads_to_rising_volume() {
    let env = envision(&TankModel::default(), empty_tank(), ExpansionOrder::BreadthFirst);
    for t in env.graph.transitions() {
        let from = env.graph.state(t.from).unwrap().state;
        let to = env.graph.state(t.to).unwrap().state;
        if from.magnitude(Entity::Volume).is_max() {
            assert!(to.derivative(Entity::Volume).value() <= 0, "edge {}", t.id);
        }
    }
}

#[test]
fn expansion_order_only_changes_ids() {
    let model = TankModel::default();
    let bfs = envision(&model, empty_tank(), ExpansionOrder::BreadthFirst);
    let dfs = envision(&model, empty_tank(), ExpansionOrder::DepthFirst);

    let a: HashSet<SystemState> = bfs.graph.states().iter().map(|n| n.state).collect();
    let b: HashSet<SystemState> = dfs.graph.states().iter().map(|n| n.state).collect();
    assert_eq!(a, b);

    // same edges once ids are resolved back to states
    let edges = |env: &Envisionment<SystemState>| -> HashSet<(SystemState, SystemState, String)> {
        env.graph
            .transitions()
            .iter()
            .map(|t| {
                (
                    env.graph.state(t.from).unwrap().state,
                    env.graph.state(t.to).unwrap().state,
                    t.justification.clone(),
                )
            })
            .collect()
    };
    assert_eq!(edges(&bfs), edges(&dfs));
}

#[test]
fn every_start_terminates_within_bound() {
    let model = TankModel::default();
    for initial in SystemState::enumerate_all() {
        let env = envision(&model, initial, ExpansionOrder::BreadthFirst);
        assert!(env.graph.states().len() <= 162);
        assert_eq!(env.graph.initial().unwrap().state, initial);
        // constraints screen every successor, whatever the seed
        assert!(env.graph.states()[1..].iter().all(|n| model.validator.is_valid(&n.state)));
    }
}

#[test]
fn lenient_validator_same_graph_for_empty_tank() {
    let strict = envision(&TankModel::default(), empty_tank(), ExpansionOrder::BreadthFirst);
    let lenient = envision(
        &TankModel::new(Validator::lenient()),
        empty_tank(),
        ExpansionOrder::BreadthFirst,
    );
    assert_eq!(strict.graph.states().len(), lenient.graph.states().len());
    assert_eq!(strict.graph.transitions().len(), lenient.graph.transitions().len());
}

#[test]
fn drained_tank_cycles_back_to_filling() {
    let env = envision(&TankModel::default(), empty_tank(), ExpansionOrder::BreadthFirst);
    let drained = SystemState::from_landmarks(["zero", "zero"], ["zero", "zero"], ["zero", "zero"])
        .unwrap();
    let id = env.graph.find(&drained).expect("tank can drain completely");

    // reopening the inflow leads back into a retained state
    let out: Vec<_> = env.graph.outgoing(id).collect();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].justification, "inflow starts increasing");
    assert!(env.graph.state(out[0].to).unwrap().successors.len() == 1);
}
