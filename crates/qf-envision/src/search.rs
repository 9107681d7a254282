//! Envisionment driver and search statistics.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use qf_core::StateId;
use qf_graph::{EnvisionmentGraph, GraphBuilder, GraphError};

use crate::error::{EnvisionError, EnvisionResult};
use crate::model::{Candidate, QualitativeModel};

/// Description given to the seed state.
pub const INITIAL_DESCRIPTION: &str = "initial state";

/// Order in which frontier states are expanded.
///
/// The retained node set does not depend on the order; state ids and edge
/// discovery order do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionOrder {
    /// First in, first out: a layered graph (default).
    #[default]
    BreadthFirst,
    /// Last in, first out: deep exploration first.
    DepthFirst,
}

/// Options for envisionment runs.
#[derive(Clone, Debug)]
pub struct SearchOptions {
    /// Frontier discipline
    pub order: ExpansionOrder,
    /// Maximum number of retained states (safety limit)
    pub max_states: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            order: ExpansionOrder::default(),
            max_states: 4096,
        }
    }
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States taken off the frontier and expanded.
    pub expanded: usize,
    /// Candidates produced by the model.
    pub generated: usize,
    /// Candidates dropped as inadmissible.
    pub rejected: usize,
    /// Candidates value-equal to an already retained state (cycles, re-convergence).
    pub merged: usize,
    /// Candidates equal to the state they were generated from.
    pub self_loops: usize,
}

/// Result of an envisionment run.
#[derive(Clone, Debug)]
pub struct Envisionment<S> {
    pub graph: EnvisionmentGraph<S>,
    pub stats: SearchStats,
}

/// Build the envisionment of `model` reachable from `initial`.
pub fn run_envisionment<M: QualitativeModel>(
    model: &M,
    initial: M::State,
    opts: &SearchOptions,
) -> EnvisionResult<Envisionment<M::State>> {
    if opts.max_states == 0 {
        return Err(EnvisionError::InvalidArg {
            what: "max_states must be positive",
        });
    }
    // The seed is taken as given; only successors are screened.
    if !model.is_admissible(&initial) {
        warn!(initial = %initial, "initial state breaks a model constraint");
    }

    info!(order = ?opts.order, max_states = opts.max_states, initial = %initial, "envisionment starting");

    let mut builder = GraphBuilder::new();
    let mut stats = SearchStats::default();

    let seed = builder.add_state(initial, INITIAL_DESCRIPTION);
    let mut frontier: VecDeque<StateId> = VecDeque::from([seed]);

    while let Some(current) = pop(&mut frontier, opts.order) {
        let state = builder
            .state(current)
            .cloned()
            .ok_or(GraphError::IdNotFound { what: "StateId" })?;
        stats.expanded += 1;

        for Candidate {
            state: next,
            justification,
            kind,
        } in model.candidates(&state)
        {
            stats.generated += 1;

            if !model.is_admissible(&next) {
                stats.rejected += 1;
                trace!(from = %current, candidate = %next, rule = %justification, "candidate rejected");
                continue;
            }

            let target = match builder.find(&next) {
                Some(existing) if existing == current => {
                    stats.self_loops += 1;
                    trace!(state = %current, rule = %justification, "self-loop ignored");
                    continue;
                }
                Some(existing) => {
                    stats.merged += 1;
                    trace!(from = %current, to = %existing, rule = %justification, "merged into retained state");
                    existing
                }
                None => {
                    if builder.state_count() >= opts.max_states {
                        return Err(EnvisionError::StateLimit {
                            limit: opts.max_states,
                        });
                    }
                    debug!(from = %current, state = %next, rule = %justification, "state retained");
                    let id = builder.add_state(next, justification.clone());
                    frontier.push_back(id);
                    id
                }
            };

            builder.add_transition(current, target, justification, kind);
        }
    }

    let graph = builder.build()?;
    info!(
        states = graph.states().len(),
        transitions = graph.transitions().len(),
        terminal = graph.terminal_states().count(),
        rejected = stats.rejected,
        "envisionment complete"
    );

    Ok(Envisionment { graph, stats })
}

fn pop(frontier: &mut VecDeque<StateId>, order: ExpansionOrder) -> Option<StateId> {
    match order {
        ExpansionOrder::BreadthFirst => frontier.pop_front(),
        ExpansionOrder::DepthFirst => frontier.pop_back(),
    }
}
