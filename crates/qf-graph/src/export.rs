//! Hand-off to external renderers.
//!
//! The envisionment converts into a petgraph `DiGraph` whose node indices
//! follow state ids, with string labels on nodes and edges. DOT text is
//! produced from that digraph; drawing it is left to whatever renders DOT.

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::{EnvisionmentGraph, StateNode};

impl<S> EnvisionmentGraph<S> {
    /// Labelled digraph: node `i` is state id `i`, edges are labelled
    /// `"<kind>: <justification>"` in discovery order.
    pub fn to_digraph<F>(&self, label: F) -> DiGraph<String, String>
    where
        F: Fn(&StateNode<S>) -> String,
    {
        let mut graph = DiGraph::with_capacity(self.states.len(), self.transitions.len());
        let nodes: Vec<NodeIndex> = self
            .states
            .iter()
            .map(|node| graph.add_node(label(node)))
            .collect();

        for t in &self.transitions {
            graph.add_edge(
                nodes[t.from.slot()],
                nodes[t.to.slot()],
                format!("{}: {}", t.kind, t.justification),
            );
        }

        graph
    }

    /// DOT rendering of [`Self::to_digraph`].
    pub fn to_dot<F>(&self, label: F) -> String
    where
        F: Fn(&StateNode<S>) -> String,
    {
        let graph = self.to_digraph(label);
        format!("{}", Dot::new(&graph))
    }
}
