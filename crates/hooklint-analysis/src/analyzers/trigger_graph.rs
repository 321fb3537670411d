// Hooklint
// Copyright (C) 2025 Hooklint Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Trigger graph construction between effect registrations
//!
//! An edge from effect A to effect B means: A's body invokes the setter
//! of some state whose value name appears in B's dependency list, so
//! running A may cause B to re-run. Name matching is substring
//! containment, not tokenized identifier matching: a state named `name`
//! also matches inside `fullName`. That imprecision is part of the
//! contract this analysis is compatible with, and must not be tightened
//! to token-boundary matching here.

use petgraph::Directed;
use petgraph::graph::{Graph, NodeIndex};
use std::collections::HashSet;

use super::extraction::{EffectToken, StateToken};

/// Node in a trigger graph
#[derive(Debug, Clone)]
pub struct EffectNode {
    /// The effect registration this node stands for
    pub effect: EffectToken,
}

/// Edge in a trigger graph. A single edge may be justified by more than
/// one shared state, so it carries no per-state payload.
#[derive(Debug, Clone)]
pub struct TriggerEdge;

/// Trigger graph type alias. Node indices are the only node identity;
/// nodes are never compared by field equality.
pub type TriggerGraph = Graph<EffectNode, TriggerEdge, Directed>;

/// Utility for building trigger graphs
pub struct GraphBuilder {
    graph: TriggerGraph,
    connected: HashSet<(NodeIndex, NodeIndex)>,
}

impl GraphBuilder {
    /// Create a new graph builder
    pub fn new() -> Self {
        Self {
            graph: TriggerGraph::new(),
            connected: HashSet::new(),
        }
    }

    /// Add a node for an effect, returns its index
    pub fn add_effect(&mut self, effect: EffectToken) -> NodeIndex {
        self.graph.add_node(EffectNode { effect })
    }

    /// Add an edge between two nodes unless that pair is already
    /// connected. Self-edges are allowed.
    pub fn connect(&mut self, from: NodeIndex, to: NodeIndex) {
        if self.connected.insert((from, to)) {
            self.graph.add_edge(from, to, TriggerEdge);
        }
    }

    /// Finalize and return the graph
    pub fn build(self) -> TriggerGraph {
        self.graph
    }
}

/// Build the trigger graph for one set of extracted tokens.
///
/// Creates one node per effect, in input order, then wires every
/// dispatching node of each state (body contains the setter name) to
/// every dependent node of that state (dependency list contains the
/// value name). Edges are deduplicated by node identity. Pure: the
/// token slices are never mutated and the returned graph is freshly
/// allocated.
pub fn build_graph(effects: &[EffectToken], states: &[StateToken]) -> TriggerGraph {
    let mut builder = GraphBuilder::new();
    let nodes: Vec<NodeIndex> = effects.iter().map(|effect| builder.add_effect(effect.clone())).collect();

    for state in states {
        let dispatching: Vec<NodeIndex> = effects
            .iter()
            .enumerate()
            .filter(|(_, effect)| effect.body.contains(&state.setter_name))
            .map(|(index, _)| nodes[index])
            .collect();

        let dependent: Vec<NodeIndex> = effects
            .iter()
            .enumerate()
            .filter(|(_, effect)| effect.dependency_list_text.contains(&state.state_name))
            .map(|(index, _)| nodes[index])
            .collect();

        for &from in &dispatching {
            for &to in &dependent {
                builder.connect(from, to);
            }
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str, setter: &str) -> StateToken {
        StateToken {
            declaration_text: format!("const [{name}, {setter}] = useState();"),
            state_name: name.to_string(),
            setter_name: setter.to_string(),
        }
    }

    fn effect(body: &str, deps: &str) -> EffectToken {
        EffectToken {
            declaration_text: format!("useEffect(() => {{ {body} }}, [{deps}]);"),
            body: body.to_string(),
            dependency_list_text: deps.to_string(),
        }
    }

    #[test]
    fn test_build_graph_empty_inputs() {
        let graph = build_graph(&[], &[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_build_graph_one_node_per_effect_in_order() {
        let effects = vec![effect("setA(1);", "b"), effect("setB(2);", "a")];
        let graph = build_graph(&effects, &[]);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        let bodies: Vec<&str> = graph.node_indices().map(|node| graph[node].effect.body.as_str()).collect();
        assert_eq!(bodies, vec!["setA(1);", "setB(2);"]);
    }

    #[test]
    fn test_build_graph_wires_dispatcher_to_dependent() {
        let states = vec![state("count", "setCount")];
        let effects = vec![effect("setCount(count + 1);", ""), effect("render();", "count")];

        let graph = build_graph(&effects, &states);
        assert_eq!(graph.edge_count(), 1);

        let nodes: Vec<NodeIndex> = graph.node_indices().collect();
        assert!(graph.contains_edge(nodes[0], nodes[1]));
    }

    #[test]
    fn test_build_graph_no_duplicate_edges_across_states() {
        // Both states connect the same pair; only one edge results.
        let states = vec![state("first", "setFirst"), state("second", "setSecond")];
        let effects = vec![effect("setFirst(1); setSecond(2);", ""), effect("use();", "first, second")];

        let graph = build_graph(&effects, &states);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_build_graph_substring_matching() {
        // A state named `name` matches inside `fullName` in a
        // dependency list. This imprecision is intentional.
        let states = vec![state("name", "setName")];
        let effects = vec![effect("setName('x');", ""), effect("use();", "fullName")];

        let graph = build_graph(&effects, &states);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_build_graph_empty_dependency_list_gets_no_incoming_edges() {
        let states = vec![state("count", "setCount")];
        let effects = vec![effect("setCount(1);", "")];

        let graph = build_graph(&effects, &states);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_build_graph_self_edge() {
        let states = vec![state("count", "setCount")];
        let effects = vec![effect("setCount(count + 1);", "count")];

        let graph = build_graph(&effects, &states);
        assert_eq!(graph.edge_count(), 1);

        let node = graph.node_indices().next().unwrap();
        assert!(graph.contains_edge(node, node));
    }

    #[test]
    fn test_build_graph_does_not_mutate_inputs() {
        let states = vec![state("count", "setCount")];
        let effects = vec![effect("setCount(1);", "count")];
        let states_before = states.clone();
        let effects_before = effects.clone();

        let _graph = build_graph(&effects, &states);
        assert_eq!(states, states_before);
        assert_eq!(effects, effects_before);
    }
}
