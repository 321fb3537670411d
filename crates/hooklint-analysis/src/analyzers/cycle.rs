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

//! Cycle detection over trigger graphs
//!
//! Kahn's topological-ordering algorithm repurposed as a cycle test: if
//! draining zero-in-degree nodes cannot visit every node, the leftover
//! nodes all sit on at least one directed cycle.

use petgraph::Direction;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, VecDeque};

use super::trigger_graph::TriggerGraph;

/// Report whether the trigger graph contains a directed cycle.
///
/// In-degrees are recomputed into a call-local map on every invocation,
/// so the graph itself is never mutated and the function can be called
/// any number of times on the same graph. The queue drains front-first
/// in insertion order; drain order never changes the boolean result.
/// An empty graph is vacuously acyclic. A node with a self-edge is
/// always flagged: its in-degree cannot independently reach zero.
pub fn has_cycle(graph: &TriggerGraph) -> bool {
    let mut in_degrees: HashMap<NodeIndex, usize> = graph
        .node_indices()
        .map(|node| (node, graph.edges_directed(node, Direction::Incoming).count()))
        .collect();

    let mut queue: VecDeque<NodeIndex> = graph
        .node_indices()
        .filter(|node| in_degrees[node] == 0)
        .collect();

    let mut visited_count = 0usize;
    while let Some(node) = queue.pop_front() {
        visited_count += 1;

        for target in graph.neighbors_directed(node, Direction::Outgoing) {
            if let Some(degree) = in_degrees.get_mut(&target) {
                *degree = degree.saturating_sub(1);
                if *degree == 0 {
                    queue.push_back(target);
                }
            }
        }
    }

    visited_count != graph.node_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::extraction::EffectToken;
    use crate::analyzers::trigger_graph::GraphBuilder;

    fn effect(label: &str) -> EffectToken {
        EffectToken {
            declaration_text: format!("useEffect(() => {{ {label} }}, []);"),
            body: label.to_string(),
            dependency_list_text: String::new(),
        }
    }

    #[test]
    fn test_empty_graph_has_no_cycle() {
        let graph = GraphBuilder::new().build();
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_single_node_has_no_cycle() {
        let mut builder = GraphBuilder::new();
        builder.add_effect(effect("a"));
        assert!(!has_cycle(&builder.build()));
    }

    #[test]
    fn test_two_node_cycle() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_effect(effect("a"));
        let b = builder.add_effect(effect("b"));
        builder.connect(a, b);
        builder.connect(b, a);

        assert!(has_cycle(&builder.build()));
    }

    #[test]
    fn test_two_node_chain_has_no_cycle() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_effect(effect("a"));
        let b = builder.add_effect(effect("b"));
        builder.connect(a, b);

        assert!(!has_cycle(&builder.build()));
    }

    #[test]
    fn test_self_edge_is_a_cycle() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_effect(effect("a"));
        builder.connect(a, a);

        assert!(has_cycle(&builder.build()));
    }

    #[test]
    fn test_cycle_with_attached_tail() {
        // c -> a -> b -> a: the tail node drains but the cycle remains.
        let mut builder = GraphBuilder::new();
        let a = builder.add_effect(effect("a"));
        let b = builder.add_effect(effect("b"));
        let c = builder.add_effect(effect("c"));
        builder.connect(c, a);
        builder.connect(a, b);
        builder.connect(b, a);

        assert!(has_cycle(&builder.build()));
    }

    #[test]
    fn test_diamond_has_no_cycle() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_effect(effect("a"));
        let b = builder.add_effect(effect("b"));
        let c = builder.add_effect(effect("c"));
        let d = builder.add_effect(effect("d"));
        builder.connect(a, b);
        builder.connect(a, c);
        builder.connect(b, d);
        builder.connect(c, d);

        assert!(!has_cycle(&builder.build()));
    }

    #[test]
    fn test_detection_is_repeatable() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_effect(effect("a"));
        let b = builder.add_effect(effect("b"));
        builder.connect(a, b);
        builder.connect(b, a);
        let graph = builder.build();

        assert!(has_cycle(&graph));
        assert!(has_cycle(&graph));
    }
}
