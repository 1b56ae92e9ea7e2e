//! Reachability-based cohesion (Aman et al.): OCC and PCC
//!
//! Both report the largest fraction of the other methods a single method can
//! reach, `max_i |R(i)| / (k - 1)`; they differ in how methods are linked.

use petgraph::graph::{DiGraph, Graph, NodeIndex, UnGraph};
use petgraph::visit::Dfs;
use petgraph::EdgeType;

use crate::metrics::ClassView;

fn max_reach_ratio<Ty: EdgeType>(graph: &Graph<(), (), Ty>) -> f64 {
    let k = graph.node_count();
    match k {
        0 => return 0.0,
        1 => return 1.0,
        _ => {}
    }
    let widest = graph
        .node_indices()
        .map(|start| {
            let mut dfs = Dfs::new(graph, start);
            let mut visited = 0usize;
            while dfs.next(graph).is_some() {
                visited += 1;
            }
            // the start node itself is not "reached"
            visited - 1
        })
        .max()
        .unwrap_or(0);
    widest as f64 / (k - 1) as f64
}

/// Optimistic class cohesion: methods linked when they share an attribute
pub(crate) fn occ(view: &ClassView<'_>) -> f64 {
    let mut graph = UnGraph::with_capacity(view.method_count(), 0);
    let nodes: Vec<NodeIndex> = (0..view.method_count())
        .map(|_| graph.add_node(()))
        .collect();
    for (i, j) in view.pairs() {
        if view.shares_attribute(i, j) {
            graph.add_edge(nodes[i], nodes[j], ());
        }
    }
    max_reach_ratio(&graph)
}

/// Pessimistic class cohesion: a directed link `i → j` when `i` writes an
/// attribute that `j` reads.
pub(crate) fn pcc(view: &ClassView<'_>) -> f64 {
    let k = view.method_count();
    let mut graph = DiGraph::with_capacity(k, 0);
    let nodes: Vec<NodeIndex> = (0..k).map(|_| graph.add_node(())).collect();
    for i in 0..k {
        for j in (0..k).filter(|&j| j != i) {
            if !view.writes[i].is_disjoint(&view.reads[j]) {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }
    }
    max_reach_ratio(&graph)
}
