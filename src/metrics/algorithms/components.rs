//! Connectivity-based metrics over the method graph (LCOM4, LCC, CCM)

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;

use crate::metrics::ClassView;

/// Undirected graph of methods, linked by shared attributes or by calls in
/// either direction.
fn method_graph(view: &ClassView<'_>) -> UnGraph<(), ()> {
    let mut graph = UnGraph::with_capacity(view.method_count(), 0);
    let nodes: Vec<NodeIndex> = (0..view.method_count())
        .map(|_| graph.add_node(()))
        .collect();
    for (i, j) in view.pairs() {
        if view.shares_attribute(i, j) || view.call_linked(i, j) {
            graph.add_edge(nodes[i], nodes[j], ());
        }
    }
    graph
}

/// Hitz & Montazeri: connected components of methods linked by shared
/// attributes or calls
pub(crate) fn lcom4(view: &ClassView<'_>) -> f64 {
    connected_components(&method_graph(view)) as f64
}

/// Loose class cohesion: share of method pairs connected directly or
/// through a chain of direct connections.
///
/// Two methods are directly connected when the attributes they reach, counting
/// everything used by methods they transitively call, intersect.
pub(crate) fn lcc(view: &ClassView<'_>) -> f64 {
    match view.method_count() {
        0 => return 0.0,
        1 => return 1.0,
        _ => {}
    }
    let reach = view.transitive_uses();
    let mut sets = UnionFind::<usize>::new(view.method_count());
    for (i, j) in view.pairs() {
        if !reach[i].is_disjoint(&reach[j]) {
            sets.union(i, j);
        }
    }
    let connected = view
        .pairs()
        .filter(|&(i, j)| sets.find(i) == sets.find(j))
        .count();
    connected as f64 / view.pair_count()
}

/// Washizaki: `NC / (NMP · NCC)`, edges over the maximum possible, divided by
/// the number of connected components.
pub(crate) fn ccm(view: &ClassView<'_>) -> f64 {
    match view.method_count() {
        0 => return 0.0,
        1 => return 1.0,
        _ => {}
    }
    let graph = method_graph(view);
    let components = connected_components(&graph) as f64;
    graph.edge_count() as f64 / (view.pair_count() * components)
}
