//! Index-based view of a class, after method filtering
//!
//! Algorithms work on dense indices rather than names: method `i` is the
//! i-th admitted method, attribute `j` the j-th declared attribute.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

use super::MethodFilter;
use crate::models::ClassStructure;

/// Read-only, filtered projection of a [`ClassStructure`]
#[derive(Debug, Clone)]
pub struct ClassView<'a> {
    pub(crate) attribute_count: usize,
    pub(crate) method_names: Vec<&'a str>,
    pub(crate) reads: Vec<BTreeSet<usize>>,
    pub(crate) writes: Vec<BTreeSet<usize>>,
    pub(crate) uses: Vec<BTreeSet<usize>>,
    /// Calls between admitted methods; self calls are dropped
    pub(crate) calls: Vec<BTreeSet<usize>>,
    pub(crate) parameter_types: Vec<BTreeSet<&'a str>>,
}

impl<'a> ClassView<'a> {
    pub fn new(class: &'a ClassStructure, filter: &MethodFilter) -> Self {
        let attr_index: FxHashMap<&str, usize> = class
            .attributes()
            .iter()
            .enumerate()
            .map(|(i, a)| (a.name.as_str(), i))
            .collect();

        let admitted: Vec<_> = class.methods().iter().filter(|m| filter.admits(m)).collect();
        let method_index: FxHashMap<&str, usize> = admitted
            .iter()
            .enumerate()
            .map(|(i, m)| (m.name.as_str(), i))
            .collect();

        let resolve = |names: &BTreeSet<String>| -> BTreeSet<usize> {
            names
                .iter()
                .filter_map(|n| attr_index.get(n.as_str()).copied())
                .collect()
        };

        let reads: Vec<BTreeSet<usize>> = admitted.iter().map(|m| resolve(&m.reads)).collect();
        let writes: Vec<BTreeSet<usize>> = admitted.iter().map(|m| resolve(&m.writes)).collect();
        let uses: Vec<BTreeSet<usize>> = reads
            .iter()
            .zip(&writes)
            .map(|(r, w)| r.union(w).copied().collect())
            .collect();
        let calls: Vec<BTreeSet<usize>> = admitted
            .iter()
            .enumerate()
            .map(|(i, m)| {
                m.calls
                    .iter()
                    .filter_map(|c| method_index.get(c.as_str()).copied())
                    .filter(|&j| j != i)
                    .collect()
            })
            .collect();
        let parameter_types: Vec<BTreeSet<&str>> = admitted
            .iter()
            .map(|m| m.parameter_types.iter().map(String::as_str).collect())
            .collect();

        Self {
            attribute_count: class.attributes().len(),
            method_names: admitted.iter().map(|m| m.name.as_str()).collect(),
            reads,
            writes,
            uses,
            calls,
            parameter_types,
        }
    }

    pub fn method_count(&self) -> usize {
        self.method_names.len()
    }

    pub fn attribute_count(&self) -> usize {
        self.attribute_count
    }

    pub fn method_names(&self) -> &[&'a str] {
        &self.method_names
    }

    /// All unordered method pairs `(i, j)` with `i < j`
    pub(crate) fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let k = self.method_count();
        (0..k).flat_map(move |i| (i + 1..k).map(move |j| (i, j)))
    }

    /// Number of unordered method pairs, `k(k-1)/2`
    pub(crate) fn pair_count(&self) -> f64 {
        let k = self.method_count() as f64;
        k * (k - 1.0) / 2.0
    }

    pub(crate) fn shares_attribute(&self, i: usize, j: usize) -> bool {
        !self.uses[i].is_disjoint(&self.uses[j])
    }

    /// Either method calls the other
    pub(crate) fn call_linked(&self, i: usize, j: usize) -> bool {
        self.calls[i].contains(&j) || self.calls[j].contains(&i)
    }

    /// Number of admitted methods using each attribute (`a_j`)
    pub(crate) fn attribute_users(&self) -> Vec<usize> {
        let mut users = vec![0; self.attribute_count];
        for used in &self.uses {
            for &j in used {
                users[j] += 1;
            }
        }
        users
    }

    /// Total method → attribute usages, `Σ_j a_j`
    pub(crate) fn total_usages(&self) -> usize {
        self.uses.iter().map(BTreeSet::len).sum()
    }

    /// Directed call graph; node `i` is method `i`
    pub(crate) fn call_graph(&self) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(self.method_count(), 0);
        let nodes: Vec<NodeIndex> = (0..self.method_count())
            .map(|_| graph.add_node(()))
            .collect();
        for (caller, callees) in self.calls.iter().enumerate() {
            for &callee in callees {
                graph.add_edge(nodes[caller], nodes[callee], ());
            }
        }
        graph
    }

    /// Attributes each method reaches directly or through any chain of calls
    pub(crate) fn transitive_uses(&self) -> Vec<BTreeSet<usize>> {
        let graph = self.call_graph();
        graph
            .node_indices()
            .map(|start| {
                let mut dfs = Dfs::new(&graph, start);
                let mut reached = BTreeSet::new();
                while let Some(method) = dfs.next(&graph) {
                    reached.extend(self.uses[method.index()].iter().copied());
                }
                reached
            })
            .collect()
    }
}
