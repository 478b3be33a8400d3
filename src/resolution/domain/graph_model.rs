use super::{DependencyMap, PackageName};
use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Directed graph of resolved packages.
///
/// Derived from a DependencyMap: one node per key and per listed dependency,
/// one edge per (key, dependency) pair. Node and edge insertion order follows
/// map iteration order, so rendering a graph built twice from the same map
/// yields identical output.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    graph: DiGraph<PackageName, ()>,
    node_indices: HashMap<PackageName, NodeIndex>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from a dependency map.
    ///
    /// Pure and total: an empty map yields an empty graph, and dependencies
    /// that were never expanded (depth-boundary cutoffs, failed lookups)
    /// still get nodes as edge targets.
    pub fn from_dependency_map(map: &DependencyMap) -> Self {
        let mut model = Self {
            graph: DiGraph::with_capacity(map.len(), map.edge_count()),
            node_indices: HashMap::with_capacity(map.len()),
        };

        for (package, dependencies) in map.iter() {
            model.add_node(package);
            for dependency in dependencies {
                model.add_node(dependency);
                model.add_edge(package, dependency);
            }
        }

        model
    }

    /// Adds a node, returning the existing index for an already-known name.
    fn add_node(&mut self, package: &PackageName) -> NodeIndex {
        if let Some(&index) = self.node_indices.get(package) {
            return index;
        }
        let index = self.graph.add_node(package.clone());
        self.node_indices.insert(package.clone(), index);
        index
    }

    fn add_edge(&mut self, from: &PackageName, to: &PackageName) {
        let from_index = self.add_node(from);
        let to_index = self.add_node(to);
        self.graph.add_edge(from_index, to_index, ());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, package: &PackageName) -> bool {
        self.node_indices.contains_key(package)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &PackageName> + '_ {
        self.graph.node_weights()
    }

    /// Edges as (source, target) pairs, in insertion order
    pub fn edges(&self) -> Vec<(&PackageName, &PackageName)> {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
            .collect()
    }

    /// Checks whether the dependency graph contains at least one cycle.
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Returns all cycles as lists of package names.
    ///
    /// A strongly connected component forms a cycle when it has more than one
    /// node, or when a single node carries a self-loop.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut cycles = Vec::new();

        for scc in tarjan_scc(&self.graph) {
            if scc.len() > 1 {
                let cycle: Vec<String> = scc
                    .iter()
                    .map(|&index| self.graph[index].as_str().to_string())
                    .collect();
                cycles.push(cycle);
            } else if scc.len() == 1 && self.graph.contains_edge(scc[0], scc[0]) {
                cycles.push(vec![self.graph[scc[0]].as_str().to_string()]);
            }
        }

        cycles
    }
}
