//! Graph building for method dependencies
//!
//! This module builds the dependency graph the leveled sorter consumes, and
//! the inverted index used to attribute missing dependencies to the methods
//! that declared them.
//!
//! ## Graph Structure
//!
//! The dependency graph is represented as a map from method names to their
//! list of dependencies:
//!
//! ```text
//! HashMap<String, Vec<String>>
//!    ↓              ↓
//!  method_name   [dep1, dep2, dep3]
//! ```
//!
//! No validation happens here: a dependency name that matches no method in
//! the set is passed through unchanged, and detecting it is the resolver's
//! job. Map iteration order carries no meaning; ordering is recovered later
//! via level assignment plus a stable sort over the input.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::method::Method;

/// Dependency graph: method name mapped to its declared dependency names
pub type DependencyGraph = HashMap<String, Vec<String>>;

/// Build a dependency graph (adjacency list) from a method set
///
/// Each method's name maps to its `depends` list; methods without
/// dependencies get an empty list.
///
/// # Example
///
/// ```text
/// Input methods:
///   - regress (depends on: array-ops, sparse)
///   - array-ops (no deps)
///
/// Output:
///   "regress" → ["array-ops", "sparse"]
///   "array-ops" → []
/// ```
pub fn build_dependency_graph(methods: &[Method]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for method in methods {
        graph.insert(method.name.clone(), method.depends.clone());
    }
    graph
}

/// Invert a dependency graph into dependency name → requiring methods
///
/// The result answers "who asked for this name": for every name appearing in
/// some dependency list, the set of method names whose list contains it.
/// BTree containers keep diagnostics built from this index sorted.
pub fn invert_dependencies(graph: &DependencyGraph) -> BTreeMap<String, BTreeSet<String>> {
    let mut inverted: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (name, deps) in graph {
        for dep in deps {
            inverted.entry(dep.clone()).or_default().insert(name.clone());
        }
    }
    inverted
}
