//! Leveled topological sorting for method dependency resolution
//!
//! This module assigns every name in a dependency graph an integer level such
//! that each method sits strictly above everything it depends on. Methods at
//! level 0 depend on nothing; a method at level *k* depends only on names at
//! levels below *k*. Sorting the input by level (stably) then yields a valid
//! installation order.
//!
//! ## Algorithm
//!
//! Iterative fixed-point reduction of the graph, a layered form of Kahn's
//! algorithm:
//!
//! 1. **Candidates** for the current level are the *ready keys* (keys whose
//!    dependency list is empty) plus the *external leaves* (names referenced
//!    as a dependency but not present as a key, either already resolved or
//!    never part of the set at all).
//! 2. Candidates not yet assigned get the current level.
//! 3. Ready keys are dropped from the graph; this round's external leaves
//!    are stripped from every surviving dependency list.
//! 4. The level counter advances only after a round that assigned something.
//!
//! A non-empty graph with no candidates cannot shrink any further: every
//! surviving key participates in, or depends transitively only on, a cycle,
//! and the sorter fails with that remaining subgraph. Acyclic input drains
//! the graph in at most one round per distinct name.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{Result, circular_dependency};
use crate::resolver::graph::DependencyGraph;

/// Level per name, covering every name that appears in the graph as a key or
/// inside a dependency list
pub type LevelAssignment = HashMap<String, usize>;

/// Assign a level to every name reachable in the graph
///
/// # Errors
///
/// Returns `OrdainError::CircularDependency` with the un-reducible remaining
/// subgraph if the graph contains a cycle.
pub fn assign_levels(graph: &DependencyGraph) -> Result<LevelAssignment> {
    let mut levels = LevelAssignment::new();
    let mut remaining = graph.clone();
    let mut level = 0;

    while !remaining.is_empty() {
        let ready: HashSet<String> = remaining
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(name, _)| name.clone())
            .collect();

        let external: HashSet<String> = remaining
            .values()
            .flatten()
            .filter(|dep| !remaining.contains_key(*dep))
            .cloned()
            .collect();

        // No ready key and no external leaf means the reduction below would
        // leave the graph untouched: nothing to drop, nothing to strip. On a
        // non-empty graph that is exactly the cycle condition.
        if ready.is_empty() && external.is_empty() {
            return Err(circular_dependency(remaining.into_iter().collect()));
        }

        let mut assigned = 0;
        for name in ready.iter().chain(external.iter()) {
            if !levels.contains_key(name) {
                levels.insert(name.clone(), level);
                assigned += 1;
            }
        }

        let mut reduced = DependencyGraph::with_capacity(remaining.len());
        for (name, deps) in remaining {
            if deps.is_empty() {
                continue;
            }
            let pruned = deps
                .into_iter()
                .filter(|dep| !external.contains(dep))
                .collect();
            reduced.insert(name, pruned);
        }
        remaining = reduced;

        if assigned > 0 {
            level += 1;
        }
    }

    Ok(levels)
}

/// Group an assignment by ascending level, names sorted within each group
///
/// Rendering helper for callers that want to display the tiers of an
/// already-resolved set.
pub fn levels_by_tier(levels: &LevelAssignment) -> BTreeMap<usize, Vec<String>> {
    let mut tiers: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (name, level) in levels {
        tiers.entry(*level).or_default().push(name.clone());
    }
    for names in tiers.values_mut() {
        names.sort();
    }
    tiers
}
