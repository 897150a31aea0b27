//! Dependency resolution for method bundles
//!
//! This module handles:
//! - Building dependency graphs from method records
//! - Leveled topological sorting to determine installation order
//! - Circular dependency detection
//! - Attributing missing dependencies to the methods that declared them
//!
//! Resolution is a pure in-memory computation: one call owns its transient
//! graph state exclusively, shares nothing with concurrent callers, and
//! returns either the reordered method list or a terminal error.

pub mod graph;
pub mod level;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, missing_dependency};
use crate::method::Method;
use crate::resolver::graph::{build_dependency_graph, invert_dependencies};
use crate::resolver::level::assign_levels;

/// Policy for names referenced as dependencies but not declared as methods
///
/// The sorter treats every such name as an already-satisfied leaf; whether
/// that is acceptable is a policy question, not something the resolver can
/// infer. The allow-list drawn up here is the explicit answer: names on it
/// are recognized external leaves, anything else referenced but undeclared
/// fails resolution. The default is the strict policy with an empty list.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    external_leaves: BTreeSet<String>,
}

impl ResolveOptions {
    /// Strict policy: every dependency must name a declared method
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognize `name` as an external leaf, satisfied outside the set
    #[must_use]
    pub fn allow_external(mut self, name: impl Into<String>) -> Self {
        self.external_leaves.insert(name.into());
        self
    }

    /// Recognize several external leaves at once
    #[must_use]
    pub fn allow_externals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external_leaves
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Check whether `name` is a recognized external leaf
    pub fn is_external(&self, name: &str) -> bool {
        self.external_leaves.contains(name)
    }
}

/// Resolve installation order under the strict external-leaf policy
///
/// Shorthand for [`resolve_order`] with default [`ResolveOptions`].
///
/// # Errors
///
/// Returns `OrdainError::CircularDependency` or
/// `OrdainError::MissingDependency`; see [`resolve_order`].
pub fn resolve(methods: Vec<Method>) -> Result<Vec<Method>> {
    resolve_order(methods, &ResolveOptions::default())
}

/// Resolve installation order for a method set
///
/// Returns the same methods, reordered so that every method appears after
/// all methods it depends on. Methods with no dependency relation between
/// them keep their original relative order (the sort is stable), so the
/// result is a permutation of the input and resolving it again returns it
/// unchanged. Payload fields are passed through untouched.
///
/// # Errors
///
/// - `OrdainError::CircularDependency` if some subset of methods admits no
///   linear order; carries the un-reducible subgraph.
/// - `OrdainError::MissingDependency` if a dependency names neither a
///   declared method nor an allow-listed external leaf; carries each missing
///   name with the sorted methods that required it. Surfaced before any
///   order is produced.
pub fn resolve_order(mut methods: Vec<Method>, options: &ResolveOptions) -> Result<Vec<Method>> {
    let graph = build_dependency_graph(&methods);
    let levels = assign_levels(&graph)?;

    let missing: BTreeMap<String, Vec<String>> = invert_dependencies(&graph)
        .into_iter()
        .filter(|(dep, _)| !graph.contains_key(dep) && !options.is_external(dep))
        .map(|(dep, requirers)| (dep, requirers.into_iter().collect()))
        .collect();

    if !missing.is_empty() {
        return Err(missing_dependency(missing));
    }

    // Every method name is a graph key, so the lookup cannot miss.
    methods.sort_by_key(|method| levels.get(&method.name).copied().unwrap_or_default());

    Ok(methods)
}
