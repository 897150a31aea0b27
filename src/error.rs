//! Error types and handling for Ordain
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Both resolution errors are terminal for the call that produced them: the
//! resolver never retries or falls back to a partial order. The maps they
//! carry use BTree containers so rendered diagnostics list names in a stable
//! order.

use std::collections::BTreeMap;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Ordain operations
#[derive(Error, Diagnostic, Debug)]
pub enum OrdainError {
    // Dependency errors
    #[error(
        "invalid cyclic dependency between methods: {}",
        format_graph(.remaining)
    )]
    #[diagnostic(
        code(ordain::deps::circular),
        help(
            "Every method listed here depends, directly or through others, on a cycle. Remove one of the dependency declarations to break the loop"
        )
    )]
    CircularDependency {
        /// The un-reducible remaining subgraph: every key participates in,
        /// or depends transitively only on, a cycle.
        remaining: BTreeMap<String, Vec<String>>,
    },

    #[error(
        "required methods missing from the method set: {}",
        format_missing(.missing)
    )]
    #[diagnostic(
        code(ordain::deps::missing),
        help(
            "Check that each dependency names a declared method, or allow it as an external leaf in ResolveOptions"
        )
    )]
    MissingDependency {
        /// Missing dependency name mapped to the methods that required it.
        missing: BTreeMap<String, Vec<String>>,
    },

    // Method record errors
    #[error("Invalid method: {message}")]
    #[diagnostic(code(ordain::method::invalid))]
    InvalidMethod { message: String },
}

/// Render a dependency subgraph as `a -> [b, c]; d -> [a]`
fn format_graph(graph: &BTreeMap<String, Vec<String>>) -> String {
    graph
        .iter()
        .map(|(name, deps)| format!("{} -> [{}]", name, deps.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Render a missing-dependency map as `n (required by z); p (required by x, y)`
fn format_missing(missing: &BTreeMap<String, Vec<String>>) -> String {
    missing
        .iter()
        .map(|(name, requirers)| format!("{} (required by {})", name, requirers.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Creates a circular dependency error from the stalled remaining subgraph
pub fn circular_dependency(remaining: BTreeMap<String, Vec<String>>) -> OrdainError {
    OrdainError::CircularDependency { remaining }
}

/// Creates a missing dependency error with provenance per missing name
pub fn missing_dependency(missing: BTreeMap<String, Vec<String>>) -> OrdainError {
    OrdainError::MissingDependency { missing }
}

/// Creates an invalid method error
pub fn invalid_method(message: impl Into<String>) -> OrdainError {
    OrdainError::InvalidMethod {
        message: message.into(),
    }
}

pub type Result<T> = miette::Result<T, OrdainError>;
