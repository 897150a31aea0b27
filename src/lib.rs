//! Ordain - installation-order resolution for method bundles
//!
//! Takes a set of named methods (installable units, e.g. database extension
//! modules) that declare dependencies on one another and produces an order in
//! which every method appears after everything it depends on. Circular
//! dependencies and references to methods that do not exist in the set are
//! reported as typed errors with enough context for an operator to act on.
//!
//! The crate performs no I/O: callers load method records from wherever they
//! live (the [`Method`] type derives serde traits for that purpose), hand them
//! to [`resolve`] or [`resolve_order`], and consume either the reordered list
//! or the diagnostic error.
//!
//! ```
//! use ordain::{Method, resolve};
//!
//! let methods = vec![
//!     Method::with_depends("regress", ["array-ops"]),
//!     Method::new("array-ops"),
//! ];
//!
//! let order = resolve(methods)?;
//! assert_eq!(order[0].name, "array-ops");
//! assert_eq!(order[1].name, "regress");
//! # Ok::<(), ordain::OrdainError>(())
//! ```

pub mod error;
pub mod method;
pub mod resolver;

pub use error::{OrdainError, Result};
pub use method::Method;
pub use resolver::{ResolveOptions, resolve, resolve_order};
