//! Installation-order resolution tests
//!
//! End-to-end tests for ordering guarantees, stability, cycle detection,
//! missing-dependency attribution, and the external-leaf policy.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;

use ordain::{Method, OrdainError, ResolveOptions, resolve, resolve_order};

fn names(methods: &[Method]) -> Vec<&str> {
    methods.iter().map(|m| m.name.as_str()).collect()
}

fn position(methods: &[Method], name: &str) -> usize {
    methods
        .iter()
        .position(|m| m.name == name)
        .unwrap_or_else(|| panic!("'{name}' should be present in the order"))
}

#[test]
fn test_dependency_appears_before_dependent() {
    let methods = vec![
        Method::with_depends("b", ["a"]),
        Method::new("a"),
    ];

    let order = resolve(methods).expect("resolution should succeed");
    assert_eq!(names(&order), vec!["a", "b"]);
}

#[test]
fn test_empty_set_resolves_to_empty_order() {
    let order = resolve(Vec::new()).expect("empty set should resolve");
    assert!(order.is_empty());
}

#[test]
fn test_order_is_permutation_of_input() {
    let methods = vec![
        Method::with_depends("svd", ["array-ops", "sparse"]),
        Method::with_depends("sparse", ["array-ops"]),
        Method::new("array-ops"),
        Method::with_depends("regress", ["array-ops"]),
    ];
    let mut input_names: Vec<String> = methods.iter().map(|m| m.name.clone()).collect();

    let order = resolve(methods).expect("resolution should succeed");
    let mut output_names: Vec<String> = order.iter().map(|m| m.name.clone()).collect();

    input_names.sort();
    output_names.sort();
    assert_eq!(input_names, output_names);
}

#[test]
fn test_every_in_set_dependency_precedes_its_dependent() {
    let methods = vec![
        Method::with_depends("top", ["left", "right"]),
        Method::with_depends("left", ["base"]),
        Method::with_depends("right", ["base"]),
        Method::new("base"),
    ];

    let order = resolve(methods.clone()).expect("resolution should succeed");

    for method in &methods {
        for dep in &method.depends {
            assert!(
                position(&order, dep) < position(&order, &method.name),
                "'{}' should precede '{}'",
                dep,
                method.name
            );
        }
    }
}

#[test]
fn test_unrelated_methods_keep_input_order() {
    let methods = vec![
        Method::new("gamma"),
        Method::new("alpha"),
        Method::with_depends("omega", ["alpha"]),
        Method::new("beta"),
    ];

    let order = resolve(methods).expect("resolution should succeed");

    // gamma, alpha and beta share a level; their input order survives
    assert!(position(&order, "gamma") < position(&order, "alpha"));
    assert!(position(&order, "alpha") < position(&order, "beta"));
    assert!(position(&order, "alpha") < position(&order, "omega"));
}

#[test]
fn test_resolving_resolved_order_is_identity() {
    let methods = vec![
        Method::with_depends("z", ["m"]),
        Method::with_depends("m", ["a", "b"]),
        Method::with_depends("b", ["a"]),
        Method::new("a"),
    ];

    let once = resolve(methods).expect("first resolution should succeed");
    let twice = resolve(once.clone()).expect("second resolution should succeed");

    assert_eq!(names(&once), names(&twice));
    assert_eq!(once, twice);
}

#[test]
fn test_cycle_fails_and_never_produces_order() {
    let methods = vec![
        Method::with_depends("a", ["b"]),
        Method::with_depends("b", ["a"]),
    ];

    let error = resolve(methods).expect_err("cycle should fail");
    match error {
        OrdainError::CircularDependency { remaining } => {
            assert_eq!(remaining.get("a"), Some(&vec!["b".to_string()]));
            assert_eq!(remaining.get("b"), Some(&vec!["a".to_string()]));
        }
        other => panic!("expected CircularDependency, got {other:?}"),
    }
}

#[test]
fn test_missing_dependency_names_its_requirer() {
    let methods = vec![Method::with_depends("x", ["y"])];

    let error = resolve(methods).expect_err("missing dependency should fail");
    match error {
        OrdainError::MissingDependency { missing } => {
            let mut expected = BTreeMap::new();
            expected.insert("y".to_string(), vec!["x".to_string()]);
            assert_eq!(missing, expected);
        }
        other => panic!("expected MissingDependency, got {other:?}"),
    }
}

#[test]
fn test_strict_policy_reports_every_undeclared_name() {
    // "a" and "n" are referenced but never declared; under the strict
    // default both are missing, with full provenance
    let methods = vec![
        Method::with_depends("m", ["a", "b"]),
        Method::with_depends("z", ["m", "n"]),
        Method::with_depends("b", ["a"]),
    ];

    let error = resolve(methods).expect_err("undeclared names should fail");
    match error {
        OrdainError::MissingDependency { missing } => {
            let mut expected = BTreeMap::new();
            expected.insert("a".to_string(), vec!["b".to_string(), "m".to_string()]);
            expected.insert("n".to_string(), vec!["z".to_string()]);
            assert_eq!(missing, expected);
        }
        other => panic!("expected MissingDependency, got {other:?}"),
    }
}

#[test]
fn test_allow_listed_leaf_narrows_missing_to_the_rest() {
    // Same set as above, but "a" is a recognized external leaf; only "n"
    // remains missing
    let methods = vec![
        Method::with_depends("m", ["a", "b"]),
        Method::with_depends("z", ["m", "n"]),
        Method::with_depends("b", ["a"]),
    ];
    let options = ResolveOptions::new().allow_external("a");

    let error = resolve_order(methods, &options).expect_err("'n' should still be missing");
    match error {
        OrdainError::MissingDependency { missing } => {
            let mut expected = BTreeMap::new();
            expected.insert("n".to_string(), vec!["z".to_string()]);
            assert_eq!(missing, expected);
        }
        other => panic!("expected MissingDependency, got {other:?}"),
    }
}

#[test]
fn test_fully_allow_listed_set_resolves_in_order() {
    let methods = vec![
        Method::with_depends("m", ["a", "b"]),
        Method::with_depends("z", ["m", "n"]),
        Method::with_depends("b", ["a"]),
    ];
    let options = ResolveOptions::new().allow_externals(["a", "n"]);

    let order = resolve_order(methods, &options).expect("resolution should succeed");

    assert_eq!(order.len(), 3);
    assert!(position(&order, "b") < position(&order, "m"));
    assert!(position(&order, "m") < position(&order, "z"));
}

#[test]
fn test_payload_fields_pass_through_untouched() {
    let yaml = "\
- name: regress
  depends:
  - array-ops
  port: greenplum
  budget: 3
- name: array-ops
  comment: linear algebra primitives
";
    let methods: Vec<Method> = serde_yaml::from_str(yaml).expect("records should deserialize");

    let order = resolve(methods).expect("resolution should succeed");

    assert_eq!(names(&order), vec!["array-ops", "regress"]);
    assert_eq!(
        order[0].extra.get("comment"),
        Some(&serde_yaml::Value::String(
            "linear algebra primitives".to_string()
        ))
    );
    assert_eq!(
        order[1].extra.get("port"),
        Some(&serde_yaml::Value::String("greenplum".to_string()))
    );
    assert_eq!(
        order[1].extra.get("budget").and_then(serde_yaml::Value::as_i64),
        Some(3)
    );
}
