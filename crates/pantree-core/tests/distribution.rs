use std::sync::Arc;

use pantree_core::distribution::{Distribution, Forest};

fn leaf(name: &str) -> Arc<Distribution> {
    Arc::new(Distribution::new(name))
}

#[test]
fn dependencies_insert_in_ascending_name_order() {
    let mut dist = Distribution::new("Specio");
    dist.add_dependencies([leaf("Try-Tiny"), leaf("Devel-StackTrace"), leaf("Eval-Closure")]);

    let names: Vec<&str> = dist.dependencies().iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["Devel-StackTrace", "Eval-Closure", "Try-Tiny"]);
}

#[test]
fn insert_past_the_end_appends() {
    let mut dist = Distribution::new("parent");
    dist.add_dependencies([leaf("aaa")]);
    dist.add_dependencies([leaf("zzz")]);

    let names: Vec<&str> = dist.dependencies().iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["aaa", "zzz"]);
}

#[test]
fn duplicate_name_keeps_first_instance() {
    let first = leaf("Try-Tiny");
    let second = leaf("Try-Tiny");

    let mut dist = Distribution::new("Specio");
    dist.add_dependencies([Arc::clone(&first)]);
    dist.add_dependencies([Arc::clone(&second)]);

    assert_eq!(dist.dependencies().len(), 1);
    assert!(Arc::ptr_eq(&dist.dependencies()[0], &first));
}

#[test]
fn subtree_shared_between_parents_is_the_same_node() {
    let shared = leaf("Carp");

    let mut a = Distribution::new("a");
    a.add_dependencies([Arc::clone(&shared)]);
    let mut b = Distribution::new("b");
    b.add_dependencies([Arc::clone(&shared)]);

    assert!(Arc::ptr_eq(&a.dependencies()[0], &b.dependencies()[0]));
}

#[test]
fn leaf_has_no_dependencies() {
    let dist = Distribution::new("Try-Tiny");
    assert!(dist.is_leaf());
    assert!(dist.dependencies().is_empty());
}

#[test]
fn forest_preserves_root_order() {
    let forest = Forest::from_roots(vec![leaf("b"), leaf("a"), leaf("b")]);

    let names: Vec<&str> = forest.roots().iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["b", "a", "b"]);
    assert_eq!(forest.len(), 3);
    assert!(!forest.is_empty());
}
