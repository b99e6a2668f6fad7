//! Filtering of declared requirements down to externally resolvable modules.

use std::collections::BTreeSet;

/// The requirement virtually every distribution declares on the language
/// runtime itself. Never resolved to a distribution.
pub const RUNTIME_PSEUDO_MODULE: &str = "perl";

/// Drop the runtime pseudo-module and every module bundled with the
/// runtime, leaving the modules that must resolve to external
/// distributions, in ascending name order.
///
/// `core` must be sorted ascending; membership is a binary search.
pub fn filter_core_modules(modules: &BTreeSet<String>, core: &[String]) -> Vec<String> {
    let mut result = Vec::new();
    for module in modules {
        if module == RUNTIME_PSEUDO_MODULE {
            continue;
        }
        if core.binary_search(module).is_ok() {
            continue;
        }
        result.push(module.clone());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn core(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn runtime_pseudo_module_always_dropped() {
        let modules = set(&["perl"]);
        assert!(filter_core_modules(&modules, &[]).is_empty());
    }

    #[test]
    fn core_modules_dropped() {
        let modules = set(&["Carp", "Exporter", "strict"]);
        let core = core(&["Exporter", "strict"]);
        assert_eq!(filter_core_modules(&modules, &core), vec!["Carp"]);
    }

    #[test]
    fn survivors_come_back_sorted() {
        let modules = set(&["Try::Tiny", "Carp", "perl", "Test::Fatal"]);
        assert_eq!(
            filter_core_modules(&modules, &[]),
            vec!["Carp", "Test::Fatal", "Try::Tiny"]
        );
    }

    #[test]
    fn everything_filtered_leaves_nothing() {
        let modules = set(&["perl", "strict", "warnings"]);
        let core = core(&["strict", "warnings"]);
        assert!(filter_core_modules(&modules, &core).is_empty());
    }

    #[test]
    fn near_miss_core_names_survive() {
        let modules = set(&["strictness"]);
        let core = core(&["strict"]);
        assert_eq!(filter_core_modules(&modules, &core), vec!["strictness"]);
    }
}
