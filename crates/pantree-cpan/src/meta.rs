//! The subset of a CPAN `META.json` file that resolution reads.

use std::collections::{BTreeMap, BTreeSet};

use serde::de::IgnoredAny;
use serde::Deserialize;

/// A distribution's `META.json`, reduced to `prereqs.runtime.requires`.
///
/// Requirement values are version constraints that resolution never
/// interprets, and upstream files type them inconsistently (strings,
/// integers, floats), so they are discarded at decode time.
#[derive(Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    prereqs: Prereqs,
}

#[derive(Debug, Default, Deserialize)]
struct Prereqs {
    #[serde(default)]
    runtime: Runtime,
}

#[derive(Debug, Default, Deserialize)]
struct Runtime {
    #[serde(default)]
    requires: BTreeMap<String, IgnoredAny>,
}

impl Meta {
    /// The declared runtime requirements, names only, in ascending order.
    pub fn runtime_requires(self) -> BTreeSet<String> {
        self.prereqs.runtime.requires.into_keys().collect()
    }
}
