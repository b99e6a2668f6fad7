//! Read access to an on-disk CPAN metadata directory.

use std::collections::{BTreeSet, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pantree_util::errors::{PantreeError, PantreeResult};
use pantree_util::json::decode_from_file;

use crate::meta::Meta;

/// Map from module name to the distribution providing it.
pub const DISTRO_MAP_FILE: &str = "module-distro-map.json";

/// Sorted array of module names bundled with the runtime.
pub const CORE_MODULES_FILE: &str = "core-modules.json";

/// Per-distribution metadata file, at `<root>/<distribution>/META.json`.
pub const META_JSON_FILE: &str = "META.json";

/// Read-only source of the three facts resolution needs.
///
/// One instance serves a whole resolver session. Implementations must be
/// safe to share across resolution workers; nothing here mutates after
/// construction.
pub trait MetadataRepository {
    /// The distribution that provides `module`.
    ///
    /// Fails with [`PantreeError::ModuleNotFound`] when the module has no
    /// entry in the map.
    fn lookup_distribution(&self, module: &str) -> PantreeResult<String>;

    /// Module names bundled with the runtime, in ascending order.
    fn core_modules(&self) -> &[String];

    /// Modules a distribution declares as runtime requirements.
    ///
    /// Fails with [`PantreeError::DistributionNotFound`] when the
    /// distribution has no metadata at all, as opposed to metadata that
    /// exists but cannot be read or parsed.
    fn required_modules(&self, distribution: &str) -> PantreeResult<BTreeSet<String>>;
}

/// Metadata repository backed by a local directory.
///
/// Expected layout under the root:
/// - `module-distro-map.json`
/// - `core-modules.json`
/// - `<distribution>/META.json`, one directory per distribution
#[derive(Debug)]
pub struct CpanRepository {
    root: PathBuf,
    distribution_map: HashMap<String, String>,
    core_modules: Vec<String>,
}

impl CpanRepository {
    /// Open a repository rooted at `root`, eagerly loading the module map
    /// and the core module list. Fails if either file is missing or
    /// malformed; `META.json` files are read lazily per distribution.
    pub fn open(root: impl Into<PathBuf>) -> PantreeResult<Self> {
        let root = root.into();

        let distribution_map: HashMap<String, String> =
            decode_from_file(&root.join(DISTRO_MAP_FILE))?;

        let mut core_modules: Vec<String> = decode_from_file(&root.join(CORE_MODULES_FILE))?;
        // Lookups binary-search this list, so it must be sorted even if
        // the file was not.
        core_modules.sort_unstable();

        tracing::debug!(
            "loaded {} module mappings and {} core modules from {}",
            distribution_map.len(),
            core_modules.len(),
            root.display()
        );

        Ok(Self {
            root,
            distribution_map,
            core_modules,
        })
    }

    /// The metadata directory this repository reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to a distribution's `META.json`.
    fn meta_path(&self, distribution: &str) -> PathBuf {
        self.root.join(distribution).join(META_JSON_FILE)
    }
}

impl MetadataRepository for CpanRepository {
    fn lookup_distribution(&self, module: &str) -> PantreeResult<String> {
        self.distribution_map
            .get(module)
            .cloned()
            .ok_or_else(|| PantreeError::ModuleNotFound {
                name: module.to_string(),
            })
    }

    fn core_modules(&self) -> &[String] {
        &self.core_modules
    }

    fn required_modules(&self, distribution: &str) -> PantreeResult<BTreeSet<String>> {
        let path = self.meta_path(distribution);
        let meta: Meta = match decode_from_file(&path) {
            Ok(meta) => meta,
            Err(PantreeError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                return Err(PantreeError::DistributionNotFound {
                    name: distribution.to_string(),
                })
            }
            Err(err) => return Err(err),
        };
        Ok(meta.runtime_requires())
    }
}
