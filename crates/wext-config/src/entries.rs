//! Entry discovery: expands the source tree into the bundler's entry map.
//!
//! Discovery is the one re-entrant piece of synthesis. In watch mode the
//! external engine keeps the configuration alive while source files come
//! and go, so the entry map cannot be a frozen snapshot: [`EntryDiscovery`]
//! owns the expansion inputs and can re-run it on demand via
//! [`EntryDiscovery::refresh`].

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use walkdir::WalkDir;

/// Mapping from logical entry name to the source file it compiles from.
///
/// Names mirror paths relative to the source root with the `.js` extension
/// stripped (`background`, `scripts/content`), so output filenames mirror
/// source filenames. Insertion order is deterministic: root scripts sorted
/// by filename, then `scripts/` entries, then the shim.
pub type EntrySet = IndexMap<String, PathBuf>;

/// Conventional subdirectory scanned for additional entry scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// Logical name of the injected auto-reload shim entry.
pub const AUTO_RELOAD_ENTRY: &str = "wext/auto-reload";

/// Module specifier the bundling engine resolves to the toolbox's bundled
/// auto-reload client.
pub const AUTO_RELOAD_SPECIFIER: &str = "wext:auto-reload";

/// Restartable entry expansion over a live source tree.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDiscovery {
    root: PathBuf,
    inject_auto_reload: bool,
    entries: EntrySet,
}

impl EntryDiscovery {
    /// Expand the entry globs against the current source tree.
    ///
    /// `inject_auto_reload` must already account for the vendor capability;
    /// discovery itself is vendor-agnostic.
    pub fn discover(root: impl Into<PathBuf>, inject_auto_reload: bool) -> Self {
        let mut discovery = Self {
            root: root.into(),
            inject_auto_reload,
            entries: EntrySet::new(),
        };
        discovery.refresh();
        discovery
    }

    /// The entry map from the most recent expansion.
    pub fn current(&self) -> &EntrySet {
        &self.entries
    }

    /// Re-expand against the live tree. Called by the external engine's
    /// watch loop when files appear or disappear.
    pub fn refresh(&mut self) -> &EntrySet {
        self.entries = expand(&self.root, self.inject_auto_reload);
        tracing::debug!(
            root = %self.root.display(),
            count = self.entries.len(),
            "entry discovery refreshed"
        );
        &self.entries
    }

    /// Source root the globs are expanded against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn expand(root: &Path, inject_auto_reload: bool) -> EntrySet {
    let mut entries = EntrySet::new();
    collect_scripts(root, "", &mut entries);
    collect_scripts(&root.join(SCRIPTS_DIR), "scripts/", &mut entries);

    if inject_auto_reload {
        entries.insert(
            AUTO_RELOAD_ENTRY.to_string(),
            PathBuf::from(AUTO_RELOAD_SPECIFIER),
        );
    }

    entries
}

// One directory level only; nested directories other than scripts/ are not
// entry points.
fn collect_scripts(dir: &Path, prefix: &str, out: &mut EntrySet) {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "js") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            out.insert(format!("{prefix}{stem}"), path.to_path_buf());
        }
    }
}
