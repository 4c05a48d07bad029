//! Lifecycle step composition.
//!
//! Builds the ordered list of build steps the external engine executes.
//! Order is part of the contract: later steps assume the effects of earlier
//! ones, and the engine honors list order as a dependency chain. Inclusion
//! is driven by sequential conditional appends so the ordering invariants
//! hold by construction. Composition is pure data assembly and never
//! fails; every failure condition has already been raised by vendor
//! validation or the metadata read.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wext_vendor::Vendor;

use crate::manifest::ManifestContext;
use crate::metadata::{ExtensionMetadata, MANIFEST_FILE};
use crate::paths::ResolvedPaths;
use crate::request::{BuildRequest, Mode};

/// Module the polyfill-injection step binds the `browser` global to.
pub const POLYFILL_MODULE: &str = "webextension-polyfill";

/// Directory of localized message bundles, copied verbatim.
pub const LOCALES_DIR: &str = "_locales";

/// Language level the minifier may assume in its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    Es2015,
    Es2016,
    #[default]
    Es2017,
    Es2020,
    EsNext,
}

/// One discrete, ordered action in the build pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum LifecycleStep {
    /// Clear the output directory before anything else runs
    Clean {
        path: PathBuf,
        /// The resolved output directory may sit outside the project root
        allow_external: bool,
    },

    /// Fail the build when a path is referenced with letter casing that
    /// differs from the on-disk file
    CaseGuard,

    /// Wire the engine's watch loop to entry discovery's refresh
    EntryRefresh,

    /// Request human-readable module identifiers instead of opaque ones
    DevNaming,

    /// Bind a global identifier to a compatibility shim module
    PolyfillInject { binding: String, module: String },

    /// Expose build constants to compiled code
    EnvInject {
        mode: Mode,
        vendor: Vendor,
        toolbox_version: String,
    },

    /// Copy the source tree to the output directory, compiling the manifest
    /// and copying localized messages along the way
    CopyAndManifest(CopySpec),

    /// Minify final bundle output
    Minify { parallel: bool, target: EsTarget },

    /// Write a single compressed artifact from the output directory
    Package { path: PathBuf, filename: String },
}

/// Configuration of the copy-and-manifest step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopySpec {
    /// Source tree root the copy runs relative to
    pub context: PathBuf,

    /// Glob pattern selecting files to copy
    pub from: String,

    /// Patterns excluded from the raw copy
    pub ignore: Vec<String>,

    /// Destination directory
    pub to: PathBuf,

    /// The manifest file, copied through the manifest compiler
    pub manifest: ManifestCopy,

    /// Localized message bundles, copied verbatim
    pub locales_from: String,
}

/// Manifest copy instruction: source path plus the compile context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestCopy {
    pub from: PathBuf,
    pub context: ManifestContext,
}

/// Compose the ordered lifecycle step list for one synthesis.
///
/// `src` is the absolutized source directory; `vendor` has already passed
/// registry validation.
pub fn compose_steps(
    request: &BuildRequest,
    vendor: Vendor,
    src: &Path,
    paths: &ResolvedPaths,
    metadata: &ExtensionMetadata,
) -> Vec<LifecycleStep> {
    let mode = request.mode();
    let mut steps = Vec::new();

    steps.push(LifecycleStep::Clean {
        path: paths.output_dir.clone(),
        allow_external: true,
    });

    steps.push(LifecycleStep::CaseGuard);

    steps.push(LifecycleStep::EntryRefresh);

    if mode == Mode::Development {
        steps.push(LifecycleStep::DevNaming);
    }

    if vendor.needs_polyfill() {
        steps.push(LifecycleStep::PolyfillInject {
            binding: "browser".to_string(),
            module: POLYFILL_MODULE.to_string(),
        });
    }

    steps.push(LifecycleStep::EnvInject {
        mode,
        vendor,
        toolbox_version: env!("CARGO_PKG_VERSION").to_string(),
    });

    steps.push(LifecycleStep::CopyAndManifest(CopySpec {
        context: src.to_path_buf(),
        from: "**/*".to_string(),
        ignore: request.copy_ignore.clone(),
        to: paths.output_dir.clone(),
        manifest: ManifestCopy {
            from: src.join(MANIFEST_FILE),
            context: ManifestContext::new(vendor, request.auto_reload, metadata),
        },
        locales_from: format!("{LOCALES_DIR}/**/*.json"),
    }));

    if mode == Mode::Production {
        steps.push(LifecycleStep::Minify {
            parallel: true,
            target: EsTarget::Es2017,
        });
    }

    if request.pack {
        steps.push(LifecycleStep::Package {
            path: paths.package_dir.clone(),
            filename: package_filename(metadata, vendor),
        });
    }

    steps
}

/// Artifact name for the packaged extension:
/// `<name>.v<version>.<vendor>.<ext>`.
fn package_filename(metadata: &ExtensionMetadata, vendor: Vendor) -> String {
    format!(
        "{}.v{}.{}.{}",
        metadata.name,
        metadata.version,
        vendor,
        vendor.package_extension()
    )
}
