//! The configuration synthesizer.
//!
//! Orchestrates validation, path resolution, metadata reading, entry
//! discovery, rule assembly and step composition in that order, and
//! assembles the finished [`BuildConfiguration`]. Fails fast: vendor
//! validation and the metadata read abort the whole synthesis, and no
//! partial configuration is ever returned.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use wext_vendor::Vendor;

use crate::entries::{EntryDiscovery, EntrySet};
use crate::error::{Result, SynthError};
use crate::metadata::ExtensionMetadata;
use crate::paths::{ResolvedPaths, absolutize};
use crate::request::{BuildRequest, Mode};
use crate::rules::{TransformRule, build_rules};
use crate::steps::{LifecycleStep, compose_steps};

/// Output layout handed to the bundling engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    pub path: PathBuf,
    pub filename: String,
    pub chunk_filename: String,
}

impl OutputSpec {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            filename: "[name].js".to_string(),
            chunk_filename: "[id].chunk.js".to_string(),
        }
    }
}

/// The finished build plan: pure data consumed by the external bundling
/// engine, plus the entry discovery handle its watch loop re-invokes.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfiguration {
    pub mode: Mode,

    /// Directory module resolution runs relative to (parent of the source
    /// tree)
    pub context: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    /// Entry expansion state; serializes as the current entry map plus its
    /// inputs
    pub entries: EntryDiscovery,

    pub output: OutputSpec,

    pub rules: Vec<TransformRule>,

    pub steps: Vec<LifecycleStep>,
}

impl BuildConfiguration {
    /// The entry map from the most recent discovery pass.
    pub fn entry_set(&self) -> &EntrySet {
        self.entries.current()
    }
}

/// Expand a [`BuildRequest`] into a complete [`BuildConfiguration`].
///
/// Read-only with respect to the file system; all mutation happens later,
/// when the external engine executes the returned plan. Deterministic for
/// a stable source tree.
pub fn synthesize(request: &BuildRequest) -> Result<BuildConfiguration> {
    let vendor = Vendor::from_str(&request.vendor).map_err(|_| SynthError::InvalidVendor {
        vendor: request.vendor.clone(),
        hint: format!("registered vendors are: {}", Vendor::registry_names()),
    })?;
    let mode = request.mode();
    tracing::debug!(%vendor, mode = mode.as_str(), "synthesizing build configuration");

    let paths = ResolvedPaths::resolve(&request.target, &request.package_target, vendor)?;
    let src = absolutize(Path::new(&request.src))?;

    let metadata = ExtensionMetadata::read(&src)?;
    tracing::debug!(name = %metadata.name, version = %metadata.version, "read extension metadata");

    let discovery = EntryDiscovery::discover(
        &src,
        request.auto_reload && vendor.auto_reload_capable(),
    );
    tracing::debug!(entries = discovery.current().len(), "initial entry discovery");

    let rules = build_rules(vendor, request.vendor_version.clone(), mode);
    let steps = compose_steps(request, vendor, &src, &paths, &metadata);

    tracing::info!(
        %vendor,
        mode = mode.as_str(),
        output = %paths.output_dir.display(),
        steps = steps.len(),
        "build configuration synthesized"
    );

    Ok(BuildConfiguration {
        mode,
        context: context_dir(&src),
        devtool: request.devtool.clone(),
        entries: discovery,
        output: OutputSpec::new(paths.output_dir),
        rules,
        steps,
    })
}

// Module resolution context is the parent of the source tree, so imports
// from the dependency directory next to it resolve.
fn context_dir(src: &Path) -> PathBuf {
    src.parent().map_or_else(|| src.to_path_buf(), Path::to_path_buf)
}
