//! Path templating: vendor placeholder substitution and absolutization.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use wext_vendor::Vendor;

use crate::error::{Result, SynthError};

/// Placeholder token substituted with the vendor identifier in output and
/// package directory templates.
pub const VENDOR_TOKEN: &str = "[vendor]";

/// Concrete output and package directories for one build.
///
/// Recomputed per request; two requests for two vendors never share a
/// directory as long as the templates contain [`VENDOR_TOKEN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPaths {
    pub output_dir: PathBuf,
    pub package_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve the output and package templates for a vendor.
    pub fn resolve(target: &str, package_target: &str, vendor: Vendor) -> Result<Self> {
        Ok(Self {
            output_dir: resolve_template(target, vendor)?,
            package_dir: resolve_template(package_target, vendor)?,
        })
    }
}

/// Substitute every [`VENDOR_TOKEN`] in `template` with the vendor name,
/// then resolve relative segments against the process working directory
/// into an absolute, normalized path.
///
/// Idempotent: an already-absolute path without a placeholder comes back
/// unchanged apart from normalization.
pub fn resolve_template(template: &str, vendor: Vendor) -> Result<PathBuf> {
    let substituted = template.replace(VENDOR_TOKEN, vendor.name());
    absolutize(Path::new(&substituted))
}

/// Resolve a path against the process working directory and normalize it.
pub(crate) fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.clean());
    }
    let cwd = std::env::current_dir().map_err(|e| SynthError::PathTemplate {
        message: format!("cannot determine working directory: {e}"),
    })?;
    Ok(cwd.join(path).clean())
}
