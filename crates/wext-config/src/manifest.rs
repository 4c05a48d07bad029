//! The manifest compiler seam.
//!
//! The manifest document transformer is an external collaborator: a pure
//! function from raw manifest text plus build context to the final,
//! vendor-conditioned manifest text. Synthesis only assembles the context
//! and wires it into the copy step; the bundling engine supplies the
//! implementation of [`ManifestCompiler`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wext_vendor::Vendor;

use crate::metadata::ExtensionMetadata;

/// Context handed to the manifest compiler, verbatim from the request and
/// the extension metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestContext {
    pub vendor: Vendor,
    pub auto_reload: bool,
    pub name: String,
    pub version: String,
    pub description: String,
}

impl ManifestContext {
    pub fn new(vendor: Vendor, auto_reload: bool, metadata: &ExtensionMetadata) -> Self {
        Self {
            vendor,
            auto_reload,
            name: metadata.name.clone(),
            version: metadata.version.clone(),
            description: metadata.description.clone(),
        }
    }
}

/// Error surface of a manifest compiler implementation.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("manifest compile failed: {0}")]
    Compile(String),
}

/// Transforms raw manifest text into its final vendor-conditioned form.
///
/// Implementations must be pure and side-effect-free; the same input text
/// and context always produce the same output.
pub trait ManifestCompiler {
    fn compile(&self, raw: &str, ctx: &ManifestContext) -> Result<String, ManifestError>;
}
