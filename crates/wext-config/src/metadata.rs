//! Reads static extension metadata from the source tree's manifest.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};

/// Name of the extension's declarative metadata file, expected at the root
/// of the source directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Static facts about the extension, read once per synthesis.
///
/// Values are passed through verbatim to the manifest compile context and
/// to packaging filename construction; no transformation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionMetadata {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
}

impl ExtensionMetadata {
    /// Read `name`, `version` and `description` from `<src>/manifest.json`.
    ///
    /// Fails with [`SynthError::MetadataUnreadable`] when the file is
    /// missing, is not valid JSON, or lacks the required `name`/`version`
    /// fields.
    pub fn read(src: &Path) -> Result<Self> {
        let path = src.join(MANIFEST_FILE);
        let raw = fs::read_to_string(&path).map_err(|e| SynthError::MetadataUnreadable {
            path: path.clone(),
            hint: format!("{e}. The source directory must contain a {MANIFEST_FILE} at its root"),
        })?;
        serde_json::from_str(&raw).map_err(|e| SynthError::MetadataUnreadable {
            path,
            hint: format!("{e}. Expected a JSON object with 'name' and 'version' fields"),
        })
    }
}
