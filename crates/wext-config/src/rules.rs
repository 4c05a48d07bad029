//! Transform pipeline assembly.
//!
//! Rules tell the bundling engine how to turn one file kind into
//! build-ready form. Two are always emitted: script-family downleveling
//! parameterized by vendor and mode, and the template-component loader.
//! Both exclude the external dependency directory. The rules target
//! disjoint extensions, so their relative order carries no meaning.

use serde::{Deserialize, Serialize};
use wext_vendor::Vendor;

use crate::request::Mode;

/// Directory of third-party dependencies, excluded from every rule.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// A pattern-matched instruction for converting one file kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRule {
    /// File extensions the rule applies to
    pub test: Vec<String>,

    /// Path fragment excluded from matching
    pub exclude: String,

    /// The transform to apply
    #[serde(flatten)]
    pub kind: TransformKind,
}

/// The transform applied by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transform", rename_all = "kebab-case")]
pub enum TransformKind {
    /// Syntax downleveling for script files, targeted at the vendor runtime
    Downlevel(DownlevelOptions),
    /// Dedicated loader for single-file template components
    TemplateComponent,
}

/// Parameters of the downlevel transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownlevelOptions {
    /// Vendor runtime the output must run on
    pub vendor: Vendor,

    /// Minimum runtime version; `None` means the vendor's default support
    /// matrix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_version: Option<String>,

    /// Build mode, forwarded so the transform can pick dev-friendly output
    pub mode: Mode,

    /// Let the transform reuse its on-disk cache between runs
    pub cache: bool,
}

/// Build the ordered transform rule list for one synthesis.
pub fn build_rules(vendor: Vendor, vendor_version: Option<String>, mode: Mode) -> Vec<TransformRule> {
    vec![
        TransformRule {
            test: vec!["js".to_string(), "jsx".to_string(), "mjs".to_string()],
            exclude: DEPENDENCY_DIR.to_string(),
            kind: TransformKind::Downlevel(DownlevelOptions {
                vendor,
                vendor_version,
                mode,
                cache: true,
            }),
        },
        TransformRule {
            test: vec!["vue".to_string()],
            exclude: DEPENDENCY_DIR.to_string(),
            kind: TransformKind::TemplateComponent,
        },
    ]
}
