//! The caller-supplied option set and its defaults.

use serde::{Deserialize, Serialize};

/// Build mode. Controls dev-only and production-only lifecycle steps and is
/// exposed to compiled code through the environment-injection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

/// Declarative inputs for one synthesis call.
///
/// Immutable once handed to [`crate::synthesize`]. The vendor is carried as
/// a raw identifier so that registry validation is a synthesis concern: an
/// unknown vendor fails with [`crate::SynthError::InvalidVendor`] instead of
/// being silently defaulted or rejected at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    /// Source directory of the extension
    #[serde(default = "default_src")]
    pub src: String,

    /// Output directory template; `[vendor]` expands to the vendor name
    #[serde(default = "default_target")]
    pub target: String,

    /// Package directory template; `[vendor]` expands to the vendor name
    #[serde(default = "default_package_target")]
    pub package_target: String,

    /// Development mode (disables minification, enables readable module ids)
    #[serde(default)]
    pub dev: bool,

    /// Glob patterns excluded from the raw-copy step. Script and structured
    /// data files are compiled instead of copied, so they are ignored by
    /// default.
    #[serde(default = "default_copy_ignore")]
    pub copy_ignore: Vec<String>,

    /// Inject the auto-reload shim entry (honored only for vendors that
    /// support it)
    #[serde(default)]
    pub auto_reload: bool,

    /// Source-map setting passed through to the bundling engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    /// Produce a compressed distributable artifact after the build
    #[serde(default)]
    pub pack: bool,

    /// Target vendor identifier; must be a member of the vendor registry
    #[serde(default = "default_vendor")]
    pub vendor: String,

    /// Minimum vendor runtime version the downlevel transform targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_version: Option<String>,
}

impl BuildRequest {
    /// Mode implied by the `dev` flag.
    pub fn mode(&self) -> Mode {
        if self.dev { Mode::Development } else { Mode::Production }
    }
}

impl Default for BuildRequest {
    fn default() -> Self {
        Self {
            src: default_src(),
            target: default_target(),
            package_target: default_package_target(),
            dev: false,
            copy_ignore: default_copy_ignore(),
            auto_reload: false,
            devtool: None,
            pack: false,
            vendor: default_vendor(),
            vendor_version: None,
        }
    }
}

fn default_src() -> String {
    "app".to_string()
}

fn default_target() -> String {
    "build/[vendor]".to_string()
}

fn default_package_target() -> String {
    "packages".to_string()
}

fn default_copy_ignore() -> Vec<String> {
    vec!["**/*.js".to_string(), "**/*.json".to_string()]
}

fn default_vendor() -> String {
    "chrome".to_string()
}
