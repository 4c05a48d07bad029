use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A browser family the toolbox can build for.
///
/// The set is closed: capability lookups are total functions over it, so
/// once a request has been validated no downstream component can fail on an
/// unknown vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Chrome,
    Firefox,
    Opera,
    Edge,
}

/// Error returned when a vendor identifier is not in the registry.
#[derive(Debug, Clone, Error)]
#[error("unknown vendor '{0}'")]
pub struct UnknownVendor(pub String);

impl Vendor {
    /// Every registered vendor, in a stable order.
    pub const ALL: [Vendor; 4] = [Vendor::Chrome, Vendor::Firefox, Vendor::Opera, Vendor::Edge];

    /// The lowercase identifier used in CLI flags, path templates and
    /// manifest dialect selection.
    pub fn name(self) -> &'static str {
        match self {
            Vendor::Chrome => "chrome",
            Vendor::Firefox => "firefox",
            Vendor::Opera => "opera",
            Vendor::Edge => "edge",
        }
    }

    /// Whether the dev-mode auto-reload shim can be injected for this
    /// vendor.
    ///
    /// Only the Chromium-lineage stores (Chrome, Opera) support the reload
    /// transport the shim speaks. Kept as a capability so the boundary is
    /// explicit instead of scattered name checks.
    pub fn auto_reload_capable(self) -> bool {
        matches!(self, Vendor::Chrome | Vendor::Opera)
    }

    /// Whether compiled code needs the `browser` global bound to the
    /// WebExtension API polyfill.
    ///
    /// Firefox and Edge expose the promise-based `browser.*` namespace
    /// natively; Chrome and Opera only ship callback-style `chrome.*`.
    pub fn needs_polyfill(self) -> bool {
        matches!(self, Vendor::Chrome | Vendor::Opera)
    }

    /// File extension of the packaged artifact for this vendor.
    pub fn package_extension(self) -> &'static str {
        match self {
            Vendor::Firefox => "xpi",
            _ => "zip",
        }
    }

    /// Human-readable list of all registered vendors, for error hints and
    /// CLI help text.
    pub fn registry_names() -> String {
        Vendor::ALL
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Vendor {
    type Err = UnknownVendor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chrome" => Ok(Vendor::Chrome),
            "firefox" => Ok(Vendor::Firefox),
            "opera" => Ok(Vendor::Opera),
            "edge" => Ok(Vendor::Edge),
            other => Err(UnknownVendor(other.to_string())),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_registered_vendor() {
        for vendor in Vendor::ALL {
            assert_eq!(vendor.name().parse::<Vendor>().unwrap(), vendor);
        }
    }

    #[test]
    fn rejects_unknown_vendor() {
        let err = "netscape".parse::<Vendor>().unwrap_err();
        assert_eq!(err.0, "netscape");
        assert!(err.to_string().contains("netscape"));
    }

    #[test]
    fn rejects_uppercase_spelling() {
        assert!("Chrome".parse::<Vendor>().is_err());
    }

    #[test]
    fn auto_reload_is_a_chromium_capability() {
        assert!(Vendor::Chrome.auto_reload_capable());
        assert!(Vendor::Opera.auto_reload_capable());
        assert!(!Vendor::Firefox.auto_reload_capable());
        assert!(!Vendor::Edge.auto_reload_capable());
    }

    #[test]
    fn polyfill_tracks_callback_style_vendors() {
        assert!(Vendor::Chrome.needs_polyfill());
        assert!(Vendor::Opera.needs_polyfill());
        assert!(!Vendor::Firefox.needs_polyfill());
        assert!(!Vendor::Edge.needs_polyfill());
    }

    #[test]
    fn firefox_packages_as_xpi_everything_else_as_zip() {
        assert_eq!(Vendor::Firefox.package_extension(), "xpi");
        assert_eq!(Vendor::Chrome.package_extension(), "zip");
        assert_eq!(Vendor::Opera.package_extension(), "zip");
        assert_eq!(Vendor::Edge.package_extension(), "zip");
    }

    #[test]
    fn serde_round_trips_lowercase() {
        let json = serde_json::to_string(&Vendor::Firefox).unwrap();
        assert_eq!(json, "\"firefox\"");
        let back: Vendor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Vendor::Firefox);
    }

    #[test]
    fn registry_names_lists_all_vendors() {
        let names = Vendor::registry_names();
        for vendor in Vendor::ALL {
            assert!(names.contains(vendor.name()));
        }
    }
}
