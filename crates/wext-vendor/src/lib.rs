//! Browser vendor registry for the wext build toolbox.
//!
//! Every build targets exactly one vendor. The registry is a closed
//! enumeration; anything outside it is rejected before path resolution or
//! metadata reading happens. Vendor quirks (auto-reload support, the
//! polyfill binding, packaging file extensions) live here as capability
//! lookups so the rest of the toolbox never matches on vendor names
//! directly.

mod vendor;

pub use vendor::{UnknownVendor, Vendor};
