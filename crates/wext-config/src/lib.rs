//! Build configuration synthesis for browser extension bundling.
//!
//! Given a declarative [`BuildRequest`] (source directory, target vendor,
//! dev/production mode, packaging and auto-reload flags), this crate
//! deterministically expands it into a [`BuildConfiguration`]: compilation
//! entry points, an output layout, an ordered list of transform rules and an
//! ordered list of lifecycle steps, plus vendor-conditioned manifest
//! context. The configuration is pure data; executing it (module graph
//! resolution, transpilation, copying, minification, archiving) belongs to
//! an external bundling engine.
//!
//! Synthesis is synchronous, read-only with respect to the file system, and
//! referentially transparent: the same request against the same source tree
//! always yields an equivalent configuration.
//!
//! # Example
//!
//! ```no_run
//! use wext_config::{BuildRequest, synthesize};
//!
//! let mut request = BuildRequest::default();
//! request.vendor = "firefox".to_string();
//! request.dev = true;
//!
//! let config = synthesize(&request)?;
//! for step in &config.steps {
//!     println!("{:?}", step);
//! }
//! # Ok::<(), wext_config::SynthError>(())
//! ```

pub mod entries;
pub mod error;
pub mod manifest;
pub mod metadata;
pub mod paths;
pub mod request;
pub mod rules;
pub mod steps;
pub mod synth;

pub use entries::{AUTO_RELOAD_ENTRY, AUTO_RELOAD_SPECIFIER, EntryDiscovery, EntrySet};
pub use error::{Result, SynthError};
pub use manifest::{ManifestCompiler, ManifestContext, ManifestError};
pub use metadata::ExtensionMetadata;
pub use paths::{ResolvedPaths, VENDOR_TOKEN, resolve_template};
pub use request::{BuildRequest, Mode};
pub use rules::{DownlevelOptions, TransformKind, TransformRule, build_rules};
pub use steps::{CopySpec, EsTarget, LifecycleStep, ManifestCopy, compose_steps};
pub use synth::{BuildConfiguration, OutputSpec, synthesize};
