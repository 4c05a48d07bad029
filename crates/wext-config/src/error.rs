//! Error types for configuration synthesis.
//!
//! All synthesis-time failures are fatal: no partial configuration is ever
//! returned. Step execution failures (compile errors, packaging I/O, case
//! mismatches) belong to the external bundling engine and are deliberately
//! absent here.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SynthError>;

#[derive(Debug, Error)]
pub enum SynthError {
    /// Vendor identifier is not in the registry. Raised before any path
    /// resolution or file-system access.
    #[error("unknown vendor '{vendor}'\n\nHint: {hint}")]
    InvalidVendor {
        /// The identifier that failed validation
        vendor: String,
        /// Lists the registered vendors
        hint: String,
    },

    /// Source tree is missing its metadata file, or the file is not
    /// parseable structured data.
    #[error("cannot read extension metadata from {}\n\nHint: {hint}", .path.display())]
    MetadataUnreadable {
        /// The manifest path that was probed
        path: PathBuf,
        /// What went wrong and how to fix it
        hint: String,
    },

    /// Path template substitution or resolution failure. A configuration
    /// error, never retried.
    #[error("path template error: {message}")]
    PathTemplate { message: String },
}
