//! CLI error surface.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Synthesis failed (invalid vendor, unreadable metadata, bad template)
    #[error(transparent)]
    Synth(#[from] wext_config::SynthError),

    /// Could not write the emitted plan
    #[error("failed to write plan to {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not serialize the plan
    #[error("failed to serialize plan: {0}")]
    Serialize(#[from] serde_json::Error),
}
