//! Error type for portal CLI interactions.

use thiserror::Error;

/// Failure talking to the portal through its companion CLI. Kept as a typed
/// enum so callers can tell "the tool is missing" apart from "the tool ran
/// and said no" before converting to anyhow.
#[derive(Debug, Error)]
pub enum PortalError {
    /// The CLI executable could not be started (missing from PATH, not executable).
    #[error("failed to run `{bin}`: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    /// The CLI ran but exited nonzero.
    #[error("`{command}` failed: {stderr}")]
    Failed { command: String, stderr: String },

    /// `apps:list` produced no JSON payload after the header line.
    #[error("empty response from apps:list")]
    EmptyListing,

    /// `apps:list` payload was not the expected JSON array.
    #[error("malformed JSON from apps:list: {0}")]
    Json(#[from] serde_json::Error),

    /// No application carries the given reference identifier.
    #[error("application with reference id '{reference_id}' not found")]
    AppNotFound { reference_id: String },
}
