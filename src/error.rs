//! Error type for generating and emitting the task list.

use std::path::PathBuf;

use thiserror::Error;

/// Failures at the edges of task generation.
///
/// Building the task list itself cannot fail; these cover resolving inputs
/// and emitting the serialized document.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No release version was passed on the command line or found in the environment.
    #[error("FULL_VERSION is not set; export it or pass --release-version")]
    MissingVersion,

    /// The task list could not be serialized as YAML.
    #[error("failed to serialize task list as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The task list could not be serialized as JSON.
    #[error("failed to serialize task list as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The serialized document could not be written to the output file.
    #[error("failed to write task list to {}: {message}", .path.display())]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        message: String,
    },
}
