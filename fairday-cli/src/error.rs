//! Error types emitted by the Fairday CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use fairday_core::{ClassifyError, PlanError};
use fairday_data::{ClassifierBuildError, DatasetError};
use thiserror::Error;

/// Errors emitted by the Fairday CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading the weather dataset failed.
    #[error("failed to load weather dataset: {0}")]
    LoadDataset(#[from] DatasetError),
    /// Constructing the HTTP weather classifier failed.
    #[error("failed to build weather classifier for {base_url:?}: {source}")]
    BuildClassifier {
        base_url: String,
        #[source]
        source: ClassifierBuildError,
    },
    /// The planner rejected the request.
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// The requested event is not registered.
    #[error("unknown event '{event}'; available events: {}", .available.join(", "))]
    UnknownEvent {
        event: String,
        available: Vec<String>,
    },
    /// Classification failed for a reason the fallback cannot cover.
    #[error("classification failed: {0}")]
    Classify(#[from] ClassifyError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
