//! Error types emitted by the PapssImmo CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use papss_core::{CriterionParseError, ProfileError, WeightError};
use thiserror::Error;

/// Errors emitted by the PapssImmo CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The merged profile options were rejected.
    #[error("invalid buyer profile: {0}")]
    InvalidProfile(#[from] ProfileError),
    /// A weight option was rejected.
    #[error("invalid weights: {0}")]
    InvalidWeight(#[from] WeightError),
    /// A `--weight` pair named an unknown criterion.
    #[error("invalid --weight option: {0}")]
    UnknownCriterion(#[from] CriterionParseError),
    /// A `--weight` pair was not of the form `criterion=value`.
    #[error("invalid --weight option '{pair}': expected criterion=value")]
    InvalidWeightPair {
        /// Pair as supplied.
        pair: String,
    },
    /// `--limit` was zero.
    #[error("--limit must be at least 1")]
    InvalidLimit,
    /// The output file or its parent directories could not be created.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// Serializing a JSON report failed.
    #[error("failed to serialize recommendations: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing CSV rows failed.
    #[error("failed to write CSV export: {0}")]
    WriteCsv(#[source] csv::Error),
    /// Writing the report failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
