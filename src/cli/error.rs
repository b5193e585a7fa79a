//! Error type for the `courier` command.

use std::path::PathBuf;

use thiserror::Error;

use crate::input::InputError;
use crate::pricing::OfferError;
use crate::scheduling::SchedulingError;

/// Errors emitted by the `courier` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The `--log-level` filter could not be parsed.
    #[error("invalid log filter {filter:?}: {source}")]
    LogFilter {
        /// The rejected filter text.
        filter: String,
        /// Parser diagnostic.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// Reading the input file failed.
    #[error("failed to read input {path:?}: {source}")]
    ReadInput {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The input text failed parsing or validation.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Loading the offer table failed.
    #[error(transparent)]
    Offers(#[from] OfferError),
    /// The scheduler could not arrange every package.
    #[error("scheduling failed: {0}")]
    Scheduling(#[from] SchedulingError),
    /// Serializing the JSON report failed.
    #[error("failed to serialize report: {0}")]
    SerializeReport(#[source] serde_json::Error),
}
