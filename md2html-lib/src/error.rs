//! Defines the error type shared by every conversion step.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a page cannot be produced.
pub enum ConvertError {
    #[error("Failed to read input file: {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read fragment file: {}", path.display())]
    ReadFragment {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output file: {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse Markdown: {0}")]
    MarkdownParse(String),
}
