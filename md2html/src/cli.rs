//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Convert a Markdown post into a standalone HTML page."
)]
pub struct Cli {
    /// The Markdown file to convert.
    #[arg(value_name = "INPUT_MD")]
    pub input: PathBuf,

    /// The HTML file to write. Overwritten if it exists.
    #[arg(value_name = "OUTPUT_HTML")]
    pub output: PathBuf,
}
