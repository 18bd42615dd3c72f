use crate::cli::Cli;
use clap::error::ErrorKind;
use clap::Parser;
use md2html_lib::fragments::SiteLayout;
use std::process;

const USAGE: &str = "Usage: md2html <input.md> <output.html>";

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli { input, output } = parse_args();

    let layout = SiteLayout::from_executable();
    md2html_lib::convert_file(&input, &output, &layout)?;

    println!("Generated: {}", output.display());
    Ok(())
}

/// Parses the two positional arguments, printing the usage line and exiting
/// with status 1 on any other argument count.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            log::debug!("Argument parsing failed: {err}");
            println!("{USAGE}");
            process::exit(1);
        }
    }
}
