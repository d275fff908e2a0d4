//! # svdataset
//!
//! Command-line tool for inspecting and producing Sonic Visualiser
//! point-set datasets.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize every dataset in a session file
//! svdataset info session.xml
//!
//! # Turn a CSV of note events into a 3-D <dataset> element
//! svdataset import notes.csv -o notes.xml --id 4 --sample-rate 44100
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
