use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use svdataset::dataset::Dimensions;

mod config;
mod import;
mod info;

/// svdataset - Sonic Visualiser point-set dataset tool
#[derive(Parser)]
#[command(name = "svdataset")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Point geometry override for imported datasets.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DimensionsArg {
    /// Frame and label (time instants)
    #[value(name = "1")]
    One,
    /// Frame, value and label (time values)
    #[value(name = "2")]
    Two,
    /// Frame, value, duration and label (notes, regions)
    #[value(name = "3")]
    Three,
}

impl From<DimensionsArg> for Dimensions {
    fn from(arg: DimensionsArg) -> Self {
        match arg {
            DimensionsArg::One => Dimensions::One,
            DimensionsArg::Two => Dimensions::Two,
            DimensionsArg::Three => Dimensions::Three,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the datasets in a session or dataset XML file
    Info {
        /// Input XML file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print summaries as JSON
        #[arg(long)]
        json: bool,

        /// Sample rate for datasets without a <model> element
        #[arg(long, value_name = "HZ")]
        sample_rate: Option<f64>,
    },

    /// Import points from CSV and write a <dataset> element
    Import {
        /// Input CSV file with a header row (frame, value, duration, label)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output XML file path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Dataset id written to the id attribute
        #[arg(long)]
        id: Option<String>,

        /// Point geometry (inferred from the CSV header when omitted)
        #[arg(short, long, value_enum)]
        dimensions: Option<DimensionsArg>,

        /// Sample rate of the frame column
        #[arg(short, long, value_name = "HZ")]
        sample_rate: Option<f64>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write labels without XML escaping
        #[arg(long)]
        verbatim_labels: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info {
            file,
            json,
            sample_rate,
        } => info::run(file, json, sample_rate),
        Commands::Import {
            input,
            output,
            id,
            dimensions,
            sample_rate,
            config,
            verbatim_labels,
        } => import::run(import::ImportArgs {
            input,
            output,
            id,
            dimensions: dimensions.map(Dimensions::from),
            sample_rate,
            config,
            verbatim_labels,
        }),
    }
}
