use anyhow::{bail, Context, Result};
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use svdataset::dataset::{Dataset, Dimensions, PointColumns};
use svdataset::xml::DEFAULT_SAMPLE_RATE;

use super::config::Config;

/// Arguments for the import command
pub struct ImportArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub id: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub sample_rate: Option<f64>,
    pub config: Option<PathBuf>,
    pub verbatim_labels: bool,
}

/// One CSV row; only `frame` is mandatory
#[derive(Debug, Deserialize)]
struct CsvPoint {
    frame: u64,
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    label: Option<String>,
}

/// Import points from a CSV file and write them as a <dataset> element
pub fn run(args: ImportArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let mut reader = csv::Reader::from_path(&args.input)
        .with_context(|| format!("Failed to open CSV file: {}", args.input.display()))?;
    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    let dimensions = match args.dimensions.or(config.import.dimensions()?) {
        Some(dimensions) => dimensions,
        None if has_column("duration") => Dimensions::Three,
        None if has_column("value") => Dimensions::Two,
        None => Dimensions::One,
    };
    let has_labels = has_column("label");
    let sample_rate = args
        .sample_rate
        .or(config.import.sample_rate)
        .unwrap_or(DEFAULT_SAMPLE_RATE);
    let id = args
        .id
        .clone()
        .or_else(|| config.import.id.clone())
        .unwrap_or_else(|| "0".to_string());

    let mut frames = Vec::new();
    let mut values = Vec::new();
    let mut durations = Vec::new();
    let mut labels = Vec::new();

    for (row, record) in reader.deserialize::<CsvPoint>().enumerate() {
        let point = record.with_context(|| format!("Failed to parse CSV row {}", row + 1))?;
        frames.push(point.frame);
        if dimensions.has_values() {
            match point.value {
                Some(value) => values.push(value),
                None => bail!("CSV row {}: missing value for a {} dataset", row + 1, dimensions),
            }
        }
        if dimensions.has_durations() {
            match point.duration {
                Some(duration) => durations.push(duration),
                None => bail!("CSV row {}: missing duration for a {} dataset", row + 1, dimensions),
            }
        }
        labels.push(point.label.unwrap_or_default());
    }

    let mut columns = PointColumns::new(frames);
    if dimensions.has_values() {
        columns = columns.values(values);
    }
    if dimensions.has_durations() {
        columns = columns.durations(durations);
    }
    if has_labels {
        columns = columns.labels(labels);
    }

    let mut dataset = Dataset::new(id, sample_rate, dimensions)?;
    dataset
        .set_data_from_iterable(columns)
        .context("Failed to build dataset from CSV columns")?;

    let layout = config.output.layout(args.verbatim_labels);
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            dataset.write_xml(&mut writer, &layout)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            dataset.write_xml(&mut writer, &layout)?;
            writer.flush()?;
        }
    }

    info!(
        "Imported {} points into {} dataset {} ({} distinct labels)",
        dataset.len(),
        dataset.dimensions(),
        dataset.id(),
        dataset.label_table().len()
    );

    Ok(())
}
