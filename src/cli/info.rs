use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use svdataset::dataset::Dataset;
use svdataset::xml::DatasetReader;

/// Per-dataset summary printed by `svdataset info`
#[derive(Debug, Serialize)]
struct DatasetSummary {
    id: String,
    dimensions: u8,
    sample_rate: f64,
    points: usize,
    distinct_labels: usize,
    first_instant: Option<f64>,
    last_instant: Option<f64>,
}

impl From<&Dataset> for DatasetSummary {
    fn from(dataset: &Dataset) -> Self {
        Self {
            id: dataset.id().to_string(),
            dimensions: dataset.dimensions().as_u8(),
            sample_rate: dataset.sample_rate(),
            points: dataset.len(),
            distinct_labels: dataset.label_table().len(),
            first_instant: dataset.instants().next(),
            last_instant: dataset.instants().last(),
        }
    }
}

/// Display information about the datasets in an XML file
pub fn run(file: PathBuf, json: bool, sample_rate: Option<f64>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let mut reader = DatasetReader::open(&file).context("Failed to open file")?;
    if let Some(sample_rate) = sample_rate {
        reader = reader.with_default_sample_rate(sample_rate);
    }

    let mut summaries = Vec::new();
    for dataset in reader.datasets() {
        let dataset = dataset.with_context(|| format!("Failed to read {}", file.display()))?;
        summaries.push(DatasetSummary::from(&dataset));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("Dataset Information");
    println!("===================");
    println!("File: {}", file.display());
    println!("Datasets: {}", summaries.len());
    println!();

    for summary in &summaries {
        println!("Dataset {}:", summary.id);
        println!("  Dimensions: {}", summary.dimensions);
        println!("  Sample rate: {} Hz", summary.sample_rate);
        println!("  Points: {}", summary.points);
        println!("  Distinct labels: {}", summary.distinct_labels);
        if let (Some(first), Some(last)) = (summary.first_instant, summary.last_instant) {
            println!("  Span: {:.3}s - {:.3}s", first, last);
        }
        println!();
    }

    Ok(())
}
