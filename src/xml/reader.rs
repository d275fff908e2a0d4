use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::XmlError;
use crate::dataset::{AttributeSource, Dataset, DatasetError, Dimensions};

/// Sample rate used for datasets with no matching `<model>` element
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Default input buffer size for file reading (64KB)
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Streaming reader for `<dataset>` elements.
///
/// Pull-based: each call to [`next_dataset`](DatasetReader::next_dataset)
/// scans forward to the next `<dataset>` element and rebuilds it point by
/// point through [`Dataset::append_point`]. Any surrounding session markup
/// is skipped, except `<model>` elements, whose `sampleRate` is recorded
/// for the dataset they reference.
pub struct DatasetReader<R: BufRead> {
    reader: Reader<R>,
    default_sample_rate: f64,
    model_sample_rates: HashMap<String, f64>,
    datasets_read: usize,
}

impl DatasetReader<BufReader<File>> {
    /// Open a session or dataset XML file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, XmlError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::with_capacity(
            DEFAULT_INPUT_BUFFER_SIZE,
            file,
        )))
    }
}

impl<R: BufRead> DatasetReader<R> {
    /// Create a new reader from a BufRead source
    pub fn new(reader: R) -> Self {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        Self {
            reader: xml_reader,
            default_sample_rate: DEFAULT_SAMPLE_RATE,
            model_sample_rates: HashMap::new(),
            datasets_read: 0,
        }
    }

    /// Sample rate for datasets not referenced by any `<model>`
    pub fn with_default_sample_rate(mut self, sample_rate: f64) -> Self {
        self.default_sample_rate = sample_rate;
        self
    }

    /// Sample rate recorded from a `<model>` for the given dataset id
    pub fn model_sample_rate(&self, dataset_id: &str) -> Option<f64> {
        self.model_sample_rates.get(dataset_id).copied()
    }

    /// Number of datasets returned so far
    pub fn datasets_read(&self) -> usize {
        self.datasets_read
    }

    /// Iterate over the remaining datasets
    pub fn datasets(self) -> DatasetIterator<R> {
        DatasetIterator { reader: self }
    }

    /// Read the next dataset, or `None` at end of input
    pub fn next_dataset(&mut self) -> Result<Option<Dataset>, XmlError> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(ref e) if e.name().as_ref() == b"dataset" => {
                    let dataset = self.start_dataset(e)?;
                    let dataset = self.read_points(dataset)?;
                    return Ok(Some(self.finish_dataset(dataset)));
                }
                Event::Empty(ref e) if e.name().as_ref() == b"dataset" => {
                    let dataset = self.start_dataset(e)?;
                    return Ok(Some(self.finish_dataset(dataset)));
                }
                Event::Start(ref e) | Event::Empty(ref e) if e.name().as_ref() == b"model" => {
                    self.register_model(e)?;
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
            buf.clear();
        }
    }

    fn register_model(&mut self, e: &BytesStart) -> Result<(), XmlError> {
        let (Some(dataset_id), Some(raw_rate)) =
            (get_attribute(e, "dataset")?, get_attribute(e, "sampleRate")?)
        else {
            return Ok(());
        };

        let sample_rate: f64 = raw_rate.trim().parse().map_err(|_| {
            XmlError::InvalidAttributeValue(format!("model sampleRate=\"{}\"", raw_rate))
        })?;
        self.model_sample_rates.insert(dataset_id, sample_rate);
        Ok(())
    }

    fn start_dataset(&self, e: &BytesStart) -> Result<Dataset, XmlError> {
        let id = get_attribute(e, "id")?
            .ok_or_else(|| XmlError::MissingAttribute("dataset id".to_string()))?;
        let raw_dimensions = get_attribute(e, "dimensions")?
            .ok_or_else(|| XmlError::MissingAttribute("dataset dimensions".to_string()))?;
        let dimensions = raw_dimensions
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(|d| Dimensions::try_from(d).ok())
            .ok_or_else(|| {
                XmlError::InvalidAttributeValue(format!("dimensions=\"{}\"", raw_dimensions))
            })?;

        let sample_rate = self
            .model_sample_rate(&id)
            .unwrap_or(self.default_sample_rate);
        Ok(Dataset::new(id, sample_rate, dimensions)?)
    }

    fn read_points(&mut self, mut dataset: Dataset) -> Result<Dataset, XmlError> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(ref e) | Event::Empty(ref e) if e.name().as_ref() == b"point" => {
                    dataset.append_point(e)?;
                }
                Event::End(ref e) if e.name().as_ref() == b"dataset" => return Ok(dataset),
                Event::Eof => {
                    return Err(XmlError::InvalidStructure(format!(
                        "unexpected end of input inside dataset {}",
                        dataset.id()
                    )))
                }
                _ => {}
            }
            buf.clear();
        }
    }

    fn finish_dataset(&mut self, dataset: Dataset) -> Dataset {
        self.datasets_read += 1;
        debug!(
            "Read dataset {} ({}, {} points, {} labels)",
            dataset.id(),
            dataset.dimensions(),
            dataset.len(),
            dataset.label_table().len()
        );
        dataset
    }
}

/// Iterator over datasets in an XML document
pub struct DatasetIterator<R: BufRead> {
    reader: DatasetReader<R>,
}

impl<R: BufRead> Iterator for DatasetIterator<R> {
    type Item = Result<Dataset, XmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.next_dataset() {
            Ok(Some(dataset)) => Some(Ok(dataset)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Get an unescaped attribute value from a start tag
fn get_attribute(e: &BytesStart, name: &str) -> Result<Option<String>, XmlError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| XmlError::Xml(quick_xml::Error::from(e)))?;
        if attr.key.as_ref() == name.as_bytes() {
            let raw = std::str::from_utf8(&attr.value)?;
            let value = unescape(raw).map_err(|e| {
                XmlError::InvalidAttributeValue(format!("{}=\"{}\": {}", name, raw, e))
            })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

impl AttributeSource for BytesStart<'_> {
    fn attribute(&self, name: &str) -> Result<Option<Cow<'_, str>>, DatasetError> {
        get_attribute(self, name)
            .map(|value| value.map(Cow::Owned))
            .map_err(|e| DatasetError::MalformedAttribute {
                field: name.to_string(),
                reason: e.to_string(),
            })
    }
}
