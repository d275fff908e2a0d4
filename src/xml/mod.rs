//! # Dataset XML
//!
//! Streaming conversion between [`Dataset`](crate::dataset::Dataset) columns
//! and the `<dataset>`/`<point/>` markup of Sonic Visualiser sessions.
//!
//! - [`Dataset::write_xml`](crate::dataset::Dataset::write_xml) formats
//!   points directly from the columns into any [`std::io::Write`].
//! - [`DatasetReader`] is a quick-xml pull parser that rebuilds datasets
//!   record by record, picking up sample rates from `<model>` elements.
//!
//! ## Attribute formatting
//!
//! | Attribute | Format |
//! |-----------|--------|
//! | `frame` | decimal integer |
//! | `value` | fixed point, 6 fractional digits (`1.250000`) |
//! | `duration` | integer, truncated toward zero |
//! | `label` | escaped by default, see [`LabelEscaping`] |
//!
//! ```rust
//! use svdataset::dataset::{Dataset, PointColumns};
//! use svdataset::xml::{DatasetReader, XmlLayout};
//!
//! let mut dataset = Dataset::new_2d("ID", 44100.0)?;
//! dataset.set_data_from_iterable(PointColumns::new([5]).values([1.25]).labels(["x"]))?;
//!
//! let mut out = Vec::new();
//! dataset.write_xml(&mut out, &XmlLayout::default())?;
//! assert_eq!(
//!     String::from_utf8(out.clone()).unwrap(),
//!     "<dataset id=\"ID\" dimensions=\"2\">\n  <point label=\"x\" frame=\"5\" value=\"1.250000\"/>\n</dataset>\n"
//! );
//!
//! let read = DatasetReader::new(out.as_slice()).next_dataset()?.unwrap();
//! assert_eq!(read.frames(), dataset.frames());
//! # Ok::<(), svdataset::xml::XmlError>(())
//! ```

mod error;
mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use error::XmlError;
pub use reader::{DatasetIterator, DatasetReader, DEFAULT_INPUT_BUFFER_SIZE, DEFAULT_SAMPLE_RATE};
pub use writer::{LabelEscaping, XmlLayout};
