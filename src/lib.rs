//! # svdataset - Lazy Point-Set Datasets for Sonic Visualiser Sessions
//!
//! `svdataset` stores the point layers of Sonic Visualiser session files
//! (time instants, time values, notes and regions) as flat columns and
//! writes them out as `<dataset>` XML only when the session is serialized.
//!
//! ## Key Features
//!
//! - **Columnar Storage**: Frames, values, durations and label codes live in
//!   parallel vectors. No per-point document node is ever created, so layers
//!   with millions of points stay cheap.
//!
//! - **Label Interning**: Repeated labels are stored once and referenced by
//!   dense integer codes assigned in first-seen order.
//!
//! - **Streaming Output**: Points are formatted straight from the columns into
//!   any `std::io::Write`, attribute for attribute compatible with existing
//!   session files.
//!
//! - **Streaming Input**: A quick-xml pull parser rebuilds datasets record by
//!   record, resolving sample rates from the session's `<model>` elements.
//!
//! ## Quick Start
//!
//! ```rust
//! use svdataset::dataset::{Dataset, PointColumns};
//! use svdataset::xml::XmlLayout;
//!
//! let mut notes = Dataset::new_3d("12", 44100.0)?;
//! notes.set_data_from_iterable(
//!     PointColumns::new([0, 22050])
//!         .values([60.0, 64.0])
//!         .durations([11025.0, 11025.0])
//!         .labels(["C4", "E4"]),
//! )?;
//!
//! let mut out = Vec::new();
//! notes.write_xml(&mut out, &XmlLayout::default())?;
//! # Ok::<(), svdataset::xml::XmlError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`dataset`]: columnar store, label interning, bulk and incremental ingestion
//! - [`xml`]: streaming `<dataset>` writer and reader

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod dataset;
pub mod xml;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dataset::{
        AttributeSource, Dataset, DatasetError, Dimensions, LabelTable, PointColumns, PointRef,
    };
    pub use crate::xml::{DatasetReader, LabelEscaping, XmlError, XmlLayout};
}
