//! # Columnar point-set datasets
//!
//! A [`Dataset`] stores annotation points as flat parallel columns rather
//! than as a tree of XML nodes, so layers with millions of points stay
//! cheap to hold in memory. Points only become `<point/>` elements when the
//! dataset is streamed out with [`Dataset::write_xml`].
//!
//! ## Geometries
//!
//! | Dimensions | Columns |
//! |------------|---------|
//! | 1 | frame, label |
//! | 2 | frame, value, label |
//! | 3 | frame, value, duration, label |
//!
//! Labels are interned through a [`LabelTable`]: each distinct string gets a
//! dense code in first-seen order and the label column stores codes only.
//!
//! ## Populating a dataset
//!
//! - Bulk, on the write path: [`Dataset::set_data_from_iterable`] with a
//!   [`PointColumns`] builder.
//! - Incrementally, on the read path: [`Dataset::append_point`] with any
//!   [`AttributeSource`], one record at a time in file order.
//!
//! ```rust
//! use svdataset::dataset::{Dataset, PointColumns};
//!
//! let mut onsets = Dataset::new_1d("3", 100.0)?;
//! onsets.set_data_from_iterable(PointColumns::new([0, 50, 200]))?;
//!
//! let instants: Vec<f64> = onsets.instants().collect();
//! assert_eq!(instants, vec![0.0, 0.5, 2.0]);
//! assert!(onsets.labels().all(|l| l.is_empty()));
//! # Ok::<(), svdataset::dataset::DatasetError>(())
//! ```

mod columns;
mod dataset_impl;
mod error;
mod geometry;
mod labels;
mod record;


pub use columns::PointColumns;
pub use dataset_impl::{Dataset, PointRef};
pub use error::DatasetError;
pub use geometry::Dimensions;
pub use labels::LabelTable;
pub use record::AttributeSource;
