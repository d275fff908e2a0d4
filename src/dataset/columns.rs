/// Caller-supplied columns for bulk ingestion.
///
/// Built from arbitrary iterables and handed to
/// [`Dataset::set_data_from_iterable`](super::Dataset::set_data_from_iterable),
/// which checks the columns against the dataset geometry before replacing
/// anything.
///
/// # Example
///
/// ```rust
/// use svdataset::dataset::{Dataset, Dimensions, PointColumns};
///
/// let mut dataset = Dataset::new("7", 44100.0, Dimensions::Two)?;
/// dataset.set_data_from_iterable(
///     PointColumns::new([0, 4410, 8820])
///         .values([0.5, 0.75, 1.0])
///         .labels(["a", "b", "a"]),
/// )?;
/// assert_eq!(dataset.len(), 3);
/// # Ok::<(), svdataset::dataset::DatasetError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointColumns {
    pub(crate) frames: Vec<u64>,
    pub(crate) values: Option<Vec<f64>>,
    pub(crate) durations: Option<Vec<f64>>,
    pub(crate) labels: Option<Vec<String>>,
}

impl PointColumns {
    /// Start a column set from the frame positions
    pub fn new<F>(frames: F) -> Self
    where
        F: IntoIterator<Item = u64>,
    {
        Self {
            frames: frames.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Attach the value column (2-D and 3-D datasets)
    pub fn values<V>(mut self, values: V) -> Self
    where
        V: IntoIterator<Item = f64>,
    {
        self.values = Some(values.into_iter().collect());
        self
    }

    /// Attach the duration column (3-D datasets)
    pub fn durations<D>(mut self, durations: D) -> Self
    where
        D: IntoIterator<Item = f64>,
    {
        self.durations = Some(durations.into_iter().collect());
        self
    }

    /// Attach explicit labels; without them every point gets the empty label
    pub fn labels<L, S>(mut self, labels: L) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if there are no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
