use std::borrow::Cow;
use std::str::FromStr;

use super::columns::PointColumns;
use super::geometry::{Dimensions, Geometry};
use super::labels::LabelTable;
use super::record::AttributeSource;
use super::DatasetError;

/// Borrowed view of a single point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRef<'a> {
    /// Temporal position in sample frames
    pub frame: u64,
    /// Point value (2-D and 3-D)
    pub value: Option<f64>,
    /// Point duration in frames (3-D)
    pub duration: Option<f64>,
    /// Resolved label text
    pub label: &'a str,
}

/// Columnar point-set dataset.
///
/// Points are kept as parallel columns (frames, label codes and whatever the
/// geometry adds) instead of one node per point, and are only turned into
/// XML when [`write_xml`](Dataset::write_xml) streams them out.
///
/// All columns have the same length after every call, successful or not:
/// ingestion validates its input completely before touching any column.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    id: String,
    sample_rate: f64,
    frames: Vec<u64>,
    labels: Vec<u32>,
    geometry: Geometry,
    label_table: LabelTable,
}

impl Dataset {
    /// Create an empty dataset with the given geometry
    pub fn new(
        id: impl Into<String>,
        sample_rate: f64,
        dimensions: Dimensions,
    ) -> Result<Self, DatasetError> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(DatasetError::InvalidSampleRate(sample_rate));
        }

        Ok(Self {
            id: id.into(),
            sample_rate,
            frames: Vec::new(),
            labels: Vec::new(),
            geometry: Geometry::empty(dimensions),
            label_table: LabelTable::new(),
        })
    }

    /// Create an empty 1-D (frame + label) dataset
    pub fn new_1d(id: impl Into<String>, sample_rate: f64) -> Result<Self, DatasetError> {
        Self::new(id, sample_rate, Dimensions::One)
    }

    /// Create an empty 2-D (frame + value + label) dataset
    pub fn new_2d(id: impl Into<String>, sample_rate: f64) -> Result<Self, DatasetError> {
        Self::new(id, sample_rate, Dimensions::Two)
    }

    /// Create an empty 3-D (frame + value + duration + label) dataset
    pub fn new_3d(id: impl Into<String>, sample_rate: f64) -> Result<Self, DatasetError> {
        Self::new(id, sample_rate, Dimensions::Three)
    }

    /// Dataset identifier assigned by the owning document
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Frames per second
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Geometry of this dataset
    pub fn dimensions(&self) -> Dimensions {
        self.geometry.dimensions()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the dataset holds no points
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame column
    pub fn frames(&self) -> &[u64] {
        &self.frames
    }

    /// Value column, `None` for 1-D datasets
    pub fn values(&self) -> Option<&[f64]> {
        self.geometry.values()
    }

    /// Duration column, `None` unless 3-D
    pub fn durations(&self) -> Option<&[f64]> {
        self.geometry.durations()
    }

    /// Label code column
    pub fn label_codes(&self) -> &[u32] {
        &self.labels
    }

    /// Label interning table
    pub fn label_table(&self) -> &LabelTable {
        &self.label_table
    }

    /// Replace the dataset contents with caller-supplied columns.
    ///
    /// Frames, values, durations and labels are all replaced wholesale. The
    /// label table is kept, so codes assigned by earlier calls stay stable.
    /// Without explicit labels every point gets the empty label, which is
    /// code 0 on a fresh dataset.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::UnexpectedColumn`] if a column is supplied that the
    ///   geometry does not carry (values on 1-D, durations on 1-D/2-D)
    /// - [`DatasetError::MissingColumn`] if the geometry requires values or
    ///   durations and they were not supplied
    /// - [`DatasetError::LengthMismatch`] if values, durations or labels
    ///   differ in length from frames
    ///
    /// On error the dataset is left unchanged.
    pub fn set_data_from_iterable(&mut self, columns: PointColumns) -> Result<(), DatasetError> {
        let PointColumns {
            frames,
            values,
            durations,
            labels,
        } = columns;
        let n = frames.len();

        let geometry = build_geometry(self.dimensions(), n, values, durations)?;
        if let Some(labels) = &labels {
            check_len("labels", n, labels.len())?;
        }

        let codes = match labels {
            Some(labels) => labels
                .iter()
                .map(|label| self.label_table.intern(label))
                .collect(),
            None => vec![self.label_table.intern(""); n],
        };

        self.frames = frames;
        self.labels = codes;
        self.geometry = geometry;
        Ok(())
    }

    /// Append one point from a parsed attribute record.
    ///
    /// Reads `frame` and `label`, plus `value` for 2-D/3-D and `duration`
    /// for 3-D. Every field is parsed before any column is extended, so a
    /// failing record leaves the dataset unchanged.
    pub fn append_point<A>(&mut self, record: &A) -> Result<(), DatasetError>
    where
        A: AttributeSource + ?Sized,
    {
        let index = self.frames.len();
        let frame: u64 = parse_field(record, index, "frame")?;
        let (value, duration) = match self.dimensions() {
            Dimensions::One => (None, None),
            Dimensions::Two => (Some(parse_field::<_, f64>(record, index, "value")?), None),
            Dimensions::Three => (
                Some(parse_field::<_, f64>(record, index, "value")?),
                Some(parse_field::<_, f64>(record, index, "duration")?),
            ),
        };
        let label = required_field(record, index, "label")?;

        let code = self.label_table.intern(&label);
        self.frames.push(frame);
        self.labels.push(code);
        match &mut self.geometry {
            Geometry::OneD => {}
            Geometry::TwoD { values } => values.extend(value),
            Geometry::ThreeD { values, durations } => {
                values.extend(value);
                durations.extend(duration);
            }
        }
        Ok(())
    }

    /// Point times in seconds (`frame / sample_rate`), computed on each call
    pub fn instants(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        let sample_rate = self.sample_rate;
        self.frames.iter().map(move |&frame| frame as f64 / sample_rate)
    }

    /// Point labels in record order
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.labels.iter().map(move |&code| self.resolve(code))
    }

    /// Point at `index`, if any
    pub fn point(&self, index: usize) -> Option<PointRef<'_>> {
        let frame = *self.frames.get(index)?;
        Some(PointRef {
            frame,
            value: self.geometry.values().map(|v| v[index]),
            duration: self.geometry.durations().map(|d| d[index]),
            label: self.resolve(self.labels[index]),
        })
    }

    /// Iterate all points in record order
    pub fn points(&self) -> impl ExactSizeIterator<Item = PointRef<'_>> + '_ {
        let values = self.geometry.values();
        let durations = self.geometry.durations();
        self.frames
            .iter()
            .zip(&self.labels)
            .enumerate()
            .map(move |(i, (&frame, &code))| PointRef {
                frame,
                value: values.map(|v| v[i]),
                duration: durations.map(|d| d[i]),
                label: self.resolve(code),
            })
    }

    /// Drop all points, keeping the geometry and the label table
    pub fn clear(&mut self) {
        self.frames.clear();
        self.labels.clear();
        self.geometry.clear();
    }

    fn resolve(&self, code: u32) -> &str {
        // Codes only ever come from this table
        self.label_table.label(code).unwrap_or_default()
    }
}

fn build_geometry(
    dimensions: Dimensions,
    n: usize,
    values: Option<Vec<f64>>,
    durations: Option<Vec<f64>>,
) -> Result<Geometry, DatasetError> {
    match (dimensions, values, durations) {
        (Dimensions::One, None, None) => Ok(Geometry::OneD),
        (Dimensions::One, Some(_), _) => Err(DatasetError::UnexpectedColumn {
            column: "values",
            dimensions,
        }),
        (Dimensions::One, None, Some(_)) | (Dimensions::Two, _, Some(_)) => {
            Err(DatasetError::UnexpectedColumn {
                column: "durations",
                dimensions,
            })
        }
        (Dimensions::Two, None, None) | (Dimensions::Three, None, _) => {
            Err(DatasetError::MissingColumn { column: "values" })
        }
        (Dimensions::Three, Some(_), None) => {
            Err(DatasetError::MissingColumn { column: "durations" })
        }
        (Dimensions::Two, Some(values), None) => {
            check_len("values", n, values.len())?;
            Ok(Geometry::TwoD { values })
        }
        (Dimensions::Three, Some(values), Some(durations)) => {
            check_len("values", n, values.len())?;
            check_len("durations", n, durations.len())?;
            Ok(Geometry::ThreeD { values, durations })
        }
    }
}

fn check_len(column: &'static str, expected: usize, actual: usize) -> Result<(), DatasetError> {
    if expected != actual {
        return Err(DatasetError::LengthMismatch {
            column,
            expected,
            actual,
        });
    }
    Ok(())
}

fn required_field<'r, A>(
    record: &'r A,
    index: usize,
    field: &'static str,
) -> Result<Cow<'r, str>, DatasetError>
where
    A: AttributeSource + ?Sized,
{
    record
        .attribute(field)?
        .ok_or(DatasetError::MissingField {
            record: index,
            field,
        })
}

fn parse_field<A, T>(record: &A, index: usize, field: &'static str) -> Result<T, DatasetError>
where
    A: AttributeSource + ?Sized,
    T: FromStr,
{
    let raw = required_field(record, index, field)?;
    raw.trim().parse().map_err(|_| DatasetError::InvalidField {
        record: index,
        field,
        value: raw.into_owned(),
    })
}
