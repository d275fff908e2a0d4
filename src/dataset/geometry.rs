use std::fmt;

/// Point geometry of a dataset
///
/// Every point carries a frame and a label. Higher geometries add a value
/// (2-D) and a duration (3-D).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimensions {
    /// Frame and label only (time instants)
    One,
    /// Frame, value and label (time values)
    Two,
    /// Frame, value, duration and label (notes, regions)
    Three,
}

impl Dimensions {
    /// Numeric form written to the `dimensions` attribute
    pub fn as_u8(self) -> u8 {
        match self {
            Dimensions::One => 1,
            Dimensions::Two => 2,
            Dimensions::Three => 3,
        }
    }

    /// Whether points of this geometry carry a value
    pub fn has_values(self) -> bool {
        !matches!(self, Dimensions::One)
    }

    /// Whether points of this geometry carry a duration
    pub fn has_durations(self) -> bool {
        matches!(self, Dimensions::Three)
    }
}

impl TryFrom<u8> for Dimensions {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Dimensions::One),
            2 => Ok(Dimensions::Two),
            3 => Ok(Dimensions::Three),
            other => Err(other),
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-D", self.as_u8())
    }
}

/// Geometry-specific columns.
///
/// Frames and label codes are shared by every geometry and live on the
/// dataset itself; this holds only what a geometry adds on top.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Geometry {
    OneD,
    TwoD { values: Vec<f64> },
    ThreeD { values: Vec<f64>, durations: Vec<f64> },
}

impl Geometry {
    pub(crate) fn empty(dimensions: Dimensions) -> Self {
        match dimensions {
            Dimensions::One => Geometry::OneD,
            Dimensions::Two => Geometry::TwoD { values: Vec::new() },
            Dimensions::Three => Geometry::ThreeD {
                values: Vec::new(),
                durations: Vec::new(),
            },
        }
    }

    pub(crate) fn dimensions(&self) -> Dimensions {
        match self {
            Geometry::OneD => Dimensions::One,
            Geometry::TwoD { .. } => Dimensions::Two,
            Geometry::ThreeD { .. } => Dimensions::Three,
        }
    }

    pub(crate) fn values(&self) -> Option<&[f64]> {
        match self {
            Geometry::OneD => None,
            Geometry::TwoD { values } | Geometry::ThreeD { values, .. } => Some(values),
        }
    }

    pub(crate) fn durations(&self) -> Option<&[f64]> {
        match self {
            Geometry::ThreeD { durations, .. } => Some(durations),
            _ => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Geometry::empty(self.dimensions());
    }
}
