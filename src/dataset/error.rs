use super::geometry::Dimensions;

/// Errors that can occur while building or populating a dataset
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// Sample rate must be a positive, finite number
    #[error("Invalid sample rate: {0} (must be positive and finite)")]
    InvalidSampleRate(f64),

    /// A column required by the dataset geometry was not supplied
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// Name of the missing column
        column: &'static str,
    },

    /// A column was supplied that the dataset geometry does not carry
    #[error("Column {column} is not allowed for a {dimensions} dataset")]
    UnexpectedColumn {
        /// Name of the rejected column
        column: &'static str,
        /// Geometry of the target dataset
        dimensions: Dimensions,
    },

    /// A parallel column disagrees in length with the frames column
    #[error("Column {column} has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column
        column: &'static str,
        /// Number of frames
        expected: usize,
        /// Number of entries actually supplied
        actual: usize,
    },

    /// A point record lacks a field the geometry requires
    #[error("Point {record}: missing required attribute '{field}'")]
    MissingField {
        /// Index the point would have had in the dataset
        record: usize,
        /// Attribute name
        field: &'static str,
    },

    /// A point record field could not be coerced to its column type
    #[error("Point {record}: invalid value '{value}' for attribute '{field}'")]
    InvalidField {
        /// Index the point would have had in the dataset
        record: usize,
        /// Attribute name
        field: &'static str,
        /// Raw attribute text
        value: String,
    },

    /// The attribute source failed to decode an attribute
    #[error("Malformed attribute '{field}': {reason}")]
    MalformedAttribute {
        /// Attribute name
        field: String,
        /// Decoder message
        reason: String,
    },
}
