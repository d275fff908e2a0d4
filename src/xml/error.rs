use crate::dataset::DatasetError;

/// Errors that can occur while reading or writing dataset XML
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// Error parsing XML
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error on the underlying reader or writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A point could not be added to its dataset
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Required XML attribute is missing
    #[error("Missing required attribute: {0}")]
    MissingAttribute(String),

    /// Invalid value for an XML attribute
    #[error("Invalid attribute value: {0}")]
    InvalidAttributeValue(String),

    /// Document does not have the expected dataset structure
    #[error("Invalid dataset structure: {0}")]
    InvalidStructure(String),

    /// UTF-8 encoding error in attribute content
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
