use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::DatasetError;

/// A parsed point record exposing named string attributes.
///
/// This is the read-path interface consumed by
/// [`Dataset::append_point`](super::Dataset::append_point). The XML reader
/// implements it directly over quick-xml start tags; maps and attribute
/// pair slices implement it for callers that already hold decoded records.
pub trait AttributeSource {
    /// Return the value of attribute `name`, or `None` if it is absent
    fn attribute(&self, name: &str) -> Result<Option<Cow<'_, str>>, DatasetError>;
}

impl<S: BuildHasher> AttributeSource for HashMap<String, String, S> {
    fn attribute(&self, name: &str) -> Result<Option<Cow<'_, str>>, DatasetError> {
        Ok(self.get(name).map(|v| Cow::Borrowed(v.as_str())))
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Result<Option<Cow<'_, str>>, DatasetError> {
        Ok(self.get(name).map(|v| Cow::Borrowed(v.as_str())))
    }
}

impl<'a> AttributeSource for [(&'a str, &'a str)] {
    fn attribute(&self, name: &str) -> Result<Option<Cow<'_, str>>, DatasetError> {
        Ok(self
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| Cow::Borrowed(*value)))
    }
}

impl<'a, const N: usize> AttributeSource for [(&'a str, &'a str); N] {
    fn attribute(&self, name: &str) -> Result<Option<Cow<'_, str>>, DatasetError> {
        self.as_slice().attribute(name)
    }
}
