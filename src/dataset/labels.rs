use std::collections::HashMap;

/// Bidirectional label interning table.
///
/// Each distinct label string receives a dense code in first-seen order.
/// Codes are never reassigned and the table never shrinks, so a code stored
/// in a dataset column stays valid for the lifetime of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    codes: HashMap<String, u32>,
    labels: Vec<String>,
}

impl LabelTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the code for `label`, assigning the next free code if it is new
    pub fn intern(&mut self, label: &str) -> u32 {
        if let Some(&code) = self.codes.get(label) {
            return code;
        }
        let code = self.labels.len() as u32;
        self.codes.insert(label.to_owned(), code);
        self.labels.push(label.to_owned());
        code
    }

    /// Look up the code of a label without interning it
    pub fn code(&self, label: &str) -> Option<u32> {
        self.codes.get(label).copied()
    }

    /// Resolve a code back to its label
    pub fn label(&self, code: u32) -> Option<&str> {
        self.labels.get(code as usize).map(String::as_str)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no label has been interned yet
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate labels in code order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}
