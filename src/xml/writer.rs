use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use log::debug;
use quick_xml::escape::escape;

use super::XmlError;
use crate::dataset::{Dataset, Dimensions};

/// How label text is written into the `label` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelEscaping {
    /// Escape `<`, `>`, `&`, `'` and `"` (always well-formed output)
    #[default]
    Escape,
    /// Write labels byte-for-byte, as legacy session writers did.
    /// Labels containing markup characters produce malformed XML.
    Verbatim,
}

impl LabelEscaping {
    fn apply(self, label: &str) -> Cow<'_, str> {
        match self {
            LabelEscaping::Escape => escape(label),
            LabelEscaping::Verbatim => Cow::Borrowed(label),
        }
    }
}

/// Whitespace and escaping settings for [`Dataset::write_xml`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlLayout {
    /// Prefix for the `<dataset>` open and close tags
    pub indent: String,

    /// Extra prefix for each `<point/>` line, added after `indent`
    pub child_indent: String,

    /// Written after every tag line
    pub line_terminator: String,

    /// Label escaping policy
    pub label_escaping: LabelEscaping,
}

impl Default for XmlLayout {
    fn default() -> Self {
        Self {
            indent: String::new(),
            child_indent: "  ".to_string(),
            line_terminator: "\n".to_string(),
            label_escaping: LabelEscaping::Escape,
        }
    }
}

impl XmlLayout {
    /// Layout with explicit whitespace and escaped labels
    pub fn new(
        indent: impl Into<String>,
        child_indent: impl Into<String>,
        line_terminator: impl Into<String>,
    ) -> Self {
        Self {
            indent: indent.into(),
            child_indent: child_indent.into(),
            line_terminator: line_terminator.into(),
            label_escaping: LabelEscaping::Escape,
        }
    }

    /// Everything on one line, no indentation
    pub fn compact() -> Self {
        Self::new("", "", "")
    }

    /// Default whitespace with verbatim labels
    pub fn legacy() -> Self {
        Self {
            label_escaping: LabelEscaping::Verbatim,
            ..Self::default()
        }
    }

    /// Override the label escaping policy
    pub fn with_label_escaping(mut self, label_escaping: LabelEscaping) -> Self {
        self.label_escaping = label_escaping;
        self
    }
}

/// `%f`-style fixed point: six fractional digits
struct FixedPoint(f64);

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            v if v.is_nan() => f.write_str("nan"),
            v if v.is_infinite() => f.write_str(if v > 0.0 { "inf" } else { "-inf" }),
            v => write!(f, "{:.6}", v),
        }
    }
}

/// `%d`-style integer directive applied to a float: truncates toward zero
struct Truncated(f64);

impl fmt::Display for Truncated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.trunc() {
            v if !v.is_finite() => fmt::Display::fmt(&FixedPoint(v), f),
            v if v == 0.0 => f.write_str("0"),
            v => write!(f, "{:.0}", v),
        }
    }
}

impl Dataset {
    /// Stream the dataset as a `<dataset>` element.
    ///
    /// Points are formatted straight from the columns into `writer`; no
    /// per-point node or whole-document string is ever built, so callers
    /// should pass a buffered writer for large datasets.
    ///
    /// ```text
    /// <dataset id="ID" dimensions="D">
    ///   <point frame="F" label="L"/>                           (1-D)
    ///   <point label="L" frame="F" value="V"/>                 (2-D)
    ///   <point label="L" frame="F" value="V" duration="D"/>    (3-D)
    /// </dataset>
    /// ```
    pub fn write_xml<W: Write>(&self, mut writer: W, layout: &XmlLayout) -> Result<(), XmlError> {
        let nl = layout.line_terminator.as_str();
        let child = format!("{}{}", layout.indent, layout.child_indent);
        let escaping = layout.label_escaping;

        write!(
            writer,
            "{}<dataset id=\"{}\" dimensions=\"{}\">{}",
            layout.indent,
            self.id(),
            self.dimensions().as_u8(),
            nl
        )?;

        match self.dimensions() {
            Dimensions::One => {
                for point in self.points() {
                    write!(
                        writer,
                        "{}<point frame=\"{}\" label=\"{}\"/>{}",
                        child,
                        point.frame,
                        escaping.apply(point.label),
                        nl
                    )?;
                }
            }
            Dimensions::Two => {
                for point in self.points() {
                    write!(
                        writer,
                        "{}<point label=\"{}\" frame=\"{}\" value=\"{}\"/>{}",
                        child,
                        escaping.apply(point.label),
                        point.frame,
                        FixedPoint(point.value.unwrap_or_default()),
                        nl
                    )?;
                }
            }
            Dimensions::Three => {
                for point in self.points() {
                    write!(
                        writer,
                        "{}<point label=\"{}\" frame=\"{}\" value=\"{}\" duration=\"{}\"/>{}",
                        child,
                        escaping.apply(point.label),
                        point.frame,
                        FixedPoint(point.value.unwrap_or_default()),
                        Truncated(point.duration.unwrap_or_default()),
                        nl
                    )?;
                }
            }
        }

        write!(writer, "{}</dataset>{}", layout.indent, nl)?;
        debug!(
            "Wrote dataset {} ({}, {} points)",
            self.id(),
            self.dimensions(),
            self.len()
        );
        Ok(())
    }
}
