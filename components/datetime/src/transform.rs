//! Binding transform between date/time values and display strings
//!
//! A view that shows a date in a text field needs to convert in both
//! directions with one format. [`DateTimeTransform`] bundles the format and
//! the name table for that.

use crate::datetime::DateTime;
use crate::names::NameTable;

/// A value crossing a binding: either side of the conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundValue {
    /// A date/time value
    DateTime(DateTime),
    /// Its textual form
    Text(String),
}

/// Two-way converter for a fixed format.
///
/// # Examples
///
/// ```
/// use datetime::{BoundValue, DateTimeTransform, NameTable};
///
/// let transform = DateTimeTransform::new("%d/%m/%Y", NameTable::english());
/// let parsed = transform.apply(BoundValue::Text("08/05/1985".into())).unwrap();
/// let shown = transform.apply(parsed).unwrap();
/// assert_eq!(shown, BoundValue::Text("08/05/1985".into()));
/// ```
#[derive(Debug, Clone)]
pub struct DateTimeTransform {
    format: String,
    names: NameTable,
}

impl DateTimeTransform {
    /// Create a transform for `format`
    pub fn new(format: impl Into<String>, names: NameTable) -> Self {
        DateTimeTransform {
            format: format.into(),
            names,
        }
    }

    /// The format used in both directions
    pub fn format_pattern(&self) -> &str {
        &self.format
    }

    /// Date/time to text
    pub fn format(&self, value: &DateTime) -> String {
        value.to_formatted_string(&self.format, &self.names)
    }

    /// Text to date/time, `None` if the text does not match the format
    pub fn parse(&self, text: &str) -> Option<DateTime> {
        DateTime::create_from_string(text, &self.format, &self.names)
    }

    /// Convert to the other side of the binding
    pub fn apply(&self, value: BoundValue) -> Option<BoundValue> {
        match value {
            BoundValue::DateTime(datetime) => Some(BoundValue::Text(self.format(&datetime))),
            BoundValue::Text(text) => self.parse(&text).map(BoundValue::DateTime),
        }
    }
}
