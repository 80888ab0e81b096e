//! Leaf value formatters.
//!
//! A formatter gets the first look at every value the flattener visits. When
//! it claims a value, the returned replacement is written as a leaf under the
//! current key, even if the original value is an object. Replacements that are
//! themselves objects or arrays are ignored, as if the value was not claimed.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Marker field set on serialized moment.js-style date wrappers.
pub const DEFAULT_DATE_MARKER: &str = "_isAMomentObject";

/// Fields holding the wrapped date, in lookup order.
pub const DEFAULT_DATE_FIELDS: &[&str] = &["_d", "_i"];

/// Default rendering for claimed dates.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Hook that turns selected values into leaves.
pub trait LeafFormatter: Send + Sync {
    /// Return the leaf replacement for `value`, or `None` to leave it alone.
    /// The replacement must be a primitive or null.
    fn format(&self, value: &Value) -> Option<Value>;
}

impl<F> LeafFormatter for F
where
    F: Fn(&Value) -> Option<Value> + Send + Sync,
{
    fn format(&self, value: &Value) -> Option<Value> {
        self(value)
    }
}

/// Renders tagged date wrapper objects as date strings.
///
/// An object is claimed when its marker field is `true` and one of the source
/// fields holds a parseable date or date-time string.
#[derive(Debug, Clone)]
pub struct DateLeafFormatter {
    marker: String,
    fields: Vec<String>,
    format: String,
}

impl DateLeafFormatter {
    /// Create a formatter with an explicit marker, source fields and output format.
    pub fn new(
        marker: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            marker: marker.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            format: format.into(),
        }
    }

    /// Change the output format (a `chrono` format string).
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    fn source_date(&self, object: &serde_json::Map<String, Value>) -> Option<NaiveDateTime> {
        self.fields
            .iter()
            .filter_map(|field| object.get(field).and_then(Value::as_str))
            .find_map(parse_date_time)
    }
}

impl Default for DateLeafFormatter {
    fn default() -> Self {
        Self::new(
            DEFAULT_DATE_MARKER,
            DEFAULT_DATE_FIELDS.iter().copied(),
            DEFAULT_DATE_FORMAT,
        )
    }
}

impl LeafFormatter for DateLeafFormatter {
    fn format(&self, value: &Value) -> Option<Value> {
        let object = value.as_object()?;
        if object.get(&self.marker).and_then(Value::as_bool) != Some(true) {
            return None;
        }

        let date = self.source_date(object)?;

        // Unrenderable format strings leave the value unclaimed.
        let mut rendered = String::new();
        write!(rendered, "{}", date.format(&self.format)).ok()?;
        Some(Value::String(rendered))
    }
}

/// Parse RFC 3339, naive date-time, or plain `YYYY-MM-DD` text.
fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
