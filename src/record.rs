//! Payload types handed to the tracer by the host pipeline.

/// One parsed symbol as reported by the ctag-parsing stage.
///
/// Replaces the historical positional argument lists (which disagreed on
/// order and naming across call sites) with a single canonical shape. The
/// tracer identifies the entity as `<filename>::<symbol>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEvent {
    /// Header file the symbol was found in.
    pub filename: String,
    /// Symbol identifier.
    pub symbol: String,
    /// Kind of symbol, e.g. `"function"` or `"method"`.
    pub role: String,
    /// 1-based line number within `filename`.
    pub line_n: usize,
    /// Full prototype text, e.g. `void bar()`.
    pub prototype: String,
    /// Whether the symbol is declared `virtual`.
    pub is_virtual: bool,
    /// Whether the symbol is declared `override`.
    pub is_override: bool,
}

/// A single field value in a raw tag record.
///
/// Tag records arrive from the tag parser with mixed-type fields; only
/// `Text` fields survive into trace output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Text(String),
    Number(i64),
    Absent,
}

impl TagValue {
    /// The text content, if this is a `Text` field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A raw tag record: named fields in parse order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRecord {
    fields: Vec<(String, TagValue)>,
}

impl TagRecord {
    pub fn new() -> Self {
        TagRecord::default()
    }

    /// Append a field. Order is preserved; duplicate names are not rejected
    /// (the tag parser owns validity, this crate only renders).
    pub fn push(&mut self, name: impl Into<String>, value: TagValue) {
        self.fields.push((name.into(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Project the record down to its text-valued fields, in order.
    ///
    /// Number and absent fields are dropped, not converted.
    pub fn text_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| value.as_text().map(|text| (name.as_str(), text)))
    }
}

impl FromIterator<(String, TagValue)> for TagRecord {
    fn from_iter<I: IntoIterator<Item = (String, TagValue)>>(iter: I) -> Self {
        TagRecord {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_record() -> TagRecord {
        let mut record = TagRecord::new();
        record.push("name", TagValue::Text("parse".to_string()));
        record.push("line", TagValue::Number(12));
        record.push("scope", TagValue::Absent);
        record.push("kind", TagValue::Text("function".to_string()));
        record
    }

    #[test]
    fn test_text_fields_keeps_only_text() {
        let record = mixed_record();
        let kept: Vec<_> = record.text_fields().collect();
        assert_eq!(kept, vec![("name", "parse"), ("kind", "function")]);
    }

    #[test]
    fn test_text_fields_preserves_order() {
        let mut record = TagRecord::new();
        record.push("kind", TagValue::Text("method".to_string()));
        record.push("name", TagValue::Text("bar".to_string()));

        let names: Vec<_> = record.text_fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["kind", "name"]);
    }

    #[test]
    fn test_empty_record() {
        let record = TagRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.text_fields().count(), 0);
    }

    #[test]
    fn test_len_counts_all_fields() {
        // len reflects the raw record, not the text projection
        assert_eq!(mixed_record().len(), 4);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(TagValue::Text("x".to_string()).as_text(), Some("x"));
        assert_eq!(TagValue::Number(3).as_text(), None);
        assert_eq!(TagValue::Absent.as_text(), None);
    }

    #[test]
    fn test_from_iterator() {
        let record: TagRecord = vec![
            ("name".to_string(), TagValue::Text("foo".to_string())),
            ("line".to_string(), TagValue::Number(7)),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record.text_fields().count(), 1);
    }
}
