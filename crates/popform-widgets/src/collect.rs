#![forbid(unsafe_code)]

//! Value collection: reading the rendered form back into structured data.
//!
//! The collector walks the same schema used to render and looks each field
//! up by identifier through the host. The result is an ordered list of
//! `{id, name, value}` records in schema order; [`FormData::get`] offers
//! keyed access. A field whose live element is gone is skipped silently:
//! partial results beat total failure when the page has been mutated under
//! us.
//!
//! Input-range items flatten to two text entries, named `"{label} Min"` and
//! `"{label} Max"`, and contribute nothing unless both bound elements are
//! still present.

use popform_core::logging::trace;
use popform_dom::Host;

use crate::schema::ContentItem;

/// A collected field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Raw string value of a text, date, range, or numeric field.
    Text(String),
    /// Checked state of a checkbox.
    Bool(bool),
}

impl FieldValue {
    /// The string value, if this is a text entry.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Bool(_) => None,
        }
    }

    /// The boolean value, if this is a checkbox entry.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

/// One entry of the submit payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedValue {
    /// The schema identifier the value was read from.
    pub id: String,
    /// Display name: the item's name or label, falling back to the id.
    pub name: String,
    /// The live value at collection time.
    pub value: FieldValue,
}

/// Collected data for a whole schema, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    pub values: Vec<CollectedValue>,
}

impl FormData {
    /// Get a value by field identifier.
    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.values.iter().find(|v| v.id == id).map(|v| &v.value)
    }

    /// Number of collected entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read the current values of every schema field still present in the host.
pub fn collect<H: Host>(content: &[ContentItem], host: &H) -> FormData {
    let mut values = Vec::new();

    for item in content {
        match item {
            ContentItem::Date { id, name } => {
                push_text(&mut values, host, id, name.as_deref().unwrap_or(id));
            }
            ContentItem::Range { id, name, .. } => {
                push_text(&mut values, host, id, name.as_deref().unwrap_or(id));
            }
            ContentItem::TextInput { id, label, .. } => {
                push_text(&mut values, host, id, label.as_deref().unwrap_or(id));
            }
            ContentItem::CheckboxGroup { items } => {
                for item in items {
                    match host.element_by_id(&item.id) {
                        Some(element) => values.push(CollectedValue {
                            id: item.id.clone(),
                            name: item.name.clone(),
                            value: FieldValue::Bool(host.is_checked(element)),
                        }),
                        None => trace!("checkbox {} missing, skipped", item.id),
                    }
                }
            }
            ContentItem::InputRange {
                min_id,
                max_id,
                label,
                ..
            } => {
                let min = host.element_by_id(min_id).and_then(|el| host.value(el));
                let max = host.element_by_id(max_id).and_then(|el| host.value(el));
                // Both bounds or nothing; a half-present pair is meaningless.
                let (Some(min), Some(max)) = (min, max) else {
                    trace!("input-range {min_id}/{max_id} incomplete, skipped");
                    continue;
                };
                let label = label.as_deref().unwrap_or("");
                values.push(CollectedValue {
                    id: min_id.clone(),
                    name: format!("{label} Min"),
                    value: FieldValue::Text(min),
                });
                values.push(CollectedValue {
                    id: max_id.clone(),
                    name: format!("{label} Max"),
                    value: FieldValue::Text(max),
                });
            }
        }
    }

    FormData { values }
}

fn push_text<H: Host>(values: &mut Vec<CollectedValue>, host: &H, id: &str, name: &str) {
    let Some(value) = host.element_by_id(id).and_then(|el| host.value(el)) else {
        trace!("field {id} missing, skipped");
        return;
    };
    values.push(CollectedValue {
        id: id.to_string(),
        name: name.to_string(),
        value: FieldValue::Text(value),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_accessors() {
        assert_eq!(FieldValue::Text("x".into()).as_text(), Some("x"));
        assert_eq!(FieldValue::Text("x".into()).as_bool(), None);
        assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FieldValue::Bool(true).as_text(), None);
    }

    #[test]
    fn form_data_get_by_id() {
        let data = FormData {
            values: vec![
                CollectedValue {
                    id: "a".into(),
                    name: "A".into(),
                    value: FieldValue::Text("1".into()),
                },
                CollectedValue {
                    id: "b".into(),
                    name: "B".into(),
                    value: FieldValue::Bool(false),
                },
            ],
        };
        assert_eq!(data.get("a"), Some(&FieldValue::Text("1".into())));
        assert_eq!(data.get("b"), Some(&FieldValue::Bool(false)));
        assert_eq!(data.get("c"), None);
        assert_eq!(data.len(), 2);
        assert!(!data.is_empty());
    }
}
