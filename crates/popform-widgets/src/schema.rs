#![forbid(unsafe_code)]

//! The content schema: an ordered list of field descriptors.
//!
//! Each [`ContentItem`] variant carries its kind's required attributes as
//! plain fields and its optional attributes as `Option`s, so a schema that
//! omits a required attribute does not construct. Identifiers bind schema
//! entries to live elements; they must be unique within one popover (checked
//! by [`crate::validate`]).

/// A single form field definition.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    /// A calendar date picker.
    Date {
        id: String,
        /// Display name, used for the collected entry and the `name` attribute.
        name: Option<String>,
    },
    /// A group of labelled checkboxes, one collected boolean per sub-item.
    CheckboxGroup { items: Vec<CheckboxItem> },
    /// A slider over a numeric interval.
    Range {
        id: String,
        min: f64,
        max: f64,
        step: Option<f64>,
        name: Option<String>,
    },
    /// Single-line text input.
    TextInput {
        id: String,
        label: Option<String>,
        placeholder: Option<String>,
        default_value: Option<String>,
        /// Regular expression rendered as the input's `pattern` attribute.
        pattern: Option<String>,
    },
    /// A min/max bound pair entered as two numeric inputs.
    InputRange {
        id: String,
        min_id: String,
        max_id: String,
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
        label: Option<String>,
    },
}

impl ContentItem {
    /// Create a date picker field.
    pub fn date(id: impl Into<String>) -> Self {
        Self::Date {
            id: id.into(),
            name: None,
        }
    }

    /// Create a checkbox group.
    pub fn checkbox_group(items: Vec<CheckboxItem>) -> Self {
        Self::CheckboxGroup { items }
    }

    /// Create a slider field.
    pub fn range(id: impl Into<String>, min: f64, max: f64) -> Self {
        Self::Range {
            id: id.into(),
            min,
            max,
            step: None,
            name: None,
        }
    }

    /// Create a text input field.
    pub fn text_input(id: impl Into<String>) -> Self {
        Self::TextInput {
            id: id.into(),
            label: None,
            placeholder: None,
            default_value: None,
            pattern: None,
        }
    }

    /// Create a dual-bound numeric pair field.
    pub fn input_range(
        id: impl Into<String>,
        min_id: impl Into<String>,
        max_id: impl Into<String>,
    ) -> Self {
        Self::InputRange {
            id: id.into(),
            min_id: min_id.into(),
            max_id: max_id.into(),
            min: None,
            max: None,
            step: None,
            label: None,
        }
    }

    /// All identifiers this item stamps onto generated elements.
    ///
    /// Includes the input-range container id alongside its two bound-field
    /// ids; the uniqueness invariant covers everything rendered.
    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            Self::Date { id, .. } | Self::Range { id, .. } | Self::TextInput { id, .. } => {
                vec![id.as_str()]
            }
            Self::CheckboxGroup { items } => items.iter().map(|i| i.id.as_str()).collect(),
            Self::InputRange {
                id, min_id, max_id, ..
            } => vec![id.as_str(), min_id.as_str(), max_id.as_str()],
        }
    }
}

/// One checkbox inside a [`ContentItem::CheckboxGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxItem {
    pub id: String,
    /// Display name, shown as the checkbox label.
    pub name: String,
    /// Initial checked state.
    pub checked: bool,
}

impl CheckboxItem {
    /// Create a checkbox sub-item.
    pub fn new(id: impl Into<String>, name: impl Into<String>, checked: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_defaults() {
        let item = ContentItem::range("r", 0.0, 10.0);
        assert_eq!(
            item,
            ContentItem::Range {
                id: "r".into(),
                min: 0.0,
                max: 10.0,
                step: None,
                name: None,
            }
        );
    }

    #[test]
    fn identifiers_for_scalar_fields() {
        assert_eq!(ContentItem::date("d").identifiers(), vec!["d"]);
        assert_eq!(ContentItem::text_input("t").identifiers(), vec!["t"]);
    }

    #[test]
    fn identifiers_for_checkbox_group_list_each_sub_item() {
        let group = ContentItem::checkbox_group(vec![
            CheckboxItem::new("a", "A", false),
            CheckboxItem::new("b", "B", true),
        ]);
        assert_eq!(group.identifiers(), vec!["a", "b"]);
    }

    #[test]
    fn identifiers_for_input_range_include_container_and_bounds() {
        let pair = ContentItem::input_range("price", "price-min", "price-max");
        assert_eq!(pair.identifiers(), vec!["price", "price-min", "price-max"]);
    }
}
