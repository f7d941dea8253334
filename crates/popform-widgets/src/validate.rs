#![forbid(unsafe_code)]

//! Content schema validation.
//!
//! Runs once, before the first build. The typed [`ContentItem`] enum already
//! guarantees every kind carries its required attributes, so what remains
//! are the constraints types cannot express: non-empty checkbox groups,
//! non-blank identifiers, identifier uniqueness, and text-input patterns
//! that actually compile as regular expressions. All violations are
//! reported, not just the first; validation itself never fails.

use std::collections::HashSet;
use std::fmt;

use regex::Regex;

use crate::schema::ContentItem;

/// A constraint violated by one schema entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    /// A checkbox group with no sub-items renders nothing and collects nothing.
    EmptyCheckboxGroup { index: usize },
    /// An empty or whitespace identifier cannot bind a live element.
    BlankIdentifier { index: usize },
    /// The text-input validation pattern is not a valid regular expression.
    InvalidPattern { id: String, message: String },
    /// The same identifier is used by more than one rendered field.
    DuplicateIdentifier { id: String },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCheckboxGroup { index } => {
                write!(f, "content item {index}: checkbox group has no items")
            }
            Self::BlankIdentifier { index } => {
                write!(f, "content item {index}: blank identifier")
            }
            Self::InvalidPattern { id, message } => {
                write!(f, "field {id}: validation pattern is not a valid regular expression: {message}")
            }
            Self::DuplicateIdentifier { id } => {
                write!(f, "identifier {id} is used by more than one field")
            }
        }
    }
}

impl std::error::Error for SchemaViolation {}

/// Validate a content schema.
///
/// Returns every violation found, in schema order. A schema that passes
/// renders and collects without surprises; a schema that fails must not be
/// rendered at all.
pub fn validate(content: &[ContentItem]) -> Result<(), Vec<SchemaViolation>> {
    let mut violations = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, item) in content.iter().enumerate() {
        if let ContentItem::CheckboxGroup { items } = item
            && items.is_empty()
        {
            violations.push(SchemaViolation::EmptyCheckboxGroup { index });
        }

        if let ContentItem::TextInput {
            id,
            pattern: Some(pattern),
            ..
        } = item
            && let Err(err) = Regex::new(pattern)
        {
            violations.push(SchemaViolation::InvalidPattern {
                id: id.clone(),
                message: err.to_string(),
            });
        }

        for id in item.identifiers() {
            if id.trim().is_empty() {
                violations.push(SchemaViolation::BlankIdentifier { index });
                continue;
            }
            if !seen.insert(id) {
                violations.push(SchemaViolation::DuplicateIdentifier { id: id.to_string() });
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CheckboxItem;

    #[test]
    fn valid_schema_passes() {
        let content = vec![
            ContentItem::date("when"),
            ContentItem::checkbox_group(vec![
                CheckboxItem::new("terms", "Terms", false),
                CheckboxItem::new("privacy", "Privacy", true),
            ]),
            ContentItem::range("volume", 0.0, 100.0),
            ContentItem::text_input("name"),
            ContentItem::input_range("price", "price-min", "price-max"),
        ];
        assert!(validate(&content).is_ok());
    }

    #[test]
    fn empty_schema_passes() {
        assert!(validate(&[]).is_ok());
    }

    // --- Per-kind constraints ---

    #[test]
    fn empty_checkbox_group_is_rejected() {
        let content = vec![ContentItem::checkbox_group(vec![])];
        let violations = validate(&content).unwrap_err();
        assert_eq!(
            violations,
            vec![SchemaViolation::EmptyCheckboxGroup { index: 0 }]
        );
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let content = vec![ContentItem::TextInput {
            id: "user".into(),
            label: None,
            placeholder: None,
            default_value: None,
            pattern: Some("[unclosed".into()),
        }];
        let violations = validate(&content).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0],
            SchemaViolation::InvalidPattern { id, .. } if id == "user"
        ));
    }

    #[test]
    fn valid_pattern_is_accepted() {
        let content = vec![ContentItem::TextInput {
            id: "user".into(),
            label: None,
            placeholder: None,
            default_value: None,
            pattern: Some("^[a-zA-Z0-9_]+$".into()),
        }];
        assert!(validate(&content).is_ok());
    }

    // --- Identifier invariants ---

    #[test]
    fn blank_identifier_is_rejected() {
        let content = vec![ContentItem::text_input("  ")];
        let violations = validate(&content).unwrap_err();
        assert_eq!(violations, vec![SchemaViolation::BlankIdentifier { index: 0 }]);
    }

    #[test]
    fn duplicate_identifier_across_items_is_rejected() {
        let content = vec![ContentItem::date("x"), ContentItem::text_input("x")];
        let violations = validate(&content).unwrap_err();
        assert_eq!(
            violations,
            vec![SchemaViolation::DuplicateIdentifier { id: "x".into() }]
        );
    }

    #[test]
    fn duplicate_identifier_within_checkbox_group_is_rejected() {
        let content = vec![ContentItem::checkbox_group(vec![
            CheckboxItem::new("opt", "One", false),
            CheckboxItem::new("opt", "Two", false),
        ])];
        let violations = validate(&content).unwrap_err();
        assert_eq!(
            violations,
            vec![SchemaViolation::DuplicateIdentifier { id: "opt".into() }]
        );
    }

    #[test]
    fn input_range_bound_id_collision_is_rejected() {
        let content = vec![
            ContentItem::text_input("lo"),
            ContentItem::input_range("pair", "lo", "hi"),
        ];
        let violations = validate(&content).unwrap_err();
        assert_eq!(
            violations,
            vec![SchemaViolation::DuplicateIdentifier { id: "lo".into() }]
        );
    }

    #[test]
    fn all_violations_are_reported() {
        let content = vec![
            ContentItem::checkbox_group(vec![]),
            ContentItem::text_input(""),
            ContentItem::date("d"),
            ContentItem::date("d"),
        ];
        let violations = validate(&content).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn violations_display_name_the_field() {
        let v = SchemaViolation::DuplicateIdentifier { id: "u".into() };
        assert_eq!(v.to_string(), "identifier u is used by more than one field");
    }
}
