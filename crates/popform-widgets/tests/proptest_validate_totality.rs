//! Property-based totality tests for schema validation.
//!
//! For arbitrary schemas over a small identifier pool (chosen to provoke
//! duplicates and blanks):
//!
//! 1. `validate` never panics.
//! 2. `validate` fails exactly when some item violates its contract
//!    (checked against an independent reference predicate).
//! 3. Validation is pure: two runs agree.

use std::collections::HashSet;

use popform_widgets::{CheckboxItem, ContentItem, validate};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const BAD_PATTERN: &str = "[";

fn id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        8 => "[a-d]{1,2}",
    ]
}

fn pattern_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("^[a-z0-9_]+$".to_string())),
        Just(Some(BAD_PATTERN.to_string())),
    ]
}

fn item_strategy() -> impl Strategy<Value = ContentItem> {
    prop_oneof![
        id_strategy().prop_map(|id| ContentItem::Date { id, name: None }),
        prop::collection::vec((id_strategy(), any::<bool>()), 0..3).prop_map(|subs| {
            ContentItem::CheckboxGroup {
                items: subs
                    .into_iter()
                    .map(|(id, checked)| CheckboxItem {
                        name: id.clone(),
                        id,
                        checked,
                    })
                    .collect(),
            }
        }),
        (id_strategy(), pattern_strategy()).prop_map(|(id, pattern)| ContentItem::TextInput {
            id,
            label: None,
            placeholder: None,
            default_value: None,
            pattern,
        }),
        (id_strategy(), id_strategy(), id_strategy()).prop_map(|(id, min_id, max_id)| {
            ContentItem::InputRange {
                id,
                min_id,
                max_id,
                min: None,
                max: None,
                step: None,
                label: None,
            }
        }),
    ]
}

fn schema_strategy() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(item_strategy(), 0..6)
}

/// Straight-line restatement of the contract from the violation table.
fn expect_invalid(content: &[ContentItem]) -> bool {
    let mut seen = HashSet::new();
    let mut invalid = false;
    for item in content {
        if let ContentItem::CheckboxGroup { items } = item
            && items.is_empty()
        {
            invalid = true;
        }
        if let ContentItem::TextInput {
            pattern: Some(pattern),
            ..
        } = item
            && pattern == BAD_PATTERN
        {
            invalid = true;
        }
        for id in item.identifiers() {
            if id.trim().is_empty() {
                invalid = true;
                continue;
            }
            if !seen.insert(id.to_string()) {
                invalid = true;
            }
        }
    }
    invalid
}

proptest! {
    #[test]
    fn fails_exactly_on_contract_violations(content in schema_strategy()) {
        let result = validate(&content);
        prop_assert_eq!(result.is_err(), expect_invalid(&content));
        if let Err(violations) = result {
            prop_assert!(!violations.is_empty());
        }
    }

    #[test]
    fn validation_is_pure(content in schema_strategy()) {
        prop_assert_eq!(validate(&content), validate(&content));
    }
}
