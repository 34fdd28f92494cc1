//! Consolidation of styles across a multi-item selection.
//!
//! When several items are edited together, the style controls show one value
//! per property. A property keeps its value only when every selected item
//! defines it with the same value; otherwise it becomes the sentinel and is
//! reported as *non-specific*.

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::style::{ItemStyle, StyleProperty, StyleValue};

/// The consolidated style of a selection.
///
/// Serializes as a flat object: one key per property plus a `nonSpecific`
/// array, e.g. `{"border": "#ccc", "color": "__no_value", "nonSpecific": ["color"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsolidatedStyle {
    style: ItemStyle,
    non_specific: BTreeSet<StyleProperty>,
}

impl ConsolidatedStyle {
    /// The representative style. Non-specific properties hold the sentinel.
    pub fn style(&self) -> &ItemStyle {
        &self.style
    }

    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.style.get(property)
    }

    /// Properties whose values differ across the selection, in registry order.
    pub fn non_specific(&self) -> &BTreeSet<StyleProperty> {
        &self.non_specific
    }

    pub fn is_non_specific(&self, property: StyleProperty) -> bool {
        self.non_specific.contains(&property)
    }

    pub fn into_style(self) -> ItemStyle {
        self.style
    }
}

impl Serialize for ConsolidatedStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.style.len() + 1))?;
        for (property, value) in &self.style {
            map.serialize_entry(property, value)?;
        }
        map.serialize_entry("nonSpecific", &self.non_specific)?;
        map.end()
    }
}

/// Merges per-item styles into one representative style.
///
/// For each registry property:
///
/// - no style defines it: the property is left out;
/// - some style lacks it, or the defined values differ: the sentinel, and the
///   property is marked non-specific;
/// - every style defines it with the same value: that value.
///
/// The result does not depend on the order of `styles`.
///
/// # Example
///
/// ```rust
/// use item_style::{consolidate, ItemStyle, StyleProperty, StyleValue};
///
/// let a = ItemStyle::new()
///     .with(StyleProperty::Border, "#ccc")
///     .with(StyleProperty::Color, "#fff");
/// let b = ItemStyle::new()
///     .with(StyleProperty::Border, "#ccc")
///     .with(StyleProperty::Color, "#000");
///
/// let merged = consolidate(&[a, b]);
/// assert_eq!(merged.get(StyleProperty::Border), Some(&StyleValue::from("#ccc")));
/// assert_eq!(merged.get(StyleProperty::Color), Some(&StyleValue::NoValue));
/// assert!(merged.is_non_specific(StyleProperty::Color));
/// ```
pub fn consolidate(styles: &[ItemStyle]) -> ConsolidatedStyle {
    let mut consolidated = ConsolidatedStyle::default();

    for &property in StyleProperty::all() {
        let values: Vec<&StyleValue> = styles
            .iter()
            .filter_map(|style| style.get(property))
            .collect();

        let Some(first) = values.first().copied() else {
            continue;
        };

        let uniform =
            values.len() == styles.len() && values.iter().all(|value| *value == first);

        if uniform {
            consolidated.style.insert(property, first.clone());
        } else {
            consolidated.style.insert(property, StyleValue::NoValue);
            consolidated.non_specific.insert(property);
        }
    }

    tracing::debug!(
        items = styles.len(),
        non_specific = ?consolidated.non_specific,
        "consolidated item styles"
    );

    consolidated
}
