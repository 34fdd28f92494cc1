//! Style values and per-item style maps.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::error::StyleError;
use super::property::StyleProperty;

/// Reserved marker for a property that is unset, unknown, or differs across
/// the items being edited together.
pub const NO_VALUE: &str = "__no_value";

/// A style value: either concrete, or the [`NO_VALUE`] sentinel.
///
/// On the wire both are plain strings. The string [`NO_VALUE`] always reads
/// back as [`StyleValue::NoValue`], so a concrete value is never the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleValue {
    Value(String),
    NoValue,
}

impl StyleValue {
    /// Creates a concrete value, refusing the reserved sentinel.
    pub fn try_from_value(
        property: StyleProperty,
        value: impl Into<String>,
    ) -> Result<Self, StyleError> {
        let value = value.into();
        if value == NO_VALUE {
            return Err(StyleError::ReservedValue { property });
        }
        Ok(StyleValue::Value(value))
    }

    /// Returns the value as it is stored, with the sentinel as [`NO_VALUE`].
    pub fn as_str(&self) -> &str {
        match self {
            StyleValue::Value(value) => value,
            StyleValue::NoValue => NO_VALUE,
        }
    }

    /// Returns the concrete value, or `None` for the sentinel.
    pub fn value(&self) -> Option<&str> {
        match self {
            StyleValue::Value(value) => Some(value),
            StyleValue::NoValue => None,
        }
    }

    pub fn is_no_value(&self) -> bool {
        matches!(self, StyleValue::NoValue)
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        if value == NO_VALUE {
            StyleValue::NoValue
        } else {
            StyleValue::Value(value)
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::from(value.to_string())
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(StyleValue::from)
    }
}

/// The style of one item: a value (or sentinel) per style property.
///
/// Iteration follows registry order. Serialized as an object keyed by
/// property name, e.g. `{"border": "#ccc", "color": "__no_value"}`. Keys
/// outside the registry are skipped when reading; a registry property whose
/// value is not a string is an error.
///
/// # Example
///
/// ```rust
/// use item_style::{ItemStyle, StyleProperty, StyleValue};
///
/// let style = ItemStyle::new()
///     .with(StyleProperty::Color, "#fff")
///     .with(StyleProperty::Border, StyleValue::NoValue);
///
/// assert_eq!(style.get(StyleProperty::Color).unwrap().as_str(), "#fff");
/// assert!(style.get(StyleProperty::Border).unwrap().is_no_value());
/// assert!(style.get(StyleProperty::ImageUrl).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemStyle {
    values: BTreeMap<StyleProperty, StyleValue>,
}

impl ItemStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated style for chaining.
    pub fn with<V: Into<StyleValue>>(mut self, property: StyleProperty, value: V) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a property, returning the previous value if there was one.
    pub fn insert<V: Into<StyleValue>>(
        &mut self,
        property: StyleProperty,
        value: V,
    ) -> Option<StyleValue> {
        self.values.insert(property, value.into())
    }

    pub fn remove(&mut self, property: StyleProperty) -> Option<StyleValue> {
        self.values.remove(&property)
    }

    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.values.get(&property)
    }

    /// Whether the property is defined. A sentinel counts as defined.
    pub fn contains(&self, property: StyleProperty) -> bool {
        self.values.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over defined properties in registry order.
    pub fn iter(&self) -> btree_map::Iter<'_, StyleProperty, StyleValue> {
        self.values.iter()
    }

    /// Properties currently set to the sentinel, in registry order.
    pub fn unset(&self) -> impl Iterator<Item = StyleProperty> + '_ {
        self.values
            .iter()
            .filter(|(_, value)| value.is_no_value())
            .map(|(property, _)| *property)
    }
}

impl<'de> Deserialize<'de> for ItemStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut style = ItemStyle::new();
        for (key, value) in raw {
            let Ok(property) = key.parse::<StyleProperty>() else {
                tracing::trace!(key = %key, "skipping unknown style key");
                continue;
            };
            match value {
                Value::String(value) => {
                    style.insert(property, value);
                }
                other => {
                    return Err(D::Error::custom(format!(
                        "style property '{property}' expects a string, found {other}"
                    )));
                }
            }
        }
        Ok(style)
    }
}

impl<V: Into<StyleValue>> FromIterator<(StyleProperty, V)> for ItemStyle {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(property, value)| (property, value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemStyle {
    type Item = (&'a StyleProperty, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, StyleProperty, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
