//! Domain objects and layout items as seen by style resolution.
//!
//! Only the parts of a domain object that carry saved styles are modelled:
//!
//! ```json
//! {
//!   "configuration": {
//!     "objectStyles": {
//!       "staticStyle": { "style": { "border": "#ccc" } },
//!       "7": { "staticStyle": { "style": { "backgroundColor": "#000" } } }
//!     }
//!   }
//! }
//! ```
//!
//! Everything else on the object is ignored when reading.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::style::{ItemStyle, StyleError, StyleValue};

/// Identifier of an item within its owning domain object.
///
/// Source documents use either strings or integers; both are kept as the
/// string form, which is also how per-item style entries are keyed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl RawId {
    // A numeric zero id is falsy in the host application and never selects a
    // per-item entry.
    fn is_zero(&self) -> bool {
        matches!(self, RawId::Unsigned(0) | RawId::Signed(0))
    }
}

impl From<RawId> for ItemId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(id) => ItemId(id),
            RawId::Unsigned(id) => ItemId(id.to_string()),
            RawId::Signed(id) => ItemId(id.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(ItemId::from)
    }
}

fn deserialize_item_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ItemId>, D::Error> {
    Ok(Option::<RawId>::deserialize(deserializer)?
        .filter(|raw| !raw.is_zero())
        .map(ItemId::from))
}

/// A saved style, as stored under a `staticStyle` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ItemStyle>,
}

/// Saved styles for one item of a domain object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStyleEntry {
    #[serde(
        rename = "staticStyle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub static_style: Option<StaticStyle>,
}

/// The `objectStyles` block of a domain object's configuration.
///
/// Holds an optional object-level static style plus per-item entries keyed
/// by item id. Keys whose values are not objects (bookkeeping fields the host
/// application stores alongside) are skipped when reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ObjectStyles {
    pub static_style: Option<StaticStyle>,
    pub items: BTreeMap<ItemId, ItemStyleEntry>,
}

impl ObjectStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the object-level static style.
    pub fn with_static_style(mut self, style: ItemStyle) -> Self {
        self.static_style = Some(StaticStyle { style: Some(style) });
        self
    }

    /// Sets the static style saved for one item.
    pub fn with_item_style(mut self, id: impl Into<ItemId>, style: ItemStyle) -> Self {
        self.items.insert(
            id.into(),
            ItemStyleEntry {
                static_style: Some(StaticStyle { style: Some(style) }),
            },
        );
        self
    }

    pub fn item(&self, id: &ItemId) -> Option<&ItemStyleEntry> {
        self.items.get(id)
    }
}

const STATIC_STYLE_KEY: &str = "staticStyle";

impl TryFrom<Map<String, Value>> for ObjectStyles {
    type Error = StyleError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut styles = ObjectStyles::new();
        for (key, value) in map {
            if key == STATIC_STYLE_KEY {
                styles.static_style = serde_json::from_value(value)?;
            } else if value.is_object() {
                let entry: ItemStyleEntry = serde_json::from_value(value)?;
                styles.items.insert(ItemId(key), entry);
            } else {
                tracing::trace!(key = %key, "skipping non-item objectStyles entry");
            }
        }
        Ok(styles)
    }
}

impl From<ObjectStyles> for Map<String, Value> {
    fn from(styles: ObjectStyles) -> Self {
        let mut map = Map::new();
        if let Some(static_style) = styles.static_style {
            if let Ok(value) = serde_json::to_value(static_style) {
                map.insert(STATIC_STYLE_KEY.to_string(), value);
            }
        }
        for (id, entry) in styles.items {
            if let Ok(value) = serde_json::to_value(entry) {
                map.insert(id.0, value);
            }
        }
        map
    }
}

/// The part of a domain object's configuration that holds styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectConfiguration {
    #[serde(
        rename = "objectStyles",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub object_styles: Option<ObjectStyles>,
}

/// A domain object that may carry saved item styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ObjectConfiguration>,
}

impl DomainObject {
    /// Creates a domain object with no configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a domain object whose configuration holds the given styles.
    pub fn with_object_styles(object_styles: ObjectStyles) -> Self {
        Self {
            configuration: Some(ObjectConfiguration {
                object_styles: Some(object_styles),
            }),
        }
    }

    pub fn object_styles(&self) -> Option<&ObjectStyles> {
        self.configuration.as_ref()?.object_styles.as_ref()
    }
}

/// A layout item: an id, a type tag and its rendering attributes.
///
/// Any field other than `id` and `type` is a rendering attribute (`fill`,
/// `stroke`, `url`, but also geometry such as `x` or `width`).
///
/// # Example
///
/// ```rust
/// use item_style::Item;
///
/// let item = Item::new()
///     .with_id(3u64)
///     .with_type("box-view")
///     .with_attribute("fill", "#717171");
///
/// assert_eq!(item.id().unwrap().as_str(), "3");
/// assert_eq!(item.attribute("fill").unwrap().as_str(), "#717171");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(
        default,
        deserialize_with = "deserialize_item_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ItemId>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The item's id. An empty id counts as no id, and so does a numeric `0`
    /// read from a document.
    pub fn id(&self) -> Option<&ItemId> {
        self.id.as_ref().filter(|id| !id.0.is_empty())
    }

    /// The item's type tag. An empty tag counts as no type.
    pub fn item_type(&self) -> Option<&str> {
        self.item_type.as_deref().filter(|t| !t.is_empty())
    }

    /// Reads a rendering attribute as a style value.
    ///
    /// Strings are used as-is; numbers and booleans by their textual form.
    /// `null`, arrays and objects count as absent.
    pub fn attribute(&self, name: &str) -> Option<StyleValue> {
        match self.attributes.get(name)? {
            Value::String(s) => Some(StyleValue::from(s.as_str())),
            Value::Number(n) => Some(StyleValue::from(n.to_string())),
            Value::Bool(b) => Some(StyleValue::from(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}
