//! The style property registry.
//!
//! Every style property an item can carry is listed here once, together with
//! the rendering attribute it falls back to and the item types it applies to.
//!
//! | Property | Render attribute | Applies to | Untyped items |
//! |----------|------------------|------------|---------------|
//! | `backgroundColor` | `fill` | text, telemetry, box | yes |
//! | `border` | `stroke` | text, telemetry, box, image, line | yes |
//! | `color` | `color` | text, telemetry | yes |
//! | `imageUrl` | `url` | image | no |

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::StyleError;

/// A style property that can be set on a layout item.
///
/// Variants are declared in registry order, and the derived `Ord` follows it,
/// so ordered collections of properties iterate the same way the registry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StyleProperty {
    #[serde(rename = "backgroundColor")]
    BackgroundColor,
    #[serde(rename = "border")]
    Border,
    #[serde(rename = "color")]
    Color,
    #[serde(rename = "imageUrl")]
    ImageUrl,
}

/// Item type tags known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    TextView,
    TelemetryView,
    BoxView,
    ImageView,
    LineView,
    /// Any other type tag. No style property applies to it.
    Other,
}

impl ItemKind {
    /// Classifies an item type tag.
    ///
    /// Returns `None` when the item has no type. An empty tag counts as no
    /// type at all.
    pub fn from_type(item_type: Option<&str>) -> Option<ItemKind> {
        let kind = match item_type? {
            "" => return None,
            "text-view" => ItemKind::TextView,
            "telemetry-view" => ItemKind::TelemetryView,
            "box-view" => ItemKind::BoxView,
            "image-view" => ItemKind::ImageView,
            "line-view" => ItemKind::LineView,
            _ => ItemKind::Other,
        };
        Some(kind)
    }
}

struct PropertyInfo {
    name: &'static str,
    render_attribute: &'static str,
    untyped: bool,
    kinds: &'static [ItemKind],
}

// Indexed by `StyleProperty as usize`.
static REGISTRY: [PropertyInfo; 4] = [
    PropertyInfo {
        name: "backgroundColor",
        render_attribute: "fill",
        untyped: true,
        kinds: &[ItemKind::TextView, ItemKind::TelemetryView, ItemKind::BoxView],
    },
    PropertyInfo {
        name: "border",
        render_attribute: "stroke",
        untyped: true,
        kinds: &[
            ItemKind::TextView,
            ItemKind::TelemetryView,
            ItemKind::BoxView,
            ItemKind::ImageView,
            ItemKind::LineView,
        ],
    },
    PropertyInfo {
        name: "color",
        render_attribute: "color",
        untyped: true,
        kinds: &[ItemKind::TextView, ItemKind::TelemetryView],
    },
    PropertyInfo {
        name: "imageUrl",
        render_attribute: "url",
        untyped: false,
        kinds: &[ItemKind::ImageView],
    },
];

static BY_NAME: Lazy<HashMap<&'static str, StyleProperty>> = Lazy::new(|| {
    StyleProperty::all()
        .iter()
        .map(|property| (property.name(), *property))
        .collect()
});

impl StyleProperty {
    /// All properties, in registry order.
    pub const fn all() -> &'static [StyleProperty] {
        &[
            StyleProperty::BackgroundColor,
            StyleProperty::Border,
            StyleProperty::Color,
            StyleProperty::ImageUrl,
        ]
    }

    fn info(self) -> &'static PropertyInfo {
        &REGISTRY[self as usize]
    }

    /// The property's name as it appears in saved configurations.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// The rendering attribute an item's default value is read from.
    ///
    /// # Example
    ///
    /// ```rust
    /// use item_style::StyleProperty;
    ///
    /// assert_eq!(StyleProperty::BackgroundColor.render_attribute(), "fill");
    /// assert_eq!(StyleProperty::ImageUrl.render_attribute(), "url");
    /// ```
    pub fn render_attribute(self) -> &'static str {
        self.info().render_attribute
    }

    /// Whether this property applies to items of the given type.
    ///
    /// `None` (or an empty tag) means the item type is unknown; every property
    /// except `imageUrl` applies then.
    ///
    /// # Example
    ///
    /// ```rust
    /// use item_style::StyleProperty;
    ///
    /// assert!(StyleProperty::Border.is_applicable(Some("line-view")));
    /// assert!(!StyleProperty::Color.is_applicable(Some("box-view")));
    /// assert!(!StyleProperty::ImageUrl.is_applicable(None));
    /// ```
    pub fn is_applicable(self, item_type: Option<&str>) -> bool {
        self.applies_to(ItemKind::from_type(item_type))
    }

    /// Same as [`is_applicable`](Self::is_applicable), for an already
    /// classified item.
    pub fn applies_to(self, kind: Option<ItemKind>) -> bool {
        let info = self.info();
        match kind {
            None => info.untyped,
            Some(kind) => info.kinds.contains(&kind),
        }
    }

    /// Properties applicable to the given item type, in registry order.
    pub fn applicable(item_type: Option<&str>) -> impl Iterator<Item = StyleProperty> {
        let kind = ItemKind::from_type(item_type);
        Self::all()
            .iter()
            .copied()
            .filter(move |property| property.applies_to(kind))
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleProperty {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| StyleError::UnknownProperty {
                name: s.to_string(),
            })
    }
}
