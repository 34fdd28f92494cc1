//! # Item Style - style consolidation for layout items
//!
//! `item-style` decides which style values apply to the visual items of a
//! dashboard layout. It answers two questions for the style editor:
//!
//! 1. **What does a selection look like?** [`consolidate`] merges the styles
//!    of several selected items into one, marking properties that differ.
//! 2. **What does a single item start with?** [`resolve_initial_style`] reads
//!    a saved static style from the owning domain object, falling back to the
//!    item's own rendering attributes.
//!
//! Both are pure functions over a fixed registry of [`StyleProperty`] values.
//! Rendering and persistence are left to the caller.
//!
//! ## The sentinel
//!
//! A property that is unset, unknown, or mixed across a selection carries
//! [`StyleValue::NoValue`], written as [`NO_VALUE`] (`"__no_value"`) on the
//! wire. Editors show it as "mixed" or "none".
//!
//! ## Quick start
//!
//! ```rust
//! use item_style::{
//!     get_consolidated_style_values, get_initial_style_for_item, DomainObject, Item,
//!     StyleProperty, StyleValue,
//! };
//!
//! let object = DomainObject::from_json_str(r##"{
//!     "configuration": {
//!         "objectStyles": {
//!             "a": { "staticStyle": { "style": { "border": "1px solid #ccc" } } }
//!         }
//!     }
//! }"##).unwrap();
//!
//! let a = Item::new().with_id("a").with_type("box-view").with_attribute("fill", "#000");
//! let b = Item::new().with_id("b").with_type("box-view").with_attribute("fill", "#000");
//!
//! let styles = vec![
//!     get_initial_style_for_item(Some(&object), Some(&a)),
//!     get_initial_style_for_item(Some(&object), Some(&b)),
//! ];
//! let merged = get_consolidated_style_values(&styles);
//!
//! assert_eq!(merged.get(StyleProperty::BackgroundColor), Some(&StyleValue::from("#000")));
//! assert!(merged.is_non_specific(StyleProperty::Border));
//! ```
//!
//! ## Modules
//!
//! - [`style`]: The property registry, values and item style maps
//! - [`model`]: Domain objects and layout items
//! - [`config`]: Reading those from JSON or YAML

pub mod config;
mod consolidate;
pub mod model;
mod resolve;
pub mod style;

pub use config::ConfigFormat;
pub use consolidate::{consolidate, ConsolidatedStyle};
pub use model::{
    DomainObject, Item, ItemId, ItemStyleEntry, ObjectConfiguration, ObjectStyles, StaticStyle,
};
pub use resolve::{resolve_initial_style, static_style_for_item};
pub use style::{ItemKind, ItemStyle, StyleError, StyleProperty, StyleValue, NO_VALUE};

/// Returns the union of styles used by several items.
///
/// Properties not shared by every item, or with differing values, are set to
/// the sentinel and listed as non-specific. See [`consolidate`].
pub fn get_consolidated_style_values(styles: &[ItemStyle]) -> ConsolidatedStyle {
    consolidate(styles)
}

/// Returns an item's saved static style, or defaults from its rendering
/// attributes. See [`resolve_initial_style`].
pub fn get_initial_style_for_item(
    domain_object: Option<&DomainObject>,
    item: Option<&Item>,
) -> ItemStyle {
    resolve_initial_style(domain_object, item)
}
