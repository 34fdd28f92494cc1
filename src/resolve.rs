//! Initial style resolution for a single item.
//!
//! An item's starting style comes from one of two places, per property:
//!
//! 1. A **static style** saved in the owning domain object's configuration,
//!    either for this item specifically or for the whole object.
//! 2. The item's own **rendering attribute** for that property (`fill` for
//!    `backgroundColor`, `stroke` for `border`, and so on).
//!
//! Properties that do not apply to the item's type are left out. Applicable
//! properties with no value from either source are set to the sentinel.

use crate::model::{DomainObject, Item, ItemId};
use crate::style::{ItemKind, ItemStyle, StyleProperty, StyleValue};

/// Finds the static style that governs an item.
///
/// A per-item entry with a `staticStyle` decides when an id is given.
/// Otherwise the object-level static style is used. Returns `None` when no
/// static style is configured, which is different from a static style that
/// sets properties to the sentinel.
///
/// A per-item entry that has a `staticStyle` without a `style` still
/// decides, and yields `None`; it does not fall through to the object level.
pub fn static_style_for_item<'a>(
    domain_object: Option<&'a DomainObject>,
    id: Option<&ItemId>,
) -> Option<&'a ItemStyle> {
    let object_styles = domain_object?.object_styles()?;

    let item_static = id
        .and_then(|id| object_styles.item(id))
        .and_then(|entry| entry.static_style.as_ref());

    match item_static {
        Some(static_style) => {
            tracing::trace!(id = ?id, "using per-item static style");
            static_style.style.as_ref()
        }
        None => object_styles.static_style.as_ref()?.style.as_ref(),
    }
}

/// Computes the style an item starts out with.
///
/// Both inputs may be absent: without a domain object no static style is
/// consulted, and without an item every applicable property (for an untyped
/// item) is the sentinel.
///
/// # Example
///
/// ```rust
/// use item_style::{resolve_initial_style, Item, StyleProperty, StyleValue};
///
/// let item = Item::new()
///     .with_type("image-view")
///     .with_attribute("url", "x.png");
///
/// let style = resolve_initial_style(None, Some(&item));
/// assert_eq!(style.get(StyleProperty::ImageUrl), Some(&StyleValue::from("x.png")));
/// assert_eq!(style.get(StyleProperty::Border), Some(&StyleValue::NoValue));
/// assert!(style.get(StyleProperty::Color).is_none());
/// ```
pub fn resolve_initial_style(domain_object: Option<&DomainObject>, item: Option<&Item>) -> ItemStyle {
    let kind = ItemKind::from_type(item.and_then(Item::item_type));
    let id = item.and_then(Item::id);
    let static_style = static_style_for_item(domain_object, id);

    tracing::debug!(
        id = ?id,
        kind = ?kind,
        has_static_style = static_style.is_some(),
        "resolving initial item style"
    );

    StyleProperty::all()
        .iter()
        .copied()
        .filter(|property| property.applies_to(kind))
        .map(|property| {
            let value = static_style
                .and_then(|style| style.get(property).cloned())
                .or_else(|| item.and_then(|item| item.attribute(property.render_attribute())))
                .unwrap_or(StyleValue::NoValue);
            (property, value)
        })
        .collect()
}
