//! Property-based tests for style consolidation using proptest.

use item_style::{consolidate, ItemStyle, StyleProperty, StyleValue};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn property_strategy() -> impl Strategy<Value = StyleProperty> {
    prop::sample::select(StyleProperty::all().to_vec())
}

// A small value pool so that generated styles collide often.
fn value_strategy() -> impl Strategy<Value = StyleValue> {
    prop_oneof![
        4 => prop::sample::select(vec!["#000", "#fff", "#ccc", "x.png"])
            .prop_map(|value| StyleValue::from(value)),
        1 => Just(StyleValue::NoValue),
    ]
}

// Each registry property is independently present or absent.
fn style_strategy() -> impl Strategy<Value = ItemStyle> {
    prop::collection::vec(prop::option::of(value_strategy()), StyleProperty::all().len())
        .prop_map(|values| {
            StyleProperty::all()
                .iter()
                .copied()
                .zip(values)
                .filter_map(|(property, value)| value.map(|value| (property, value)))
                .collect::<ItemStyle>()
        })
}

fn styles_strategy() -> impl Strategy<Value = Vec<ItemStyle>> {
    prop::collection::vec(style_strategy(), 0..8)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Repeating one style yields that style with nothing non-specific.
    #[test]
    fn identical_styles_consolidate_to_themselves(
        style in style_strategy(),
        count in 1usize..6,
    ) {
        let styles = vec![style.clone(); count];
        let merged = consolidate(&styles);

        prop_assert_eq!(merged.style(), &style);
        prop_assert!(merged.non_specific().is_empty());
    }

    /// Two distinct values for a property always make it non-specific.
    #[test]
    fn conflicting_values_are_non_specific(
        mut styles in styles_strategy(),
        property in property_strategy(),
    ) {
        styles.push(ItemStyle::new().with(property, "#000"));
        styles.push(ItemStyle::new().with(property, "#fff"));

        let merged = consolidate(&styles);
        prop_assert_eq!(merged.get(property), Some(&StyleValue::NoValue));
        prop_assert!(merged.is_non_specific(property));
    }

    /// The input order never changes the result.
    #[test]
    fn consolidation_is_order_independent(
        (styles, shuffled) in styles_strategy().prop_flat_map(|styles| {
            let shuffled = Just(styles.clone()).prop_shuffle();
            (Just(styles), shuffled)
        }),
    ) {
        prop_assert_eq!(consolidate(&styles), consolidate(&shuffled));
    }

    /// Reversing is a permutation too; cheap to check on larger inputs.
    #[test]
    fn consolidation_ignores_reversal(styles in prop::collection::vec(style_strategy(), 0..32)) {
        let mut reversed = styles.clone();
        reversed.reverse();
        prop_assert_eq!(consolidate(&styles), consolidate(&reversed));
    }

    /// Output keys are exactly the properties some input defines, and every
    /// non-specific property holds the sentinel.
    #[test]
    fn output_covers_defined_properties(styles in styles_strategy()) {
        let merged = consolidate(&styles);

        for &property in StyleProperty::all() {
            let defined = styles.iter().any(|style| style.contains(property));
            prop_assert_eq!(merged.get(property).is_some(), defined);
        }
        for &property in merged.non_specific() {
            prop_assert_eq!(merged.get(property), Some(&StyleValue::NoValue));
        }
    }

    /// A property missing from any one item is non-specific.
    #[test]
    fn partially_defined_properties_are_non_specific(
        styles in prop::collection::vec(style_strategy(), 1..8),
        property in property_strategy(),
    ) {
        let mut styles = styles;
        styles[0].insert(property, "#ccc");
        styles.push(ItemStyle::new());

        let merged = consolidate(&styles);
        prop_assert!(merged.is_non_specific(property));
    }
}

#[test]
fn empty_input_yields_empty_result() {
    let merged = consolidate(&[]);
    assert!(merged.style().is_empty());
    assert!(merged.non_specific().is_empty());
    assert_eq!(
        serde_json::to_value(&merged).unwrap(),
        serde_json::json!({ "nonSpecific": [] })
    );
}
