//! Loading domain objects, items and styles from configuration documents.
//!
//! The host application stores these as JSON; YAML is accepted as well for
//! hand-written fixtures.

use serde::de::DeserializeOwned;

use crate::model::{DomainObject, Item};
use crate::style::{ItemStyle, StyleError};

/// Document formats a style configuration can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Guesses the format from a file extension (`json`, `yaml`, `yml`).
    pub fn from_extension(ext: &str) -> Option<ConfigFormat> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    /// Parses a document in this format.
    pub fn parse<T: DeserializeOwned>(self, source: &str) -> Result<T, StyleError> {
        tracing::trace!(format = ?self, bytes = source.len(), "parsing style configuration");
        match self {
            ConfigFormat::Json => Ok(serde_json::from_str(source)?),
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(source)?),
        }
    }
}

impl DomainObject {
    /// Reads a domain object from JSON. Fields unrelated to styles are ignored.
    pub fn from_json_str(source: &str) -> Result<Self, StyleError> {
        ConfigFormat::Json.parse(source)
    }

    /// Reads a domain object from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, StyleError> {
        ConfigFormat::Yaml.parse(source)
    }
}

impl Item {
    pub fn from_json_str(source: &str) -> Result<Self, StyleError> {
        ConfigFormat::Json.parse(source)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, StyleError> {
        ConfigFormat::Yaml.parse(source)
    }
}

impl ItemStyle {
    /// Reads a style map. Keys outside the property registry are skipped.
    pub fn from_json_str(source: &str) -> Result<Self, StyleError> {
        ConfigFormat::Json.parse(source)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, StyleError> {
        ConfigFormat::Yaml.parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;
    use crate::style::{StyleProperty, StyleValue};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("YML"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("yaml"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("toml"), None);
    }

    #[test]
    fn test_domain_object_from_json() {
        let object = DomainObject::from_json_str(
            r##"{
                "configuration": {
                    "objectStyles": {
                        "7": { "staticStyle": { "style": { "border": "#ccc" } } }
                    }
                }
            }"##,
        )
        .unwrap();

        let styles = object.object_styles().unwrap();
        assert!(styles.item(&ItemId::from("7")).is_some());
    }

    #[test]
    fn test_domain_object_from_yaml() {
        let object = DomainObject::from_yaml_str(
            r##"
configuration:
  objectStyles:
    staticStyle:
      style:
        backgroundColor: "#000"
"##,
        )
        .unwrap();

        let style = object
            .object_styles()
            .and_then(|s| s.static_style.as_ref())
            .and_then(|s| s.style.as_ref())
            .unwrap();
        assert_eq!(
            style.get(StyleProperty::BackgroundColor),
            Some(&StyleValue::from("#000"))
        );
    }

    #[test]
    fn test_item_from_yaml_with_numeric_id() {
        let item = Item::from_yaml_str("id: 12\ntype: image-view\nurl: logo.png\n").unwrap();
        assert_eq!(item.id().map(ItemId::as_str), Some("12"));
        assert_eq!(item.attribute("url"), Some(StyleValue::from("logo.png")));
    }

    #[test]
    fn test_item_style_skips_unknown_property() {
        let style = ItemStyle::from_json_str(r#"{"opacity": "1", "color": "red"}"#).unwrap();
        assert_eq!(style, ItemStyle::new().with(StyleProperty::Color, "red"));
    }

    #[test]
    fn test_item_style_rejects_non_string_value() {
        let err = ItemStyle::from_json_str(r#"{"color": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, StyleError::Json(_)));
    }

    #[test]
    fn test_domain_object_with_host_style_keys_loads() {
        let object = DomainObject::from_json_str(
            r##"{
                "configuration": {
                    "objectStyles": {
                        "staticStyle": {
                            "style": { "border": "#ccc", "isStyleInvisible": "" }
                        }
                    }
                }
            }"##,
        )
        .unwrap();

        let style = object
            .object_styles()
            .and_then(|s| s.static_style.as_ref())
            .and_then(|s| s.style.as_ref())
            .unwrap();
        assert_eq!(style, &ItemStyle::new().with(StyleProperty::Border, "#ccc"));
    }

    #[test]
    fn test_yaml_numeric_item_keys() {
        let object = DomainObject::from_yaml_str(
            r##"
configuration:
  objectStyles:
    7:
      staticStyle:
        style:
          border: "#ff0"
"##,
        )
        .unwrap();

        let entry = object.object_styles().unwrap().item(&ItemId::from("7"));
        assert!(entry.is_some());
    }

    #[test]
    fn test_invalid_yaml_reports_yaml_error() {
        let err = DomainObject::from_yaml_str("configuration: [unterminated").unwrap_err();
        assert!(matches!(err, StyleError::Yaml(_)));
    }
}
