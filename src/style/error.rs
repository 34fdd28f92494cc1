//! Style errors.

use super::property::StyleProperty;

/// Error returned when a style or a style configuration cannot be read.
///
/// Consolidation and resolution never fail; these errors only come from
/// parsing names and loading documents.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A property name that is not part of the registry.
    #[error("unknown style property '{name}'")]
    UnknownProperty { name: String },

    /// The reserved sentinel was offered as a concrete value.
    #[error("'__no_value' is reserved and cannot be used as a value for '{property}'")]
    ReservedValue { property: StyleProperty },

    /// A JSON document could not be parsed.
    #[error("invalid JSON style configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML document could not be parsed.
    #[error("invalid YAML style configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
