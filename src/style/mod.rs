//! Style primitives shared by consolidation and resolution.
//!
//! This module provides:
//!
//! - [`StyleProperty`]: The fixed registry of style properties
//! - [`ItemKind`]: Item type tags the registry knows about
//! - [`StyleValue`]: A concrete style value or the [`NO_VALUE`] sentinel
//! - [`ItemStyle`]: A per-item map from property to value
//! - [`StyleError`]: Errors from parsing and loading styles
//!
//! The registry is static data. Everything else is plain values, so the
//! operations built on top of it are pure functions.

mod error;
mod property;
mod value;

pub use error::StyleError;
pub use property::{ItemKind, StyleProperty};
pub use value::{ItemStyle, StyleValue, NO_VALUE};
