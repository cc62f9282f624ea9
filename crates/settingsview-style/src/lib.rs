//! Cell styling for SettingsView.
//!
//! This crate provides the value types cells are styled with and the pure
//! resolver that decides which of a cell's value and its container's default
//! is in effect:
//!
//! - **Values**: [`Color`], [`Font`], [`FontFamily`], [`FontAttributes`]
//! - **Overrides**: [`StyleValue`] distinguishes an explicit value from "unset"
//! - **Cascading**: [`resolve::resolve_color`] and [`resolve::resolve_font`]
//!
//! # Example
//!
//! ```
//! use settingsview_style::prelude::*;
//!
//! let cell_color: StyleValue<Color> = StyleValue::Unset;
//! let container_color = StyleValue::Set(Color::RED);
//!
//! assert_eq!(resolve_color(&cell_color, Some(&container_color)), Some(Color::RED));
//! assert_eq!(resolve_color(&cell_color, None), None);
//! ```

pub mod resolve;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use types::{Axis, Color, Font, FontAttributes, FontFamily, StyleValue, TextAlign};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::resolve::{resolve_color, resolve_font, FontDefaults, FontSpec};
    pub use crate::types::{Axis, Color, Font, FontAttributes, FontFamily, StyleValue, TextAlign};
}
