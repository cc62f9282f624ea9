//! Cascading attribute resolution.
//!
//! A cell may override any styling attribute; whatever it leaves unset falls
//! back to the container's default for every cell. Resolution is a pure
//! function of the two inputs and is re-run on every change, so nothing
//! derived is ever cached.
//!
//! Resolution is partial: `None` means "not enough data yet, leave the native
//! view as it is". Callers must never substitute a hardcoded value for `None`.
//!
//! # Example
//!
//! ```
//! use settingsview_style::prelude::*;
//!
//! let cell = FontSpec { size: 20.0, ..FontSpec::default() };
//! let defaults = FontDefaults {
//!     family: FontFamily::name("Georgia"),
//!     size: 17.0,
//!     attributes: FontAttributes::ITALIC,
//! };
//!
//! // The cell overrides only the size and inherits the rest.
//! let font = resolve_font(&cell, Some(&defaults)).unwrap();
//! assert_eq!(font.size(), 20.0);
//! assert_eq!(font.family(), &FontFamily::name("Georgia"));
//! assert!(font.is_italic());
//! ```

mod color;
mod font;

pub use color::resolve_color;
pub use font::{resolve_font, FontDefaults, FontSpec};
