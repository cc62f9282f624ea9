//! Style value types.

mod color;
mod font;
mod layout;
mod value;

pub use color::Color;
pub use font::{Font, FontAttributes, FontFamily};
pub use layout::{Axis, TextAlign};
pub use value::StyleValue;
