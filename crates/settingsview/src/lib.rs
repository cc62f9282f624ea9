//! Settings-list cell views for SettingsView.
//!
//! A settings list is a column of cells. Each cell shows a title and,
//! for a [`LabelCell`](model::LabelCell), a right-aligned value text. Cells
//! may style their text themselves, or leave attributes unset and inherit the
//! list-wide [`SettingsDefaults`](model::SettingsDefaults).
//!
//! This crate keeps native views consistent with both sources:
//!
//! - **Models** ([`model`]): observable cell data and list defaults
//! - **Native layer** ([`native`]): the label/stack traits views drive, plus
//!   a headless backend
//! - **Cell views** ([`cell`]): subscribe to both models and re-resolve the
//!   effective style on every change
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use settingsview::prelude::*;
//!
//! let platform = HeadlessPlatform::new();
//! let stack = Arc::new(Mutex::new(HeadlessStack::new()));
//! let defaults = Arc::new(SettingsDefaults::new());
//! let cell = Arc::new(LabelCell::new("Bluetooth"));
//!
//! let mut view = LabelCellView::new(&cell, &platform, stack.clone());
//! view.attach_defaults(&defaults).unwrap();
//! view.bind().unwrap();
//!
//! cell.set_value_text("Off");
//! defaults.set_cell_value_text_color(Color::GRAY);
//!
//! assert_eq!(view.with_value_label(|l| l.text().map(str::to_owned)), Some(Some("Off".into())));
//! assert_eq!(view.with_value_label(|l| l.text_color()), Some(Color::GRAY));
//! ```

pub mod cell;
pub mod model;
pub mod native;

mod error;

pub use error::{CellError, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::cell::{CellViewConfig, LabelCellView, ViewState};
    pub use crate::error::CellError;
    pub use crate::model::{CellProperty, DefaultsProperty, FontPart, LabelCell, SettingsDefaults};
    pub use crate::native::headless::{HeadlessPlatform, HeadlessStack};
    pub use crate::native::{ContentStack, LabelSnapshot, NativePlatform, SharedStack, TextLabel};
    pub use settingsview_style::prelude::*;
}
