//! Observable data models for settings cells.
//!
//! Models own their values in [`Property`](settingsview_core::Property) slots
//! and announce every real change on a single `property_changed` signal whose
//! argument names the property. Views subscribe to these signals; they never
//! poll.

/// Generates a getter and a notifying setter for one model property.
///
/// The setter emits only when the stored value actually changed.
macro_rules! notifying_property {
    ($(#[$doc:meta])* $getter:ident, $setter:ident: $ty:ty => $event:expr) => {
        $(#[$doc])*
        pub fn $getter(&self) -> $ty {
            self.$getter.get()
        }

        pub fn $setter(&self, value: impl Into<$ty>) {
            if self.$getter.set(value.into()) {
                self.property_changed.emit($event);
            }
        }
    };
}

mod defaults;
mod label_cell;
mod notify;

pub use defaults::{SettingsDefaults, DEFAULT_CELL_FONT_SIZE};
pub use label_cell::LabelCell;
pub use notify::{CellProperty, DefaultsProperty, FontPart};
