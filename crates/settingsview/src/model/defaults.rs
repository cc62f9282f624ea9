//! List-wide styling defaults consulted by every cell in a settings list.

use settingsview_core::{Property, Signal};
use settingsview_style::resolve::FontDefaults;
use settingsview_style::{Color, FontAttributes, FontFamily, StyleValue};

use super::notify::{DefaultsProperty, FontPart};

/// Default point size for cell titles and value texts.
pub const DEFAULT_CELL_FONT_SIZE: f32 = 17.0;

/// The container-level fallback values for cell styling.
///
/// Font defaults are always concrete. Colours may still be
/// [`StyleValue::Unset`], in which case a cell that does not set its own
/// colour keeps whatever colour its native view already has.
pub struct SettingsDefaults {
    cell_title_color: Property<StyleValue<Color>>,
    cell_title_font_size: Property<f32>,
    cell_title_font_family: Property<FontFamily>,
    cell_title_font_attributes: Property<FontAttributes>,
    cell_value_text_color: Property<StyleValue<Color>>,
    cell_value_text_font_size: Property<f32>,
    cell_value_text_font_family: Property<FontFamily>,
    cell_value_text_font_attributes: Property<FontAttributes>,
    cell_background_color: Property<StyleValue<Color>>,

    /// Emitted after any default changes value.
    pub property_changed: Signal<DefaultsProperty>,
}

impl Default for SettingsDefaults {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDefaults {
    /// Create defaults with unset colours and the platform font at 17pt.
    pub fn new() -> Self {
        Self {
            cell_title_color: Property::default(),
            cell_title_font_size: Property::new(DEFAULT_CELL_FONT_SIZE),
            cell_title_font_family: Property::default(),
            cell_title_font_attributes: Property::default(),
            cell_value_text_color: Property::default(),
            cell_value_text_font_size: Property::new(DEFAULT_CELL_FONT_SIZE),
            cell_value_text_font_family: Property::default(),
            cell_value_text_font_attributes: Property::default(),
            cell_background_color: Property::default(),
            property_changed: Signal::new(),
        }
    }

    notifying_property!(
        cell_title_color, set_cell_title_color: StyleValue<Color> => DefaultsProperty::CellTitleColor
    );
    notifying_property!(
        cell_title_font_size, set_cell_title_font_size: f32
            => DefaultsProperty::CellTitleFont(FontPart::Size)
    );
    notifying_property!(
        cell_title_font_family, set_cell_title_font_family: FontFamily
            => DefaultsProperty::CellTitleFont(FontPart::Family)
    );
    notifying_property!(
        cell_title_font_attributes, set_cell_title_font_attributes: FontAttributes
            => DefaultsProperty::CellTitleFont(FontPart::Attributes)
    );
    notifying_property!(
        /// Value text colour for cells that leave theirs unset.
        cell_value_text_color, set_cell_value_text_color: StyleValue<Color>
            => DefaultsProperty::CellValueTextColor
    );
    notifying_property!(
        cell_value_text_font_size, set_cell_value_text_font_size: f32
            => DefaultsProperty::CellValueTextFont(FontPart::Size)
    );
    notifying_property!(
        cell_value_text_font_family, set_cell_value_text_font_family: FontFamily
            => DefaultsProperty::CellValueTextFont(FontPart::Family)
    );
    notifying_property!(
        cell_value_text_font_attributes, set_cell_value_text_font_attributes: FontAttributes
            => DefaultsProperty::CellValueTextFont(FontPart::Attributes)
    );
    notifying_property!(
        cell_background_color, set_cell_background_color: StyleValue<Color>
            => DefaultsProperty::CellBackgroundColor
    );

    /// Font defaults for cell titles.
    pub fn title_font_defaults(&self) -> FontDefaults {
        FontDefaults {
            family: self.cell_title_font_family(),
            size: self.cell_title_font_size(),
            attributes: self.cell_title_font_attributes(),
        }
    }

    /// Font defaults for cell value texts.
    pub fn value_text_font_defaults(&self) -> FontDefaults {
        FontDefaults {
            family: self.cell_value_text_font_family(),
            size: self.cell_value_text_font_size(),
            attributes: self.cell_value_text_font_attributes(),
        }
    }
}

impl std::fmt::Debug for SettingsDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsDefaults")
            .field("cell_value_text_color", &self.cell_value_text_color())
            .field("value_text_font", &self.value_text_font_defaults())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn fresh_defaults() {
        let defaults = SettingsDefaults::new();
        assert_eq!(defaults.cell_value_text_color(), StyleValue::Unset);
        assert_eq!(defaults.value_text_font_defaults(), FontDefaults::default());
        assert_eq!(defaults.title_font_defaults().size, DEFAULT_CELL_FONT_SIZE);
    }

    #[test]
    fn changes_are_announced_by_name() {
        let defaults = SettingsDefaults::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        defaults
            .property_changed
            .connect(move |p| seen_clone.lock().push(*p));

        defaults.set_cell_value_text_color(Color::RED);
        defaults.set_cell_value_text_font_size(DEFAULT_CELL_FONT_SIZE);
        defaults.set_cell_value_text_font_family(FontFamily::name("Georgia"));
        defaults.set_cell_background_color(Color::WHITE);

        assert_eq!(
            *seen.lock(),
            vec![
                DefaultsProperty::CellValueTextColor,
                DefaultsProperty::CellValueTextFont(FontPart::Family),
                DefaultsProperty::CellBackgroundColor,
            ]
        );
    }
}
