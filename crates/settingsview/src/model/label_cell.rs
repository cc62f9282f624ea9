//! The label cell model: a title with a secondary value text.

use settingsview_core::{Property, Signal};
use settingsview_style::resolve::FontSpec;
use settingsview_style::{Color, FontAttributes, FontFamily, StyleValue};

use super::notify::{CellProperty, FontPart};

/// One row of a settings list showing a title and a value text.
///
/// Every styling attribute has an "unset" encoding that defers to the
/// container's defaults:
///
/// | attribute        | unset encoding        |
/// |------------------|-----------------------|
/// | colours          | [`StyleValue::Unset`] |
/// | font sizes       | `0.0` (any `<= 0`)    |
/// | font families    | `None`                |
/// | font attributes  | `None`                |
///
/// # Example
///
/// ```
/// use settingsview::model::{CellProperty, LabelCell};
/// use settingsview_style::Color;
///
/// let cell = LabelCell::new("Wi-Fi");
/// cell.property_changed.connect(|p| assert_eq!(*p, CellProperty::ValueTextColor));
/// cell.set_value_text_color(Color::BLUE);
/// ```
pub struct LabelCell {
    title: Property<String>,
    title_color: Property<StyleValue<Color>>,
    title_font_size: Property<f32>,
    title_font_family: Property<Option<FontFamily>>,
    title_font_attributes: Property<Option<FontAttributes>>,
    value_text: Property<Option<String>>,
    value_text_color: Property<StyleValue<Color>>,
    value_text_font_size: Property<f32>,
    value_text_font_family: Property<Option<FontFamily>>,
    value_text_font_attributes: Property<Option<FontAttributes>>,
    background_color: Property<StyleValue<Color>>,
    enabled: Property<bool>,

    /// Emitted after any property changes value.
    pub property_changed: Signal<CellProperty>,
}

impl LabelCell {
    /// Create an enabled cell with the given title and every style attribute unset.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Property::new(title.into()),
            title_color: Property::default(),
            title_font_size: Property::new(0.0),
            title_font_family: Property::default(),
            title_font_attributes: Property::default(),
            value_text: Property::default(),
            value_text_color: Property::default(),
            value_text_font_size: Property::new(0.0),
            value_text_font_family: Property::default(),
            value_text_font_attributes: Property::default(),
            background_color: Property::default(),
            enabled: Property::new(true),
            property_changed: Signal::new(),
        }
    }

    /// Set the value text using builder pattern, without notification.
    pub fn with_value_text(self, text: impl Into<String>) -> Self {
        self.value_text.set_silent(Some(text.into()));
        self
    }

    pub fn title(&self) -> String {
        self.title.get()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        if self.title.set(title.into()) {
            self.property_changed.emit(CellProperty::Title);
        }
    }

    /// The secondary text shown right-aligned, if any.
    pub fn value_text(&self) -> Option<String> {
        self.value_text.get()
    }

    pub fn set_value_text(&self, text: impl Into<String>) {
        self.replace_value_text(Some(text.into()));
    }

    pub fn clear_value_text(&self) {
        self.replace_value_text(None);
    }

    fn replace_value_text(&self, text: Option<String>) {
        if self.value_text.set(text) {
            self.property_changed.emit(CellProperty::ValueText);
        }
    }

    notifying_property!(title_color, set_title_color: StyleValue<Color> => CellProperty::TitleColor);
    notifying_property!(
        title_font_size, set_title_font_size: f32 => CellProperty::TitleFont(FontPart::Size)
    );
    notifying_property!(
        title_font_family, set_title_font_family: Option<FontFamily>
            => CellProperty::TitleFont(FontPart::Family)
    );
    notifying_property!(
        title_font_attributes, set_title_font_attributes: Option<FontAttributes>
            => CellProperty::TitleFont(FontPart::Attributes)
    );
    notifying_property!(
        /// The value text colour, or [`StyleValue::Unset`] to use the container's.
        value_text_color, set_value_text_color: StyleValue<Color> => CellProperty::ValueTextColor
    );
    notifying_property!(
        /// The value text size in points; `0` uses the container's.
        value_text_font_size, set_value_text_font_size: f32
            => CellProperty::ValueTextFont(FontPart::Size)
    );
    notifying_property!(
        value_text_font_family, set_value_text_font_family: Option<FontFamily>
            => CellProperty::ValueTextFont(FontPart::Family)
    );
    notifying_property!(
        value_text_font_attributes, set_value_text_font_attributes: Option<FontAttributes>
            => CellProperty::ValueTextFont(FontPart::Attributes)
    );
    notifying_property!(
        background_color, set_background_color: StyleValue<Color> => CellProperty::BackgroundColor
    );
    notifying_property!(
        /// Whether the cell accepts interaction. Disabled cells are drawn dimmed.
        enabled, set_enabled: bool => CellProperty::Enabled
    );

    /// The cell-level title font overrides.
    pub fn title_font_spec(&self) -> FontSpec {
        FontSpec {
            family: self.title_font_family(),
            size: self.title_font_size(),
            attributes: self.title_font_attributes(),
        }
    }

    /// The cell-level value text font overrides.
    pub fn value_text_font_spec(&self) -> FontSpec {
        FontSpec {
            family: self.value_text_font_family(),
            size: self.value_text_font_size(),
            attributes: self.value_text_font_attributes(),
        }
    }
}

impl std::fmt::Debug for LabelCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelCell")
            .field("title", &self.title())
            .field("value_text", &self.value_text())
            .field("enabled", &self.enabled())
            .finish_non_exhaustive()
    }
}
