//! Change notifications emitted by cell models and container defaults.

/// Which part of a font changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontPart {
    Family,
    Size,
    Attributes,
}

/// A property of a [`LabelCell`](super::LabelCell) that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellProperty {
    Title,
    TitleColor,
    TitleFont(FontPart),
    ValueText,
    ValueTextColor,
    ValueTextFont(FontPart),
    BackgroundColor,
    Enabled,
}

/// A container-wide default of [`SettingsDefaults`](super::SettingsDefaults) that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultsProperty {
    CellTitleColor,
    CellTitleFont(FontPart),
    CellValueTextColor,
    CellValueTextFont(FontPart),
    CellBackgroundColor,
}
