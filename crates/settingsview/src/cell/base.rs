//! Shared cell chrome: the title label and the cell background.

use settingsview_core::logging::targets;
use settingsview_style::resolve::{resolve_color, resolve_font};

use crate::model::{CellProperty, DefaultsProperty, LabelCell, SettingsDefaults};
use crate::native::{NativePlatform, SharedStack, TextLabel};

use super::config::CellViewConfig;

/// The part of a cell view every cell type shares.
///
/// Owns the title label, which it inserts first into the content stack, and
/// styles the stack's background. Specific cell views compose a
/// `CellBaseView` and forward any notification they do not handle.
pub struct CellBaseView {
    title_label: Option<Box<dyn TextLabel>>,
    content: SharedStack,
    disabled_opacity: f32,
    enabled_opacity: f32,
}

impl CellBaseView {
    pub fn new(platform: &dyn NativePlatform, content: SharedStack, config: &CellViewConfig) -> Self {
        let title_label = platform.create_label();
        content.lock().add_arranged(title_label.view_id());

        Self {
            title_label: Some(title_label),
            content,
            disabled_opacity: config.disabled_opacity,
            enabled_opacity: config.enabled_opacity,
        }
    }

    /// The stack this cell's views are arranged in.
    pub fn content(&self) -> &SharedStack {
        &self.content
    }

    pub fn title_label(&self) -> Option<&dyn TextLabel> {
        self.title_label.as_deref()
    }

    /// Ask the content stack for a layout pass.
    pub fn request_layout(&self) {
        self.content.lock().set_needs_layout();
    }

    pub fn on_cell_property_changed(
        &mut self,
        property: CellProperty,
        cell: &LabelCell,
        defaults: Option<&SettingsDefaults>,
    ) {
        match property {
            CellProperty::Title => self.update_title_text(cell),
            CellProperty::TitleColor => self.update_title_color(cell, defaults),
            CellProperty::TitleFont(_) => {
                self.update_title_font(cell, defaults);
                self.request_layout();
            }
            CellProperty::BackgroundColor => self.update_background_color(cell, defaults),
            other => {
                tracing::trace!(target: targets::CELL, property = ?other, "not a base cell property");
            }
        }
    }

    pub fn on_defaults_property_changed(
        &mut self,
        property: DefaultsProperty,
        cell: &LabelCell,
        defaults: Option<&SettingsDefaults>,
    ) {
        match property {
            DefaultsProperty::CellTitleColor => self.update_title_color(cell, defaults),
            DefaultsProperty::CellTitleFont(_) => {
                self.update_title_font(cell, defaults);
                self.request_layout();
            }
            DefaultsProperty::CellBackgroundColor => self.update_background_color(cell, defaults),
            other => {
                tracing::trace!(target: targets::CELL, property = ?other, "not a base defaults property");
            }
        }
    }

    /// Re-apply everything the base owns.
    pub fn refresh(&mut self, cell: &LabelCell, defaults: Option<&SettingsDefaults>) {
        self.update_title_text(cell);
        self.update_title_color(cell, defaults);
        self.update_title_font(cell, defaults);
        self.update_background_color(cell, defaults);
    }

    /// Dim or restore the title label.
    pub fn set_enabled_appearance(&mut self, enabled: bool) {
        let opacity = if enabled {
            self.enabled_opacity
        } else {
            self.disabled_opacity
        };
        if let Some(label) = self.title_label.as_mut() {
            label.set_opacity(opacity);
        }
    }

    /// Remove the title label from the stack and release it.
    pub fn dispose(&mut self) {
        if let Some(label) = self.title_label.take() {
            self.content.lock().remove_arranged(label.view_id());
        }
    }

    fn update_title_text(&mut self, cell: &LabelCell) {
        let title = cell.title();
        if let Some(label) = self.title_label.as_mut() {
            label.set_text(Some(&title));
        }
    }

    fn update_title_color(&mut self, cell: &LabelCell, defaults: Option<&SettingsDefaults>) {
        let container = defaults.map(SettingsDefaults::cell_title_color);
        let Some(color) = resolve_color(&cell.title_color(), container.as_ref()) else {
            return;
        };
        if let Some(label) = self.title_label.as_mut() {
            label.set_text_color(color);
        }
    }

    fn update_title_font(&mut self, cell: &LabelCell, defaults: Option<&SettingsDefaults>) {
        let Some(label) = self.title_label.as_mut() else {
            return;
        };
        if label.font().is_none() {
            tracing::trace!(target: targets::CELL, "title font not realized, skipping");
            return;
        }

        let container = defaults.map(SettingsDefaults::title_font_defaults);
        if let Some(font) = resolve_font(&cell.title_font_spec(), container.as_ref()) {
            label.set_font(font);
        }
    }

    fn update_background_color(&mut self, cell: &LabelCell, defaults: Option<&SettingsDefaults>) {
        let container = defaults.map(SettingsDefaults::cell_background_color);
        if let Some(color) = resolve_color(&cell.background_color(), container.as_ref()) {
            self.content.lock().set_background_color(color);
        }
    }
}
