//! The label cell view: a title with a right-aligned value label.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use settingsview_core::logging::targets;
use settingsview_core::ConnectionGuard;
use settingsview_style::resolve::{resolve_color, resolve_font};
use settingsview_style::Axis;

use crate::error::{CellError, Result};
use crate::model::{CellProperty, DefaultsProperty, LabelCell, SettingsDefaults};
use crate::native::{LabelSnapshot, NativePlatform, SharedStack, TextLabel};

use super::base::CellBaseView;
use super::config::CellViewConfig;
use super::ViewState;

/// Keeps a value label in sync with a [`LabelCell`] and its list's
/// [`SettingsDefaults`].
///
/// Every effective attribute is re-derived from the model and the defaults
/// whenever either announces a change; the view never remembers which side
/// the displayed value came from.
///
/// # Lifecycle
///
/// - [`new`](Self::new) creates the value label and arranges it after the
///   title (state [`ViewState::Constructed`]).
/// - [`bind`](Self::bind) subscribes to the model and runs
///   [`refresh_all`](Self::refresh_all) (state [`ViewState::Bound`]).
/// - [`attach_defaults`](Self::attach_defaults) and
///   [`detach_defaults`](Self::detach_defaults) switch the container the cell
///   falls back to.
/// - [`dispose`](Self::dispose), or dropping the view, removes and releases
///   the native labels (state [`ViewState::Disposed`]).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use parking_lot::Mutex;
/// use settingsview::prelude::*;
///
/// let platform = HeadlessPlatform::new();
/// let stack = Arc::new(Mutex::new(HeadlessStack::new()));
/// let cell = Arc::new(LabelCell::new("Wi-Fi").with_value_text("Off"));
/// let defaults = Arc::new(SettingsDefaults::new());
/// defaults.set_cell_value_text_color(Color::RED);
///
/// let mut view = LabelCellView::new(&cell, &platform, stack.clone());
/// view.bind().unwrap();
/// view.attach_defaults(&defaults).unwrap();
///
/// assert_eq!(view.with_value_label(|l| l.text_color()), Some(Color::RED));
/// ```
pub struct LabelCellView {
    inner: Arc<Mutex<LabelCellInner>>,
    cell_connection: Option<ConnectionGuard<CellProperty>>,
    defaults_connection: Option<ConnectionGuard<DefaultsProperty>>,
}

struct LabelCellInner {
    base: CellBaseView,
    value_label: Option<Box<dyn TextLabel>>,
    cell: Weak<LabelCell>,
    defaults: Option<Weak<SettingsDefaults>>,
    config: CellViewConfig,
    state: ViewState,
}

impl LabelCellView {
    /// Create the view with the default configuration.
    pub fn new(cell: &Arc<LabelCell>, platform: &dyn NativePlatform, content: SharedStack) -> Self {
        Self::build(cell, platform, content, CellViewConfig::default())
    }

    /// Create the view with a custom configuration.
    pub fn with_config(
        cell: &Arc<LabelCell>,
        platform: &dyn NativePlatform,
        content: SharedStack,
        config: CellViewConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(cell, platform, content, config))
    }

    fn build(
        cell: &Arc<LabelCell>,
        platform: &dyn NativePlatform,
        content: SharedStack,
        config: CellViewConfig,
    ) -> Self {
        let base = CellBaseView::new(platform, content, &config);

        let mut value_label = platform.create_label();
        value_label.set_text_alignment(config.value_alignment);
        base.content().lock().add_arranged(value_label.view_id());
        value_label.set_content_hugging_priority(config.value_hugging_priority, Axis::Horizontal);
        value_label.set_compression_resistance_priority(
            config.value_compression_resistance,
            Axis::Horizontal,
        );

        tracing::debug!(
            target: targets::CELL,
            value_label = value_label.view_id().as_u64(),
            "label cell view constructed"
        );

        Self {
            inner: Arc::new(Mutex::new(LabelCellInner {
                base,
                value_label: Some(value_label),
                cell: Arc::downgrade(cell),
                defaults: None,
                config,
                state: ViewState::Constructed,
            })),
            cell_connection: None,
            defaults_connection: None,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> ViewState {
        self.inner.lock().state
    }

    /// Subscribe to the cell model and apply all of its attributes.
    ///
    /// Calling `bind` again (e.g. on reuse) replaces the subscription and
    /// refreshes once more.
    pub fn bind(&mut self) -> Result<()> {
        let cell = {
            let inner = self.inner.lock();
            if inner.state == ViewState::Disposed {
                return Err(CellError::Disposed);
            }
            inner.cell.upgrade().ok_or(CellError::ModelDropped)?
        };

        let weak = Arc::downgrade(&self.inner);
        self.cell_connection = Some(cell.property_changed.connect_scoped(move |property| {
            if let Some(inner) = weak.upgrade() {
                inner.lock().on_cell_property_changed(*property);
            }
        }));
        tracing::debug!(target: targets::CELL, "bound to cell model");

        self.refresh_all();
        Ok(())
    }

    /// Fall back to `defaults` for every attribute the cell leaves unset.
    ///
    /// Replaces any previously attached defaults, then refreshes.
    pub fn attach_defaults(&mut self, defaults: &Arc<SettingsDefaults>) -> Result<()> {
        if self.state() == ViewState::Disposed {
            return Err(CellError::Disposed);
        }

        self.defaults_connection = None;
        let weak = Arc::downgrade(&self.inner);
        self.defaults_connection = Some(defaults.property_changed.connect_scoped(move |property| {
            if let Some(inner) = weak.upgrade() {
                inner.lock().on_defaults_property_changed(*property);
            }
        }));
        self.inner.lock().defaults = Some(Arc::downgrade(defaults));
        tracing::debug!(target: targets::CELL, "attached container defaults");

        self.refresh_all();
        Ok(())
    }

    /// Stop falling back to any container.
    ///
    /// Already-applied values stay on screen; later updates resolve against
    /// the cell alone.
    pub fn detach_defaults(&mut self) {
        if let Some(connection) = self.defaults_connection.take() {
            if let Err(err) = connection.disconnect() {
                tracing::debug!(target: targets::CELL, %err, "defaults subscription already gone");
            }
        }
        self.inner.lock().defaults = None;
        tracing::debug!(target: targets::CELL, "detached container defaults");
    }

    /// Whether container defaults are currently attached.
    pub fn has_defaults(&self) -> bool {
        self.inner.lock().defaults_arc().is_some()
    }

    /// React to a change of one of the cell's properties.
    pub fn on_cell_property_changed(&self, property: CellProperty) {
        self.inner.lock().on_cell_property_changed(property);
    }

    /// React to a change of one of the container's defaults.
    pub fn on_defaults_property_changed(&self, property: DefaultsProperty) {
        self.inner.lock().on_defaults_property_changed(property);
    }

    /// Re-apply text, colour, font and enabled state from scratch.
    pub fn refresh_all(&self) {
        self.inner.lock().refresh_all();
    }

    /// Dim (disabled) or restore (enabled) the cell's labels.
    pub fn set_enabled_appearance(&self, enabled: bool) {
        self.inner.lock().set_enabled_appearance(enabled);
    }

    /// Remove the native labels from the content stack and release them.
    ///
    /// Subscriptions are revoked. Calling `dispose` again does nothing.
    pub fn dispose(&mut self) {
        self.cell_connection = None;
        self.defaults_connection = None;
        self.inner.lock().dispose();
    }

    /// Inspect the value label; `None` once disposed.
    ///
    /// `f` sees a snapshot taken under the view's lock and runs after the
    /// lock is released, so it may mutate the bound model.
    pub fn with_value_label<R>(&self, f: impl FnOnce(&LabelSnapshot) -> R) -> Option<R> {
        let snapshot = self
            .inner
            .lock()
            .value_label
            .as_deref()
            .map(|label| LabelSnapshot::capture(label))?;
        Some(f(&snapshot))
    }

    /// Inspect the title label; `None` once disposed.
    pub fn with_title_label<R>(&self, f: impl FnOnce(&LabelSnapshot) -> R) -> Option<R> {
        let snapshot = self
            .inner
            .lock()
            .base
            .title_label()
            .map(|label| LabelSnapshot::capture(label))?;
        Some(f(&snapshot))
    }
}

impl Drop for LabelCellView {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for LabelCellView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelCellView")
            .field("state", &self.state())
            .field("bound", &self.cell_connection.is_some())
            .field("has_defaults", &self.defaults_connection.is_some())
            .finish()
    }
}

impl LabelCellInner {
    fn defaults_arc(&self) -> Option<Arc<SettingsDefaults>> {
        self.defaults.as_ref().and_then(Weak::upgrade)
    }

    /// The live model and defaults, unless the view can no longer update.
    fn sources(
        &self,
        operation: &'static str,
    ) -> Option<(Arc<LabelCell>, Option<Arc<SettingsDefaults>>)> {
        if self.state == ViewState::Disposed {
            tracing::warn!(target: targets::CELL, operation, "label cell view used after dispose");
            return None;
        }
        let Some(cell) = self.cell.upgrade() else {
            tracing::trace!(target: targets::CELL, operation, "cell model dropped, skipping");
            return None;
        };
        Some((cell, self.defaults_arc()))
    }

    fn on_cell_property_changed(&mut self, property: CellProperty) {
        let Some((cell, defaults)) = self.sources("cell property changed") else {
            return;
        };
        tracing::trace!(target: targets::CELL, ?property, "cell property changed");

        match property {
            CellProperty::ValueText => self.update_value_text(&cell),
            CellProperty::ValueTextFont(_) => {
                self.update_value_text_font(&cell, defaults.as_deref());
                self.base.request_layout();
            }
            CellProperty::ValueTextColor => self.update_value_text_color(&cell, defaults.as_deref()),
            CellProperty::Enabled => self.set_enabled_appearance(cell.enabled()),
            other => self.base.on_cell_property_changed(other, &cell, defaults.as_deref()),
        }
    }

    fn on_defaults_property_changed(&mut self, property: DefaultsProperty) {
        let Some((cell, defaults)) = self.sources("defaults property changed") else {
            return;
        };
        tracing::trace!(target: targets::CELL, ?property, "defaults property changed");

        match property {
            DefaultsProperty::CellValueTextColor => {
                self.update_value_text_color(&cell, defaults.as_deref())
            }
            DefaultsProperty::CellValueTextFont(_) => {
                self.update_value_text_font(&cell, defaults.as_deref());
                self.base.request_layout();
            }
            other => self.base.on_defaults_property_changed(other, &cell, defaults.as_deref()),
        }
    }

    fn refresh_all(&mut self) {
        let Some((cell, defaults)) = self.sources("refresh") else {
            return;
        };

        self.update_value_text(&cell);
        self.update_value_text_color(&cell, defaults.as_deref());
        self.update_value_text_font(&cell, defaults.as_deref());
        self.base.refresh(&cell, defaults.as_deref());
        self.set_enabled_appearance(cell.enabled());

        if self.state == ViewState::Constructed {
            self.state = ViewState::Bound;
            tracing::debug!(target: targets::CELL, "label cell view bound");
        }
    }

    fn set_enabled_appearance(&mut self, enabled: bool) {
        if self.state == ViewState::Disposed {
            tracing::warn!(target: targets::CELL, "enabled appearance set after dispose");
            return;
        }
        let opacity = if enabled {
            self.config.enabled_opacity
        } else {
            self.config.disabled_opacity
        };
        if let Some(label) = self.value_label.as_mut() {
            label.set_opacity(opacity);
        }
        self.base.set_enabled_appearance(enabled);
    }

    fn update_value_text(&mut self, cell: &LabelCell) {
        let text = cell.value_text();
        if let Some(label) = self.value_label.as_mut() {
            label.set_text(text.as_deref());
        }
    }

    fn update_value_text_color(&mut self, cell: &LabelCell, defaults: Option<&SettingsDefaults>) {
        let container = defaults.map(SettingsDefaults::cell_value_text_color);
        let Some(color) = resolve_color(&cell.value_text_color(), container.as_ref()) else {
            return;
        };
        if let Some(label) = self.value_label.as_mut() {
            label.set_text_color(color);
        }
    }

    fn update_value_text_font(&mut self, cell: &LabelCell, defaults: Option<&SettingsDefaults>) {
        let Some(label) = self.value_label.as_mut() else {
            return;
        };
        // Toolkits mid-reload can hand out labels without a native font.
        if label.font().is_none() {
            tracing::trace!(target: targets::CELL, "value font not realized, skipping");
            return;
        }

        let container = defaults.map(SettingsDefaults::value_text_font_defaults);
        if let Some(font) = resolve_font(&cell.value_text_font_spec(), container.as_ref()) {
            label.set_font(font);
        }
    }

    fn dispose(&mut self) {
        if self.state == ViewState::Disposed {
            return;
        }
        if let Some(label) = self.value_label.take() {
            self.base.content().lock().remove_arranged(label.view_id());
        }
        self.base.dispose();
        self.defaults = None;
        self.state = ViewState::Disposed;
        tracing::debug!(target: targets::CELL, "label cell view disposed");
    }
}

static_assertions::assert_impl_all!(LabelCellView: Send, Sync);
