//! Cell view configuration.

use settingsview_style::TextAlign;

use crate::error::{CellError, Result};

/// Appearance and layout knobs for cell views.
///
/// # Example
///
/// ```
/// use settingsview::cell::CellViewConfig;
///
/// let config = CellViewConfig::default().with_disabled_opacity(0.5);
/// assert!(config.validate().is_ok());
/// assert!(CellViewConfig::default().with_enabled_opacity(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CellViewConfig {
    /// Opacity of labels while the cell is disabled.
    pub disabled_opacity: f32,
    /// Opacity of labels while the cell is enabled.
    pub enabled_opacity: f32,
    /// Alignment of the value label.
    pub value_alignment: TextAlign,
    /// Horizontal hugging priority of the value label.
    ///
    /// Lower than the title's, so the value label gives up space first.
    pub value_hugging_priority: f32,
    /// Horizontal compression resistance of the value label.
    pub value_compression_resistance: f32,
}

impl Default for CellViewConfig {
    fn default() -> Self {
        Self {
            disabled_opacity: 0.3,
            enabled_opacity: 1.0,
            value_alignment: TextAlign::Right,
            value_hugging_priority: 100.0,
            value_compression_resistance: 100.0,
        }
    }
}

impl CellViewConfig {
    pub fn with_disabled_opacity(mut self, opacity: f32) -> Self {
        self.disabled_opacity = opacity;
        self
    }

    pub fn with_enabled_opacity(mut self, opacity: f32) -> Self {
        self.enabled_opacity = opacity;
        self
    }

    pub fn with_value_alignment(mut self, align: TextAlign) -> Self {
        self.value_alignment = align;
        self
    }

    pub fn with_value_hugging_priority(mut self, priority: f32) -> Self {
        self.value_hugging_priority = priority;
        self
    }

    pub fn with_value_compression_resistance(mut self, priority: f32) -> Self {
        self.value_compression_resistance = priority;
        self
    }

    /// Check that opacities lie in `0..=1` and priorities are non-negative.
    pub fn validate(&self) -> Result<()> {
        let unit = |field, value: f32| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(CellError::InvalidConfig { field, value })
            }
        };
        let priority = |field, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(CellError::InvalidConfig { field, value })
            }
        };

        unit("disabled_opacity", self.disabled_opacity)?;
        unit("enabled_opacity", self.enabled_opacity)?;
        priority("value_hugging_priority", self.value_hugging_priority)?;
        priority("value_compression_resistance", self.value_compression_resistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = CellViewConfig::default();
        assert_eq!(config.disabled_opacity, 0.3);
        assert_eq!(config.value_alignment, TextAlign::Right);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = CellViewConfig::default()
            .with_disabled_opacity(-0.1)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            CellError::InvalidConfig {
                field: "disabled_opacity",
                value: -0.1
            }
        );

        assert!(CellViewConfig::default()
            .with_value_hugging_priority(f32::NAN)
            .validate()
            .is_err());
    }
}
